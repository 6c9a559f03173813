// src/domain/payments.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    value: Amount,
    #[serde(rename = "dueDate")]
    due_date: NaiveDate,
}

impl Payment {
    pub fn new(value: Amount, due_date: NaiveDate) -> Self {
        Payment { value, due_date }
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}
