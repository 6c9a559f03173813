// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use crate::money::Amount;
use super::core::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: User,
    #[serde(rename = "amount")]
    pub bid_amount: Amount,
}

impl Bid {
    pub fn new(bidder: User, bid_amount: Amount) -> Self {
        Bid { bidder, bid_amount }
    }
}
