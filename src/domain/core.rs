// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type UserId = String;
pub type AuctionId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    /// Where the winner notification is delivered.
    pub email: String,
}

impl User {
    pub fn new(user_id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// A bulk fetch from a repository failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to read auctions: {0}")]
pub struct ReadError(pub String);

/// A repository write failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to persist: {0}")]
pub struct PersistenceError(pub String);

/// The notifier could not deliver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to notify: {0}")]
pub struct NotificationError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Cannot evaluate auction without bids: {0}")]
    NoBids(AuctionId),

    #[error("Auction {0} has bids in more than one currency")]
    CurrencyMismatch(AuctionId),

    #[error("No auction has been evaluated")]
    NotEvaluated,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}
