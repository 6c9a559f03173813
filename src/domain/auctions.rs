// src/domain/auctions.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::bids::Bid;
use super::core::AuctionId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(rename = "id")]
    pub auction_id: AuctionId,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub bids: Vec<Bid>,
    closed: bool,
}

impl Auction {
    pub fn new(auction_id: AuctionId, description: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Auction {
            auction_id,
            description: description.into(),
            created_at,
            bids: Vec::new(),
            closed: false,
        }
    }

    pub fn propose(&mut self, bid: Bid) {
        self.bids.push(bid);
    }

    /// Closing is one way, there is no way back to open.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
