use crate::domain::{Auction, Payment, PersistenceError, ReadError};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait AuctionRepository {
    /// Auctions that have not been closed yet.
    fn open_auctions(&self) -> Result<Vec<Auction>, ReadError>;

    fn closed_auctions(&self) -> Result<Vec<Auction>, ReadError>;

    fn update(&self, auction: &Auction) -> Result<(), PersistenceError>;
}

#[cfg_attr(test, automock)]
pub trait PaymentRepository {
    fn save(&self, payment: &Payment) -> Result<(), PersistenceError>;
}
