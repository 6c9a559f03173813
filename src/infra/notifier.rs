use crate::domain::{Auction, NotificationError};

#[cfg(test)]
use mockall::automock;

/// Tells the winner of a closed auction that it has ended.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn send(&self, auction: &Auction) -> Result<(), NotificationError>;
}
