use log::{debug, info, warn};
use crate::domain::ServiceError;
use crate::infra::{AuctionRepository, Clock, Notifier, SystemClock};
use super::policy::ClosingPolicy;

/// Closes the open auctions that have been running for long enough,
/// persisting each one before mailing its winner.
///
/// A failure to persist or notify one auction is logged and skipped so the
/// rest of the batch still runs. Only a failure to list open auctions aborts.
pub struct AuctionCloser<R, N, C> {
    repository: R,
    notifier: N,
    clock: C,
    policy: ClosingPolicy,
    total_closed: usize,
}

impl<R, N, C> AuctionCloser<R, N, C>
where
    R: AuctionRepository,
    N: Notifier,
    C: Clock,
{
    pub fn new(repository: R, notifier: N, clock: C) -> Self {
        Self::with_policy(repository, notifier, clock, ClosingPolicy::default())
    }

    pub fn with_policy(repository: R, notifier: N, clock: C, policy: ClosingPolicy) -> Self {
        AuctionCloser {
            repository,
            notifier,
            clock,
            policy,
            total_closed: 0,
        }
    }

    pub fn close(&mut self) -> Result<(), ServiceError> {
        let now = self.clock.now();
        let open = self.repository.open_auctions()?;
        debug!("Checking {} open auctions against {}", open.len(), self.policy);

        let closed_before = self.total_closed;
        for mut auction in open {
            if !self.policy.is_due(auction.created_at, now) {
                debug!("Auction {} is too recent to close", auction.auction_id);
                continue;
            }

            auction.close();

            if let Err(e) = self.repository.update(&auction) {
                warn!("Skipping auction {}, closing was not persisted: {}", auction.auction_id, e);
                continue;
            }
            self.total_closed += 1;

            match self.notifier.send(&auction) {
                Ok(()) => info!("Closed auction {} and notified the winner", auction.auction_id),
                Err(e) => warn!("Closed auction {} but the winner was not notified: {}", auction.auction_id, e),
            }
        }

        debug!("Closed {} auctions in this run", self.total_closed - closed_before);
        Ok(())
    }

    /// Auctions closed and persisted by this closer so far, over all runs.
    pub fn total_closed(&self) -> usize {
        self.total_closed
    }
}

impl<R, N> AuctionCloser<R, N, SystemClock>
where
    R: AuctionRepository,
    N: Notifier,
{
    pub fn with_system_clock(repository: R, notifier: N) -> Self {
        Self::new(repository, notifier, SystemClock)
    }
}
