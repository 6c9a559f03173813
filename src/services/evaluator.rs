use crate::domain::{Auction, Bid, EvaluationError};
use crate::money::Amount;

#[cfg(test)]
use mockall::automock;

const TOP_BIDS: usize = 3;

/// Ranks the bids of one auction at a time.
///
/// An auction is expected to take bids in a single currency. Auctions that
/// mix currencies cannot be ranked and fail evaluation.
#[cfg_attr(test, automock)]
pub trait Evaluator {
    fn evaluate(&mut self, auction: &Auction) -> Result<(), EvaluationError>;

    /// Highest bid of the last evaluated auction.
    fn highest_bid(&self) -> Option<Amount>;
}

#[derive(Debug, Clone, Default)]
pub struct BidEvaluator {
    highest: Option<Amount>,
    lowest: Option<Amount>,
    top: Vec<Bid>,
}

impl BidEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lowest_bid(&self) -> Option<Amount> {
        self.lowest
    }

    /// Up to three bids, highest first.
    pub fn top_bids(&self) -> &[Bid] {
        &self.top
    }
}

impl Evaluator for BidEvaluator {
    fn evaluate(&mut self, auction: &Auction) -> Result<(), EvaluationError> {
        *self = BidEvaluator::default();

        if auction.bids.is_empty() {
            return Err(EvaluationError::NoBids(auction.auction_id));
        }

        let currency = auction.bids[0].bid_amount.currency();
        if auction.bids.iter().any(|bid| bid.bid_amount.currency() != currency) {
            return Err(EvaluationError::CurrencyMismatch(auction.auction_id));
        }

        for bid in &auction.bids {
            let amount = bid.bid_amount;
            if self.highest.map_or(true, |h| amount.minor_units() > h.minor_units()) {
                self.highest = Some(amount);
            }
            if self.lowest.map_or(true, |l| amount.minor_units() < l.minor_units()) {
                self.lowest = Some(amount);
            }
        }

        let mut ranked = auction.bids.clone();
        // stable, so equal values keep proposal order
        ranked.sort_by(|a, b| b.bid_amount.minor_units().cmp(&a.bid_amount.minor_units()));
        ranked.truncate(TOP_BIDS);
        self.top = ranked;

        Ok(())
    }

    fn highest_bid(&self) -> Option<Amount> {
        self.highest
    }
}
