use chrono::NaiveDate;
use log::{debug, info};
use crate::domain::{EvaluationError, Payment, ServiceError};
use crate::infra::{AuctionRepository, Clock, PaymentRepository, SystemClock};
use super::calendar::next_business_day;
use super::evaluator::Evaluator;

/// Creates one payment per closed auction, worth its highest bid and due on
/// the first business day from today.
pub struct PaymentGenerator<A, P, E, C> {
    auctions: A,
    payments: P,
    evaluator: E,
    clock: C,
}

impl<A, P, E, C> PaymentGenerator<A, P, E, C>
where
    A: AuctionRepository,
    P: PaymentRepository,
    E: Evaluator,
    C: Clock,
{
    pub fn new(auctions: A, payments: P, evaluator: E, clock: C) -> Self {
        PaymentGenerator {
            auctions,
            payments,
            evaluator,
            clock,
        }
    }

    pub fn generate(&mut self) -> Result<(), ServiceError> {
        let closed = self.auctions.closed_auctions()?;
        debug!("Generating payments for {} closed auctions", closed.len());

        for auction in closed {
            self.evaluator.evaluate(&auction)?;
            let value = self.evaluator.highest_bid().ok_or(EvaluationError::NotEvaluated)?;

            let payment = Payment::new(value, self.due_date());
            self.payments.save(&payment)?;
            info!(
                "Generated payment of {} due {} for auction {}",
                payment.value(),
                payment.due_date(),
                auction.auction_id
            );
        }

        Ok(())
    }

    fn due_date(&self) -> NaiveDate {
        next_business_day(self.clock.today())
    }
}

impl<A, P, E> PaymentGenerator<A, P, E, SystemClock>
where
    A: AuctionRepository,
    P: PaymentRepository,
    E: Evaluator,
{
    pub fn with_system_clock(auctions: A, payments: P, evaluator: E) -> Self {
        Self::new(auctions, payments, evaluator, SystemClock)
    }
}
