#![allow(dead_code)]
use auction_back_office::domain::{Auction, Bid, User};
use auction_back_office::money::{Amount, Currency};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_auction_id() -> i64 {
    1
}

pub fn sample_description() -> String {
    "Playstation".to_string()
}

pub fn sample_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 3, 30, 8, 28, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn buyer_1() -> User {
    User::new("mustafa", "Mustafa", "mustafa@example.com")
}

pub fn buyer_2() -> User {
    User::new("mauricio", "Mauricio", "mauricio@example.com")
}

pub fn buyer_3() -> User {
    User::new("davi", "Davi", "davi@example.com")
}

pub fn brl(units: i64) -> Amount {
    Amount::from_minor(Currency::BRL, units * 100)
}

pub fn brl_cents(minor: i64) -> Amount {
    Amount::from_minor(Currency::BRL, minor)
}

pub fn sample_auction() -> Auction {
    Auction::new(sample_auction_id(), sample_description(), sample_created_at())
}

pub fn sample_auction_with_bids(bids: &[(User, i64)]) -> Auction {
    let mut auction = sample_auction();
    for (bidder, value) in bids {
        auction.propose(Bid::new(bidder.clone(), brl(*value)));
    }
    auction
}
