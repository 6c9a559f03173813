// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    BRL, // Brazilian Real
    USD, // US Dollar
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::BRL => write!(f, "BRL"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// Cents, centavos and the like.
pub type MinorUnits = i64;

const MINOR_PER_UNIT: MinorUnits = 100;
const FRACTION_DIGITS: usize = 2;

/// A currency tagged amount, kept in minor units so that `2500.50` is exact.
///
/// Ordering compares currency first, so only amounts of the same currency
/// should be ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    currency: Currency,
    minor: MinorUnits,
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl Amount {
    pub fn from_minor(currency: Currency, minor: MinorUnits) -> Self {
        Amount { currency, minor }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn minor_units(&self) -> MinorUnits {
        self.minor
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let per_unit = MINOR_PER_UNIT as u64;
        write!(
            f,
            "{}{}{}.{:0width$}",
            self.currency,
            sign,
            abs / per_unit,
            abs % per_unit,
            width = FRACTION_DIGITS
        )
    }
}

/// Accepts `BRL2500`, `BRL2500.5` and `BRL2500.50`.
impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency_end = s.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if currency_end == 0 {
            return Err(format!("Invalid amount, missing currency: {}", s));
        }

        let currency = Currency::from_str(&s[..currency_end])?;

        let value_str = &s[currency_end..];
        let invalid = || format!("Invalid amount value: {}", value_str);

        let (negative, digits) = match value_str.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value_str),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty()
            || !all_digits(whole)
            || !all_digits(fraction)
            || fraction.len() > FRACTION_DIGITS
            || (digits.contains('.') && fraction.is_empty())
        {
            return Err(invalid());
        }

        let whole = whole.parse::<MinorUnits>().map_err(|_| invalid())?;
        let fraction = format!("{:0<width$}", fraction, width = FRACTION_DIGITS)
            .parse::<MinorUnits>()
            .map_err(|_| invalid())?;
        let minor = whole
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Amount {
            currency,
            minor: if negative { -minor } else { minor },
        })
    }
}
