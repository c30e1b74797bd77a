//! Monetary amounts with exactly two decimal places.
//!
//! Uses `rust_decimal` internally. Amounts are never rounded: a value with
//! more than two fractional digits is rejected instead of being silently
//! changed before it reaches the gateway.

use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decimal amount that always carries two decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use gateway_requests::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// assert!(Amount::from_str("10.505").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places carried.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Amount(Decimal::new(cents, Self::SCALE))
    }

    /// Creates an amount from a `Decimal`, padding it to two places.
    ///
    /// Fails if the value has more than two fractional digits.
    pub fn new(value: Decimal) -> Result<Self> {
        let normalized = value.normalize();
        if normalized.scale() > Self::SCALE {
            return Err(GatewayError::InvalidAmount {
                value: value.to_string(),
                reason: format!("more than {} decimal places", Self::SCALE),
            });
        }
        let mut scaled = normalized;
        scaled.rescale(Self::SCALE);
        if scaled.scale() != Self::SCALE {
            return Err(GatewayError::InvalidAmount {
                value: value.to_string(),
                reason: format!("too many digits to carry {} decimal places", Self::SCALE),
            });
        }
        Ok(Amount(scaled))
    }

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = GatewayError;

    fn try_from(value: Decimal) -> Result<Self> {
        Amount::new(value)
    }
}

impl FromStr for Amount {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed).map_err(|e| GatewayError::InvalidAmount {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        Amount::new(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
