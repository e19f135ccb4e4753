//! Fixed-point numeric types for prices and quantities
//!
//! Prices use rust_decimal so book keys compare exactly (no binary
//! floating point anywhere near a price). The wire format is "7.5":
//! up to seven integer digits and exactly five fractional digits.
//! Quantities are 16-bit integers per the order model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Fractional digits carried by every price
pub const PRICE_SCALE: u32 = 5;

/// Maximum integer digits in the price wire format
const PRICE_MAX_INT_DIGITS: usize = 7;

/// Price with exact fixed-point decimal representation
///
/// Always positive and always scale 5, so ordering, equality, and map
/// keying are exact. Serialized as a string to preserve the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Parse the 7.5 wire form: 1..=7 integer digits, a decimal point,
    /// exactly five fractional digits, value > 0.
    pub fn from_wire(s: &str) -> Option<Self> {
        let (int_part, frac_part) = s.split_once('.')?;
        if int_part.is_empty() || int_part.len() > PRICE_MAX_INT_DIGITS {
            return None;
        }
        if frac_part.len() != PRICE_SCALE as usize {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let units = int_part.parse::<i64>().ok()? * 100_000 + frac_part.parse::<i64>().ok()?;
        Self::from_units(units)
    }

    /// Build from raw 10^-5 units, returning None unless positive
    pub fn from_units(units: i64) -> Option<Self> {
        if units > 0 {
            Some(Self(Decimal::new(units, PRICE_SCALE)))
        } else {
            None
        }
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}", self.0)
    }
}

// String serialization preserves the exact wire form
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_wire(&s)
            .ok_or_else(|| serde::de::Error::custom("expected a positive 7.5-format price"))
    }
}

/// Order quantity
///
/// Strictly positive at creation; `zero()` exists only as the drained
/// open-quantity state of a fully filled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u16);

impl Quantity {
    /// Try to create a Quantity, returning None if zero
    pub fn try_new(raw: u16) -> Option<Self> {
        if raw > 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// The drained quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw quantity
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Check if the quantity is drained
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would underflow");
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
