//! Identifier types for the cross engine
//!
//! Identifiers arrive on the wire fully formed: order ids are positive
//! 32-bit integers assigned by the submitter, symbols are short
//! alphanumeric instrument names. Both are validated at the boundary and
//! carried as newtypes everywhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Client-assigned, strictly positive, and unique for the engine's
/// lifetime: once an oid has been accepted it is never accepted again,
/// whether the order is open, cancelled, or fully filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    /// Create an OrderId, rejecting the reserved zero value
    pub fn try_new(raw: u32) -> Option<Self> {
        if raw > 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw id
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument symbol
///
/// 1..=8 ASCII-alphanumeric characters. Each symbol names an independent
/// two-sided book; orders for different symbols never cross.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Maximum symbol length in bytes
    pub const MAX_LEN: usize = 8;

    /// Try to create a Symbol, returning None if empty, too long, or
    /// containing a non-alphanumeric character
    pub fn try_new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return None;
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(s))
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_rejects_zero() {
        assert!(OrderId::try_new(0).is_none());
        assert_eq!(OrderId::try_new(10000).unwrap().as_u32(), 10000);
    }

    #[test]
    fn test_order_id_display() {
        let oid = OrderId::try_new(10042).unwrap();
        assert_eq!(oid.to_string(), "10042");
    }

    #[test]
    fn test_order_id_serialization() {
        let oid = OrderId::try_new(7).unwrap();
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, "7");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(oid, deserialized);
    }

    #[test]
    fn test_symbol_accepts_alphanumeric() {
        assert!(Symbol::try_new("IBM").is_some());
        assert!(Symbol::try_new("BRK2").is_some());
        assert!(Symbol::try_new("A").is_some());
        assert!(Symbol::try_new("ABCDEFGH").is_some());
    }

    #[test]
    fn test_symbol_rejects_invalid() {
        assert!(Symbol::try_new("").is_none());
        assert!(Symbol::try_new("ABCDEFGHI").is_none());
        assert!(Symbol::try_new("BRK.A").is_none());
        assert!(Symbol::try_new("IB M").is_none());
    }

    #[test]
    fn test_symbol_serialization() {
        let symbol = Symbol::try_new("MSFT").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"MSFT\"");

        let deserialized: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, deserialized);
    }
}
