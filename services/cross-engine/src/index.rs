//! Engine-wide order index
//!
//! Two structures per the unique-oid policy: the open-order location
//! map, which routes a cancel to its level, and the ever-seen set,
//! which rejects an oid for the engine's whole lifetime once it has
//! been accepted. The open domain is always a subset of the seen set.

use std::collections::{HashMap, HashSet};
use types::ids::{OrderId, Symbol};
use types::numeric::Price;
use types::order::Side;

/// Where an open order rests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLocation {
    pub symbol: Symbol,
    pub side: Side,
    pub price: Price,
}

/// oid → location for open orders, plus the ever-seen set
#[derive(Debug, Default)]
pub struct OrderIndex {
    open: HashMap<OrderId, OrderLocation>,
    seen: HashSet<OrderId>,
}

impl OrderIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an oid at acceptance time
    ///
    /// Returns false if the oid was ever accepted before.
    pub fn mark_seen(&mut self, oid: OrderId) -> bool {
        self.seen.insert(oid)
    }

    /// Check whether an oid has ever been accepted
    pub fn is_seen(&self, oid: OrderId) -> bool {
        self.seen.contains(&oid)
    }

    /// Track a resting order's location
    pub fn track(&mut self, oid: OrderId, location: OrderLocation) {
        self.open.insert(oid, location);
    }

    /// Look up an open order's location
    pub fn get(&self, oid: OrderId) -> Option<&OrderLocation> {
        self.open.get(&oid)
    }

    /// Drop an oid from the open set (filled or cancelled)
    ///
    /// The oid stays in the seen set; it can never be accepted again.
    pub fn release(&mut self, oid: OrderId) -> Option<OrderLocation> {
        self.open.remove(&oid)
    }

    /// Number of open orders engine-wide
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(px: &str) -> OrderLocation {
        OrderLocation {
            symbol: Symbol::try_new("IBM").unwrap(),
            side: Side::Bid,
            price: Price::from_wire(px).unwrap(),
        }
    }

    #[test]
    fn test_mark_seen_is_once_only() {
        let mut index = OrderIndex::new();
        let oid = OrderId::try_new(10000).unwrap();

        assert!(index.mark_seen(oid));
        assert!(!index.mark_seen(oid));
        assert!(index.is_seen(oid));
    }

    #[test]
    fn test_track_and_release() {
        let mut index = OrderIndex::new();
        let oid = OrderId::try_new(10000).unwrap();

        index.mark_seen(oid);
        index.track(oid, location("100.00000"));
        assert_eq!(index.open_count(), 1);
        assert_eq!(index.get(oid), Some(&location("100.00000")));

        let released = index.release(oid).unwrap();
        assert_eq!(released.price, Price::from_wire("100.00000").unwrap());
        assert_eq!(index.open_count(), 0);
        assert!(index.get(oid).is_none());

        // released, not forgotten
        assert!(index.is_seen(oid));
    }

    #[test]
    fn test_release_unknown_oid() {
        let mut index = OrderIndex::new();
        assert!(index.release(OrderId::try_new(1).unwrap()).is_none());
    }
}
