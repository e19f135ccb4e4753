//! Order side and lifecycle
//!
//! An order is created on an accepted `O` action, mutated only by the
//! matcher (open quantity decrements), and destroyed when fully filled
//! or cancelled.

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order, rests in the bid book
    Bid,
    /// Sell order, rests in the ask book
    Ask,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// Parse the wire character: `B` for bids, `S` for asks
    pub fn from_wire(c: char) -> Option<Self> {
        match c {
            'B' => Some(Side::Bid),
            'S' => Some(Side::Ask),
            _ => None,
        }
    }

    /// The wire character for this side
    pub fn as_wire(&self) -> char {
        match self {
            Side::Bid => 'B',
            Side::Ask => 'S',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// A limit order, resting or in flight
///
/// `seq` is assigned once at acceptance and breaks time ties within a
/// price level; `open_qty` only ever decreases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub oid: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub orig_qty: Quantity,
    pub open_qty: Quantity,
    pub price: Price,
    pub seq: u64,
}

impl Order {
    /// Create a new fully open order
    pub fn new(
        oid: OrderId,
        symbol: Symbol,
        side: Side,
        qty: Quantity,
        price: Price,
        seq: u64,
    ) -> Self {
        Self {
            oid,
            symbol,
            side,
            orig_qty: qty,
            open_qty: qty,
            price,
            seq,
        }
    }

    /// Decrement the open quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the open quantity
    pub fn fill(&mut self, qty: Quantity) {
        self.open_qty = self.open_qty - qty;
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.open_qty.is_zero()
    }

    /// Quantity consumed by fills so far
    pub fn filled_qty(&self) -> Quantity {
        self.orig_qty - self.open_qty
    }
}
