//! Result records emitted back to the driver
//!
//! One struct per record kind; `Display` renders the exact wire line.
//! Prices always print with five fractional digits via the `Price`
//! formatter.

use serde::{Deserialize, Serialize};
use std::fmt;
use types::errors::EngineError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// One side of a match: `F <oid> <symbol> <fill_qty> <fill_px>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub oid: OrderId,
    pub symbol: Symbol,
    pub qty: Quantity,
    pub price: Price,
}

impl Fill {
    /// Create a fill record
    pub fn new(oid: OrderId, symbol: Symbol, qty: Quantity, price: Price) -> Self {
        Self {
            oid,
            symbol,
            qty,
            price,
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F {} {} {} {}", self.oid, self.symbol, self.qty, self.price)
    }
}

/// Cancel acknowledgement: `X <oid>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAck {
    pub oid: OrderId,
}

impl fmt::Display for CancelAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {}", self.oid)
    }
}

/// One open order in a `P` listing:
/// `P <oid> <symbol> <side> <open_qty> <ord_px>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub oid: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub open_qty: Quantity,
    pub price: Price,
}

impl BookEntry {
    /// Snapshot a resting order into a fresh value record
    pub fn from_order(order: &Order) -> Self {
        Self {
            oid: order.oid,
            symbol: order.symbol.clone(),
            side: order.side,
            open_qty: order.open_qty,
            price: order.price,
        }
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P {} {} {} {} {}",
            self.oid, self.symbol, self.side, self.open_qty, self.price
        )
    }
}

/// Error record: `E <oid> <message>`, or `E <message>` when the action
/// carried no usable oid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorRecord {
    pub oid: Option<OrderId>,
    pub error: EngineError,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid {
            Some(oid) => write!(f, "E {} {}", oid, self.error),
            None => write!(f, "E {}", self.error),
        }
    }
}

/// Any record produced by one action
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Fill(Fill),
    CancelAck(CancelAck),
    BookEntry(BookEntry),
    Error(ErrorRecord),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Fill(fill) => fill.fmt(f),
            Record::CancelAck(ack) => ack.fmt(f),
            Record::BookEntry(entry) => entry.fmt(f),
            Record::Error(err) => err.fmt(f),
        }
    }
}

impl From<Fill> for Record {
    fn from(fill: Fill) -> Self {
        Record::Fill(fill)
    }
}

impl From<CancelAck> for Record {
    fn from(ack: CancelAck) -> Self {
        Record::CancelAck(ack)
    }
}

impl From<BookEntry> for Record {
    fn from(entry: BookEntry) -> Self {
        Record::BookEntry(entry)
    }
}

impl From<ErrorRecord> for Record {
    fn from(err: ErrorRecord) -> Self {
        Record::Error(err)
    }
}
