//! Top-level engine façade
//!
//! Owns the symbol → book map, the symbol discovery order (which
//! drives `P` traversal), the engine-wide order index, and the `seq`
//! counter. Each action runs to completion and yields its full result
//! sequence; a failed action yields one `E` record and mutates nothing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;
use types::errors::BookError;
use types::ids::{OrderId, Symbol};
use types::order::Order;

use crate::book::Book;
use crate::events::{CancelAck, ErrorRecord, Record};
use crate::index::OrderIndex;
use crate::protocol::{Action, NewOrder};

/// The cross engine: every book, every open order, one action at a time
#[derive(Debug, Default)]
pub struct CrossEngine {
    books: HashMap<Symbol, Book>,
    /// Symbols in first-seen order, the `P` traversal order
    discovery: Vec<Symbol>,
    index: OrderIndex,
    next_seq: u64,
}

impl CrossEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one parsed action, returning its full result sequence
    pub fn action(&mut self, action: Action) -> Vec<Record> {
        match action {
            Action::New(new_order) => self.submit(new_order),
            Action::Cancel { oid } => self.cancel(oid),
            Action::Print => self.print(),
        }
    }

    fn submit(&mut self, new_order: NewOrder) -> Vec<Record> {
        let NewOrder {
            oid,
            symbol,
            side,
            qty,
            price,
        } = new_order;

        // lifetime-unique oids: rejected before any state mutation
        if self.index.is_seen(oid) {
            return vec![Record::Error(ErrorRecord {
                oid: Some(oid),
                error: BookError::DuplicateOid.into(),
            })];
        }
        self.index.mark_seen(oid);

        let seq = self.next_seq;
        self.next_seq += 1;
        let order = Order::new(oid, symbol.clone(), side, qty, price, seq);

        let book = match self.books.entry(symbol.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.discovery.push(symbol.clone());
                entry.insert(Book::new(symbol))
            }
        };
        let fills = book.submit(&mut self.index, order);
        debug!(oid = %oid, fills = fills.len(), "order accepted");

        fills.into_iter().map(Record::Fill).collect()
    }

    fn cancel(&mut self, oid: OrderId) -> Vec<Record> {
        let Some(location) = self.index.release(oid) else {
            return vec![Record::Error(ErrorRecord {
                oid: Some(oid),
                error: BookError::UnknownOid.into(),
            })];
        };

        let removed = self
            .books
            .get_mut(&location.symbol)
            .and_then(|book| book.cancel(oid, location.side, location.price));
        debug_assert!(removed.is_some(), "index pointed at a missing order");
        debug!(oid = %oid, "order cancelled");

        vec![Record::CancelAck(CancelAck { oid })]
    }

    fn print(&self) -> Vec<Record> {
        let mut records = Vec::new();
        for symbol in &self.discovery {
            if let Some(book) = self.books.get(symbol) {
                records.extend(book.snapshot().into_iter().map(Record::BookEntry));
            }
        }
        records
    }

    /// The book for a symbol, if any order has referenced it
    pub fn book(&self, symbol: &Symbol) -> Option<&Book> {
        self.books.get(symbol)
    }

    /// Number of open orders across all books
    pub fn open_order_count(&self) -> usize {
        self.index.open_count()
    }
}
