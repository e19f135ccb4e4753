//! Per-symbol book and the matching algorithm
//!
//! An incoming order consumes the opposite side while its limit price
//! crosses the best resting level; any residual rests on its own side.
//! Fills execute at the resting order's price, so the aggressor only
//! ever improves on its limit.

use tracing::trace;
use types::ids::{OrderId, Symbol};
use types::numeric::Price;
use types::order::{Order, Side};

use super::ask_book::AskBook;
use super::bid_book::BidBook;
use crate::events::{BookEntry, Fill};
use crate::index::{OrderIndex, OrderLocation};
use crate::matching::crossing;

/// Two-sided book for one symbol
///
/// Invariant after every action: best bid < best ask, or at least one
/// side is empty.
#[derive(Debug)]
pub struct Book {
    symbol: Symbol,
    bids: BidBook,
    asks: AskBook,
}

impl Book {
    /// Create an empty book for a symbol
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// The symbol this book trades
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Place an order: cross it against the opposite side, then rest
    /// any residual on its own side
    ///
    /// For each match the aggressor's fill record precedes the resting
    /// counterparty's. Fully consumed resting orders leave both their
    /// level and the index; drained levels are pruned before the next
    /// best-level probe.
    pub fn submit(&mut self, index: &mut OrderIndex, mut order: Order) -> Vec<Fill> {
        debug_assert_eq!(order.symbol, self.symbol);

        let fills = match order.side {
            Side::Bid => Self::cross_bid(&mut self.asks, index, &mut order),
            Side::Ask => Self::cross_ask(&mut self.bids, index, &mut order),
        };

        if !order.is_filled() {
            index.track(
                order.oid,
                OrderLocation {
                    symbol: self.symbol.clone(),
                    side: order.side,
                    price: order.price,
                },
            );
            match order.side {
                Side::Bid => self.bids.insert(order),
                Side::Ask => self.asks.insert(order),
            }
        }

        fills
    }

    /// Match an incoming bid against the ask side
    fn cross_bid(asks: &mut AskBook, index: &mut OrderIndex, order: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();

        while !order.is_filled() {
            let Some((resting_price, level)) = asks.best_level_mut() else {
                break;
            };
            if !crossing::crosses(Side::Bid, order.price, resting_price) {
                break;
            }
            let Some(resting) = level.peek_front() else {
                break;
            };
            let resting_oid = resting.oid;
            let resting_open = resting.open_qty;

            let match_qty = order.open_qty.min(resting_open);
            fills.push(Fill::new(
                order.oid,
                order.symbol.clone(),
                match_qty,
                resting_price,
            ));
            fills.push(Fill::new(
                resting_oid,
                order.symbol.clone(),
                match_qty,
                resting_price,
            ));
            trace!(
                aggressor = %order.oid,
                resting = %resting_oid,
                qty = %match_qty,
                price = %resting_price,
                "fill"
            );

            order.fill(match_qty);
            if match_qty == resting_open {
                level.pop_front();
                index.release(resting_oid);
                if level.is_empty() {
                    asks.remove_level(resting_price);
                }
            } else {
                level.fill_front(match_qty);
            }
        }

        fills
    }

    /// Match an incoming ask against the bid side
    fn cross_ask(bids: &mut BidBook, index: &mut OrderIndex, order: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();

        while !order.is_filled() {
            let Some((resting_price, level)) = bids.best_level_mut() else {
                break;
            };
            if !crossing::crosses(Side::Ask, order.price, resting_price) {
                break;
            }
            let Some(resting) = level.peek_front() else {
                break;
            };
            let resting_oid = resting.oid;
            let resting_open = resting.open_qty;

            let match_qty = order.open_qty.min(resting_open);
            fills.push(Fill::new(
                order.oid,
                order.symbol.clone(),
                match_qty,
                resting_price,
            ));
            fills.push(Fill::new(
                resting_oid,
                order.symbol.clone(),
                match_qty,
                resting_price,
            ));
            trace!(
                aggressor = %order.oid,
                resting = %resting_oid,
                qty = %match_qty,
                price = %resting_price,
                "fill"
            );

            order.fill(match_qty);
            if match_qty == resting_open {
                level.pop_front();
                index.release(resting_oid);
                if level.is_empty() {
                    bids.remove_level(resting_price);
                }
            } else {
                level.fill_front(match_qty);
            }
        }

        fills
    }

    /// Remove an open order from its level, pruning the level if it
    /// empties
    ///
    /// The caller resolves the order's location through the index
    /// first.
    pub fn cancel(&mut self, oid: OrderId, side: Side, price: Price) -> Option<Order> {
        match side {
            Side::Bid => self.bids.remove(oid, price),
            Side::Ask => self.asks.remove(oid, price),
        }
    }

    /// Enumerate every open order: asks from worst (highest price) down
    /// to best, then bids from best (highest price) down to worst, FIFO
    /// within each level
    pub fn snapshot(&self) -> Vec<BookEntry> {
        let mut entries = Vec::new();
        for (_, level) in self.asks.iter_worst_to_best() {
            entries.extend(level.iter().map(BookEntry::from_order));
        }
        for (_, level) in self.bids.iter_best_to_worst() {
            entries.extend(level.iter().map(BookEntry::from_order));
        }
        entries
    }

    /// Best bid price and total open quantity
    pub fn best_bid(&self) -> Option<(Price, u32)> {
        self.bids.best_bid()
    }

    /// Best ask price and total open quantity
    pub fn best_ask(&self) -> Option<(Price, u32)> {
        self.asks.best_ask()
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Quantity;

    fn symbol() -> Symbol {
        Symbol::try_new("IBM").unwrap()
    }

    fn order(oid: u32, side: Side, qty: u16, px: &str, seq: u64) -> Order {
        Order::new(
            OrderId::try_new(oid).unwrap(),
            symbol(),
            side,
            Quantity::try_new(qty).unwrap(),
            Price::from_wire(px).unwrap(),
            seq,
        )
    }

    fn submit(book: &mut Book, index: &mut OrderIndex, order: Order) -> Vec<Fill> {
        index.mark_seen(order.oid);
        book.submit(index, order)
    }

    #[test]
    fn test_resting_order_no_fills() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        let fills = submit(&mut book, &mut index, order(1, Side::Bid, 10, "100.00000", 1));
        assert!(fills.is_empty());
        assert_eq!(book.symbol().as_str(), "IBM");
        assert_eq!(book.best_bid().unwrap().1, 10);
        assert_eq!(index.open_count(), 1);
    }

    #[test]
    fn test_fill_at_resting_price() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Bid, 10, "100.00000", 1));
        let fills = submit(&mut book, &mut index, order(2, Side::Ask, 5, "99.00000", 2));

        // aggressor first, both at the resting bid's price
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].to_string(), "F 2 IBM 5 100.00000");
        assert_eq!(fills[1].to_string(), "F 1 IBM 5 100.00000");
    }

    #[test]
    fn test_exact_fill_prunes_level_and_index() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Ask, 5, "101.00000", 1));
        let fills = submit(&mut book, &mut index, order(2, Side::Bid, 5, "101.00000", 2));

        assert_eq!(fills.len(), 2);
        assert!(book.is_empty());
        assert_eq!(index.open_count(), 0);
    }

    #[test]
    fn test_partial_fill_decrements_resting_in_place() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Ask, 10, "101.00000", 1));
        submit(&mut book, &mut index, order(2, Side::Bid, 4, "101.00000", 2));

        assert_eq!(book.best_ask().unwrap().1, 6);
        assert_eq!(index.open_count(), 1);
        let entries = book.snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].open_qty.get(), 6);
    }

    #[test]
    fn test_sweep_stops_at_limit() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Ask, 5, "101.00000", 1));
        submit(&mut book, &mut index, order(2, Side::Ask, 5, "103.00000", 2));

        // limit sits between the two levels
        let fills = submit(&mut book, &mut index, order(3, Side::Bid, 10, "102.00000", 3));
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].price, Price::from_wire("101.00000").unwrap());

        // residual rests on the bid side
        assert_eq!(book.best_bid().unwrap(), (Price::from_wire("102.00000").unwrap(), 5));
        assert_eq!(book.best_ask().unwrap(), (Price::from_wire("103.00000").unwrap(), 5));
    }

    #[test]
    fn test_fifo_within_level() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Ask, 5, "101.00000", 1));
        submit(&mut book, &mut index, order(2, Side::Ask, 5, "101.00000", 2));

        let fills = submit(&mut book, &mut index, order(3, Side::Bid, 7, "101.00000", 3));

        // oldest resting order consumed fully before the next is touched
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[1].oid.as_u32(), 1);
        assert_eq!(fills[1].qty.get(), 5);
        assert_eq!(fills[3].oid.as_u32(), 2);
        assert_eq!(fills[3].qty.get(), 2);
    }

    #[test]
    fn test_empty_opposite_side_rests() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        let fills = submit(&mut book, &mut index, order(1, Side::Ask, 10, "105.00000", 1));
        assert!(fills.is_empty());
        assert_eq!(book.best_ask().unwrap().1, 10);
    }

    #[test]
    fn test_cancel_removes_and_prunes() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Bid, 10, "100.00000", 1));
        let removed = book.cancel(
            OrderId::try_new(1).unwrap(),
            Side::Bid,
            Price::from_wire("100.00000").unwrap(),
        );

        assert!(removed.is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_snapshot_order() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Bid, 10, "100.00000", 1));
        submit(&mut book, &mut index, order(2, Side::Bid, 10, "99.00000", 2));
        submit(&mut book, &mut index, order(3, Side::Ask, 10, "101.00000", 3));
        submit(&mut book, &mut index, order(4, Side::Ask, 10, "102.00000", 4));
        submit(&mut book, &mut index, order(5, Side::Ask, 10, "102.00000", 5));

        let lines: Vec<String> = book.snapshot().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "P 4 IBM S 10 102.00000",
                "P 5 IBM S 10 102.00000",
                "P 3 IBM S 10 101.00000",
                "P 1 IBM B 10 100.00000",
                "P 2 IBM B 10 99.00000",
            ]
        );
    }

    #[test]
    fn test_no_cross_rest_invariant() {
        let mut book = Book::new(symbol());
        let mut index = OrderIndex::new();

        submit(&mut book, &mut index, order(1, Side::Bid, 10, "100.00000", 1));
        submit(&mut book, &mut index, order(2, Side::Ask, 5, "100.00000", 2));

        match (book.best_bid(), book.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => assert!(bid < ask),
            _ => {}
        }
    }
}
