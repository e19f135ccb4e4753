//! Crossing predicates
//!
//! A bid and an ask can trade when the bid price is at or above the
//! ask. The aggressor-relative form drives the match loop's price
//! check; the bid/ask form backs the no-cross rest invariant.

use types::numeric::Price;
use types::order::Side;

/// Check whether a bid and an ask price cross
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check whether an aggressor at `limit` crosses a resting order at
/// `resting`
pub fn crosses(aggressor_side: Side, limit: Price, resting: Price) -> bool {
    match aggressor_side {
        Side::Bid => limit >= resting,
        Side::Ask => limit <= resting,
    }
}
