//! Cross engine service
//!
//! In-memory limit-order matching: textual order-management actions in,
//! textual result records out. Incoming orders cross against resting
//! liquidity under strict price-time priority; residuals rest in
//! per-symbol two-sided books.
//!
//! **Key invariants:**
//! - Order ids are unique for the engine's lifetime
//! - After every action, best bid < best ask or a side is empty
//! - Fills execute at the resting order's price, never worse than the
//!   aggressor's limit
//! - FIFO within a price level
//! - A failed action yields one `E` record and mutates nothing

pub mod book;
pub mod engine;
pub mod events;
pub mod index;
pub mod matching;
pub mod protocol;

pub use engine::CrossEngine;
