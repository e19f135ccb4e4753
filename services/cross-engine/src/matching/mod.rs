//! Matching logic
//!
//! Crossability predicates used by the per-symbol matcher.

pub mod crossing;
