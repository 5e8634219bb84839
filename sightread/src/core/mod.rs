//! Deterministic, pure logic for exercise selection.
//!
//! Core modules must be free of I/O side effects. They operate on an
//! in-memory [`types::Catalog`] and return deterministic outputs (apart from
//! the random draw and the clock read in [`selector::today`]).

pub mod selector;
pub mod types;
