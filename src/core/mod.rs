//! Core cart logic - framework-agnostic reducer, queries, formatting, and persistence.

/// Cart commands and the pure functions that apply them
pub mod cart;
/// Minor-unit price formatting
pub mod currency;
/// Read-only views over the cart state
pub mod queries;
/// Key-value persistence of the cart snapshot
pub mod storage;
