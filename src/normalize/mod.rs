// src/normalize/mod.rs
//! Free-text cell parsers. Each returns a `Parse` error rather than a
//! default when the expected numeric shape is missing.

pub mod odds;
pub mod prize;

pub use odds::clean_odds;
pub use prize::clean_prize;
