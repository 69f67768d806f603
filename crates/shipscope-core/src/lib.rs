//! shipscope core - vessel proximity analysis
//!
//! Area membership for user-selected regions and footprint-distance pairing
//! over vessel snapshots. Pure computation: no network, no interactive I/O,
//! no shared state between callers.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod pairing;
pub mod parse;

pub use error::{Result, ShipscopeError};
