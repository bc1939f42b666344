//! Core request and response logic for fxgate.
//!
//! This crate contains pure logic with ZERO web or network dependencies:
//! date resolution, query construction, upstream payload validation and
//! the rate calculation applied before a result is returned.
//!
//! # Modules
//!
//! - `currency` - Exchange queries, upstream payloads and rate computation

pub mod currency;
