//! Pure domain logic for the cinex ticketing platform.
//!
//! No I/O lives here: the seat ledger, pricing arithmetic, the error
//! taxonomy, and shared type aliases. The db and api crates depend on
//! this crate, never the other way around.

pub mod error;
pub mod ledger;
pub mod pricing;
pub mod types;
