//! HTTP layer for the cinex ticketing platform.
//!
//! Exposed as a library so integration tests build the exact router
//! and middleware stack the production binary runs.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
