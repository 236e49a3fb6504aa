//! ZakVibe Shared Types and Utilities
//!
//! This crate contains the account/session types, the in-memory store, and
//! errors shared across the ZakVibe backend.

pub mod error;
pub mod store;
pub mod types;

pub use error::*;
pub use store::*;
pub use types::*;
