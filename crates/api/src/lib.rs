//! ZakVibe API Library
//!
//! This crate contains the HTTP server components for the ZakVibe backend.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
