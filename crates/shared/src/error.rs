//! Error types for the ZakVibe store layer

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("An account with this email already exists")]
    DuplicateEmail,
}
