//! Authentication primitives for the ZakVibe backend

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password, PasswordError};
pub use session::{digest_token, generate_token};
