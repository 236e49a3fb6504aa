//! Common types used across the ZakVibe backend

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// User ID wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered account as held in the account directory.
///
/// The password hash never leaves the store layer in API responses; handlers
/// build a sanitized view instead.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: UserId,
    pub name: String,
    /// Unique key into the account directory, stored lowercased.
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub referral_code: Option<String>,
    pub institute_name: Option<String>,
    pub institute_location: Option<String>,
    pub is_approved: bool,
    pub created_at: OffsetDateTime,
}

/// Input for account creation: everything the caller supplies.
///
/// The store fills in the identifier, approval flag, and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub referral_code: Option<String>,
    pub institute_name: Option<String>,
    pub institute_location: Option<String>,
}
