//! In-memory account and session storage
//!
//! The entire backend state lives in two maps: the account directory
//! (email -> account record) and the session table (token digest -> user id).
//! Nothing is persisted; both maps are empty after a process restart.
//!
//! Each map sits behind its own `RwLock` so that check-then-insert sequences
//! (duplicate-email check on registration, token insert on login) are atomic
//! with respect to concurrent requests. Handlers hold a lock only for the
//! duration of a single map operation; nothing blocks inside a critical
//! section.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use time::OffsetDateTime;

use crate::error::StoreError;
use crate::types::{Account, NewAccount, UserId};

/// Process-local store backing the auth API.
///
/// Held in the application state and shared across handlers via `Arc`.
/// Swappable for a persistent backend without touching the HTTP layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Account directory, keyed by lowercased email.
    accounts: RwLock<HashMap<String, Account>>,
    /// Session table, keyed by SHA-256 digest of the issued token.
    sessions: RwLock<HashMap<String, UserId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account, enforcing email uniqueness.
    ///
    /// The duplicate check and the insert happen under one write lock, so two
    /// concurrent registrations for the same email cannot both succeed. On
    /// failure nothing is mutated.
    pub fn create_account(&self, new: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if accounts.contains_key(&new.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let account = Account {
            id: UserId::new(),
            name: new.name,
            email: new.email.clone(),
            password_hash: new.password_hash,
            role: new.role,
            referral_code: new.referral_code,
            institute_name: new.institute_name,
            institute_location: new.institute_location,
            // Auto-approve for now
            is_approved: true,
            created_at: OffsetDateTime::now_utc(),
        };

        accounts.insert(new.email, account.clone());
        Ok(account)
    }

    /// Look up an account by its (lowercased) email key.
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email)
            .cloned()
    }

    /// Look up an account by identifier.
    ///
    /// The directory is keyed by email, so this is a scan. Fine at this
    /// scale; a persistent backend would index by id.
    pub fn find_by_id(&self, id: UserId) -> Option<Account> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|account| account.id == id)
            .cloned()
    }

    /// Record an issued session: token digest -> account identifier.
    ///
    /// Sessions never expire and are never invalidated; the entry lives until
    /// process restart.
    pub fn insert_session(&self, token_digest: String, user_id: UserId) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token_digest, user_id);
    }

    /// Resolve a session token digest to the account it was issued for.
    pub fn resolve_session(&self, token_digest: &str) -> Option<UserId> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token_digest)
            .copied()
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
