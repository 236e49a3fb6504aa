//! Authentication routes

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use zakvibe_shared::{Account, NewAccount, UserId};

use crate::{
    auth::{digest_token, generate_token, hash_password, verify_password},
    error::{ApiError, ApiResult},
    state::AppState,
};

// =============================================================================
// Request/Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub institute_name: Option<String>,
    #[serde(default)]
    pub institute_location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub data: RegisterData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub user_id: UserId,
    pub is_approved: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub data: LoginData,
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user: UserView,
    pub token: String,
}

/// Sanitized account view returned to clients.
///
/// Never carries the password hash or internal timestamps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_approved: bool,
}

impl From<&Account> for UserView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role.clone(),
            is_approved: account.is_approved,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new user - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    if !is_valid_email(&req.email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    let email = req.email.trim().to_lowercase();

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!(error = ?e, "register: Password hashing failed");
        ApiError::Internal
    })?;

    // Duplicate check and insert are atomic inside the store
    let account = state.store.create_account(NewAccount {
        name: req.name,
        email,
        password_hash,
        role: req.role,
        referral_code: req.referral_code,
        institute_name: req.institute_name,
        institute_location: req.institute_location,
    })?;

    tracing::info!(user_id = %account.id, role = %account.role, "register: User registered");

    Ok(Json(RegisterResponse {
        success: true,
        message: "User registered successfully".to_string(),
        data: RegisterData {
            user_id: account.id,
            is_approved: account.is_approved,
        },
    }))
}

/// Login - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = req.email.trim().to_lowercase();

    // Unknown email and wrong password both map to the same error, so the
    // response does not reveal which emails are registered
    let account = state.store.find_by_email(&email).ok_or_else(|| {
        tracing::warn!("login: Unknown email");
        ApiError::InvalidCredentials
    })?;

    let valid = verify_password(&req.password, &account.password_hash).map_err(|e| {
        tracing::error!(error = ?e, "login: Password verification failed");
        ApiError::Internal
    })?;

    if !valid {
        tracing::warn!(user_id = %account.id, "login: Invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = generate_token();
    state.store.insert_session(digest_token(&token), account.id);

    tracing::info!(user_id = %account.id, "login: Session issued");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        data: LoginData {
            user: UserView::from(&account),
            token,
        },
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Basic email shape validation (the original relied on its framework's
/// email type for the same check)
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }

    email.chars().all(|c| !c.is_whitespace())
}
