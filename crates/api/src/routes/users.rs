//! User profile routes

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;

use crate::{
    auth::digest_token,
    error::{ApiError, ApiResult},
    routes::auth::UserView,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub data: UserView,
}

/// Fetch the authenticated user's profile - GET /api/user/profile
///
/// Expects `Authorization: Bearer <token>`; a bare token without the prefix
/// is accepted as well, matching the original API.
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<ProfileResponse>> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::MissingToken)?;

    let raw = header_value.to_str().map_err(|_| ApiError::InvalidToken)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    let user_id = state
        .store
        .resolve_session(&digest_token(token))
        .ok_or(ApiError::InvalidToken)?;

    // Accounts are never deleted, so a resolved session without a matching
    // record means the two maps disagree
    let account = state.store.find_by_id(user_id).ok_or_else(|| {
        tracing::error!(user_id = %user_id, "profile: Session resolved to a missing account");
        ApiError::NotFound
    })?;

    Ok(Json(ProfileResponse {
        success: true,
        data: UserView::from(&account),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes::auth::{login, register, LoginRequest, RegisterRequest};
    use axum::http::HeaderValue;

    fn test_state() -> AppState {
        AppState::new(Config {
            port: 8000,
            environment: "test".to_string(),
        })
    }

    async fn register_and_login(state: &AppState) -> String {
        register(
            State(state.clone()),
            Json(RegisterRequest {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
                role: "student".to_string(),
                referral_code: None,
                institute_name: None,
                institute_location: None,
            }),
        )
        .await
        .unwrap();

        login(
            State(state.clone()),
            Json(LoginRequest {
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            }),
        )
        .await
        .unwrap()
        .0
        .data
        .token
    }

    fn bearer_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let state = test_state();
        let token = register_and_login(&state).await;

        let res = profile(
            State(state.clone()),
            bearer_headers(&format!("Bearer {token}")),
        )
        .await
        .unwrap();

        assert!(res.success);
        assert_eq!(res.data.name, "A");
        assert_eq!(res.data.email, "a@x.com");
        assert_eq!(res.data.role, "student");
        assert!(res.data.is_approved);

        // The sanitized view never serializes a password hash
        let body = serde_json::to_value(&res.0).unwrap();
        let keys: Vec<&str> = body["data"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 5);
        assert!(!keys.iter().any(|k| k.contains("password")));
    }

    #[tokio::test]
    async fn test_profile_accepts_bare_token() {
        let state = test_state();
        let token = register_and_login(&state).await;

        let res = profile(State(state), bearer_headers(&token)).await.unwrap();
        assert_eq!(res.data.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_profile_missing_header() {
        let state = test_state();

        let err = profile(State(state), HeaderMap::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn test_profile_fabricated_token() {
        let state = test_state();
        register_and_login(&state).await;

        let err = profile(State(state), bearer_headers("Bearer deadbeef"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }
}
