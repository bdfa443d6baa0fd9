use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Header carrying the bearer token on protected requests.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Extracts the token from the `x-auth-token` header, verifies it, and
/// yields the embedded user ID. Rejection halts the request before the
/// handler runs; expired and forged tokens are indistinguishable to the
/// client.
#[derive(Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser(claims.user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/api/auth");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, _) = builder.body(()).expect("build request").into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_header_is_rejected_as_missing_token() {
        let state = AppState::fake();
        let mut parts = parts_with_headers(&[]);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn malformed_token_is_rejected_as_invalid_token() {
        let state = AppState::fake();
        let mut parts = parts_with_headers(&[(AUTH_HEADER, "definitely-not-a-jwt")]);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_invalid_not_missing() {
        let state = AppState::fake();
        let foreign = JwtKeys::from_config(&crate::config::JwtConfig {
            secret: "some-other-secret".into(),
            ttl_secs: 360_000,
        });
        let token = foreign.sign(Uuid::new_v4()).expect("sign");
        let mut parts = parts_with_headers(&[(AUTH_HEADER, token.as_str())]);
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[tokio::test]
    async fn valid_token_yields_embedded_user_id() {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let user_id = Uuid::new_v4();
        let token = keys.sign(user_id).expect("sign");
        let mut parts = parts_with_headers(&[(AUTH_HEADER, token.as_str())]);
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .expect("extract");
        assert_eq!(extracted, user_id);
    }
}
