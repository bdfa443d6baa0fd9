use axum::{
    extract::{FromRef, State},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::{jwt::JwtKeys, password};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::avatar::gravatar_url;
use crate::users::dto::{RegisterRequest, TokenResponse};
use crate::users::repo::User;

const MSG_NAME_REQUIRED: &str = "Name is required";
const MSG_EMAIL_INVALID: &str = "Please include a valid email";
const MSG_PASSWORD_TOO_SHORT: &str = "Please enter a password with 6 or more characters";

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Input rules checked before any side effect, messages collected in
/// declaration order.
fn validate(payload: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.name.is_empty() {
        errors.push(MSG_NAME_REQUIRED.to_string());
    }
    if !is_valid_email(&payload.email) {
        errors.push(MSG_EMAIL_INVALID.to_string());
    }
    if payload.password.len() < 6 {
        errors.push(MSG_PASSWORD_TOO_SHORT.to_string());
    }
    errors
}

/// Register a new user and issue a signed identity token.
///
/// The uniqueness check and the insert are two separate store round trips;
/// concurrent registrations with the same email can both pass the check, in
/// which case the losing insert fails on the schema constraint and surfaces
/// as the generic 500.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    let errors = validate(&payload);
    if !errors.is_empty() {
        warn!(count = errors.len(), "registration failed validation");
        return Err(ApiError::Validation(errors));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::DuplicateUser);
    }

    let avatar = gravatar_url(&payload.email);
    let hash = password::hash_password(&payload.password)?;

    let user = User::create(&state.db, &payload.name, &payload.email, &avatar, &hash).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(TokenResponse { token }))
}
