use axum::{routing::get, Router};

use crate::state::AppState;

pub(crate) mod claims;
pub(crate) mod extractors;
mod handlers;
pub(crate) mod jwt;
pub(crate) mod password;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/auth", get(handlers::current_user))
}
