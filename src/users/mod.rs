use axum::{routing::post, Router};

use crate::state::AppState;

mod avatar;
mod dto;
mod handlers;
pub(crate) mod repo;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", post(handlers::register))
}
