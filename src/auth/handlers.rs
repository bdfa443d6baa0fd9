use axum::{extract::State, Json};
use tracing::instrument;

use crate::auth::extractors::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Identity read for the authenticated caller. The password hash is skipped
/// at serialization, so the response carries id, name, email, avatar and
/// creation time only.
#[instrument(skip(state))]
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no user record for authenticated id {user_id}"))?;
    Ok(Json(user))
}
