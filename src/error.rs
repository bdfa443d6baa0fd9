use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error taxonomy. Every failure a handler or extractor can surface maps
/// onto exactly one of these, and each variant owns its wire shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One message per failed input rule, in rule declaration order.
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("user already exists")]
    DuplicateUser,

    #[error("no token on request")]
    MissingToken,

    #[error("token rejected")]
    InvalidToken,

    /// Anything unanticipated: store outage, crypto failure. The cause is
    /// logged server-side and never reaches the client.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct FieldError {
    msg: String,
}

#[derive(Serialize)]
struct ErrorList {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct AuthMessage {
    msg: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msgs) => {
                let body = ErrorList {
                    errors: msgs.into_iter().map(|msg| FieldError { msg }).collect(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::DuplicateUser => {
                let body = ErrorList {
                    errors: vec![FieldError {
                        msg: "User already exists".into(),
                    }],
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(AuthMessage {
                    msg: "No token, authorization denied",
                }),
            )
                .into_response(),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(AuthMessage {
                    msg: "Token is not valid",
                }),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}
