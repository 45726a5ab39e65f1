use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-fatal errors for the server-side review endpoints.
///
/// Validation failures reject the request before any insert; a database
/// failure terminates the request with no partial insert and never corrupts
/// previously stored rows.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing form fields.")]
    MissingFields,

    #[error("Invalid rating value. Must be 1-5.")]
    InvalidRating,

    #[error("Database Error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingFields | ApiError::InvalidRating => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
