//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses for the REST routes and to GraphQL
//! errors carrying an `extensions.code` for the GraphQL endpoint, so both
//! surfaces report failures the same way.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tidyslot_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use tidyslot_api::middleware::error_handling::AppError;
/// use tidyslot_core::errors::BookingError;
///
/// async fn handler(date: String) -> Result<Json<String>, AppError> {
///     if date.is_empty() {
///         return Err(AppError(BookingError::Validation("date is empty".into())));
///     }
///     Ok(Json(date))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of `extensions.code` on the GraphQL error.
    pub fn code(&self) -> &'static str {
        match &self.0 {
            BookingError::NotFound(_) => "NOT_FOUND",
            BookingError::Validation(_) => "BAD_USER_INPUT",
            BookingError::Database(_) | BookingError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        self.log();
        let code = self.code();

        async_graphql::Error::new(self.0.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Converts a domain error straight into a GraphQL error.
pub fn graphql_error(err: BookingError) -> async_graphql::Error {
    AppError(err).extend()
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
