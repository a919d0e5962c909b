//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sensorpad_domain::error::{SensorPadError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SensorPadError`] to an HTTP response with appropriate status code.
///
/// Validation failures surface their message verbatim; storage failures are
/// logged server-side and answered with an opaque message so internal detail
/// never reaches clients.
pub struct ApiError(SensorPadError);

impl From<SensorPadError> for ApiError {
    fn from(err: SensorPadError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(SensorPadError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SensorPadError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SensorPadError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
