use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use weather_core::WeatherError;

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected internal server error occurred";

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub path: String,
}

/// A domain failure translated for the HTTP surface: status code, the
/// message to expose, and the request path it happened on.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn from_weather(err: WeatherError, path: &str) -> Self {
        let status = match &err {
            WeatherError::EmptyCity => StatusCode::BAD_REQUEST,
            WeatherError::CityNotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            WeatherError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            WeatherError::UpstreamStatus { .. } | WeatherError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Unanticipated failures surface as a fixed message; the original
        // error only goes to the log.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, path, "unhandled upstream failure");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            err.to_string()
        };

        Self {
            status,
            message,
            path: path.to_string(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = ErrorDetails {
            timestamp: Utc::now(),
            message: self.message,
            path: self.path,
        };

        (self.status, Json(details)).into_response()
    }
}
