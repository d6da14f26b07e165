use reqwest::StatusCode;
use thiserror::Error;

/// Failure outcomes of a weather lookup, independent of transport detail.
///
/// The first four variants are deterministic translations: blank input is
/// rejected before any network activity, and 404/401/503 from the upstream
/// provider map to their own variants. Everything else travels untranslated
/// so the original diagnostic detail survives up to the caller.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City is empty or null, this is illegal")]
    EmptyCity,

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Invalid ApiKey, try to change it")]
    InvalidApiKey,

    #[error("Service unavailable, try again later")]
    ServiceUnavailable,

    /// Upstream answered with a status the taxonomy does not anticipate.
    #[error("Weather provider request failed with status {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    /// Network or body-decoding failure from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_city_message_is_fixed() {
        assert_eq!(
            WeatherError::EmptyCity.to_string(),
            "City is empty or null, this is illegal"
        );
    }

    #[test]
    fn city_not_found_message_names_the_city() {
        let err = WeatherError::CityNotFound("Nowhereville".to_string());
        assert!(err.to_string().contains("Nowhereville"));
    }

    #[test]
    fn credential_and_availability_messages_are_fixed() {
        assert_eq!(
            WeatherError::InvalidApiKey.to_string(),
            "Invalid ApiKey, try to change it"
        );
        assert_eq!(
            WeatherError::ServiceUnavailable.to_string(),
            "Service unavailable, try again later"
        );
    }

    #[test]
    fn upstream_status_keeps_the_original_status() {
        let err = WeatherError::UpstreamStatus {
            status: StatusCode::IM_A_TEAPOT,
            body: "short and stout".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("418"));
        assert!(msg.contains("short and stout"));
    }
}
