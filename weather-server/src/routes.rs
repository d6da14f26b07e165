use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::Uri,
    response::Html,
    routing::get,
};
use weather_core::{WeatherProvider, WeatherReport};

use crate::{error::ApiError, view};

pub type SharedProvider = Arc<dyn WeatherProvider>;

pub fn router(provider: SharedProvider) -> Router {
    Router::new()
        .route("/view/{city}", get(weather_view))
        .route("/{city}", get(weather_json))
        .with_state(provider)
}

/// `GET /{city}` — the normalized lookup result as JSON.
async fn weather_json(
    State(provider): State<SharedProvider>,
    Path(city): Path<String>,
    uri: Uri,
) -> Result<Json<WeatherReport>, ApiError> {
    let report = provider
        .current_weather(&city)
        .await
        .map_err(|e| ApiError::from_weather(e, uri.path()))?;

    Ok(Json(report))
}

/// `GET /view/{city}` — the same lookup rendered as an HTML page.
async fn weather_view(
    State(provider): State<SharedProvider>,
    Path(city): Path<String>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let report = provider
        .current_weather(&city)
        .await
        .map_err(|e| ApiError::from_weather(e, uri.path()))?;

    Ok(Html(view::render(&report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use weather_core::{Condition, MainInfo, WeatherError};

    struct StubProvider(Box<dyn Fn() -> Result<WeatherReport, WeatherError> + Send + Sync>);

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, _city: &str) -> Result<WeatherReport, WeatherError> {
            (self.0)()
        }
    }

    fn app(outcome: impl Fn() -> Result<WeatherReport, WeatherError> + Send + Sync + 'static) -> Router {
        router(Arc::new(StubProvider(Box::new(outcome))))
    }

    fn london_report() -> WeatherReport {
        WeatherReport {
            main: Some(MainInfo { temp: 5.0 }),
            weather: vec![Condition {
                description: "clear sky".to_string(),
                icon: "01n".to_string(),
            }],
            name: "London".to_string(),
            icon_file_name: Some("01n@2x.png".to_string()),
        }
    }

    async fn get_response(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn json_endpoint_returns_the_report() {
        let (status, body) = get_response(app(|| Ok(london_report())), "/London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "London");
        assert_eq!(body["main"]["temp"], 5.0);
        assert_eq!(body["weather"][0]["description"], "clear sky");
        assert_eq!(body["weather"][0]["icon"], "01n");
        assert_eq!(body["iconFileName"], "01n@2x.png");
    }

    #[tokio::test]
    async fn json_endpoint_omits_unresolved_icon() {
        let (status, body) = get_response(
            app(|| {
                let mut report = london_report();
                report.icon_file_name = None;
                Ok(report)
            }),
            "/London",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("iconFileName").is_none());
    }

    #[tokio::test]
    async fn blank_city_maps_to_bad_request() {
        let (status, body) =
            get_response(app(|| Err(WeatherError::EmptyCity)), "/%20%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "City is empty or null, this is illegal");
    }

    #[tokio::test]
    async fn unknown_city_maps_to_not_found_with_payload() {
        let (status, body) = get_response(
            app(|| Err(WeatherError::CityNotFound("Nowhereville".to_string()))),
            "/Nowhereville",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "City not found: Nowhereville");
        assert_eq!(body["path"], "/Nowhereville");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn invalid_credentials_map_to_unauthorized() {
        let (status, body) =
            get_response(app(|| Err(WeatherError::InvalidApiKey)), "/London").await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid ApiKey, try to change it");
    }

    #[tokio::test]
    async fn upstream_outage_maps_to_service_unavailable() {
        let (status, body) =
            get_response(app(|| Err(WeatherError::ServiceUnavailable)), "/London").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "Service unavailable, try again later");
    }

    #[tokio::test]
    async fn unanticipated_failure_maps_to_generic_internal_error() {
        let (status, body) = get_response(
            app(|| {
                Err(WeatherError::UpstreamStatus {
                    status: StatusCode::IM_A_TEAPOT,
                    body: "internal detail".to_string(),
                })
            }),
            "/London",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An unexpected internal server error occurred");
        assert_eq!(body["path"], "/London");
    }

    #[tokio::test]
    async fn view_endpoint_renders_html() {
        let response = app(|| Ok(london_report()))
            .oneshot(
                Request::builder()
                    .uri("/view/London")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Weather in London"));
        assert!(html.contains("5 °С"));
        assert!(html.contains("clear sky"));
        assert!(html.contains("01n@2x.png"));
    }

    #[tokio::test]
    async fn view_endpoint_maps_errors_like_the_json_one() {
        let (status, body) = get_response(
            app(|| Err(WeatherError::CityNotFound("Nowhereville".to_string()))),
            "/view/Nowhereville",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/view/Nowhereville");
    }
}
