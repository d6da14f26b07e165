use serde::{Deserialize, Serialize};

/// Temperature block of the upstream payload. Values arrive already in
/// metric units (requested via query parameter) and are taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainInfo {
    pub temp: f64,
}

/// One weather condition entry: free-text description plus the provider's
/// condition code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

/// Normalized lookup result, constructed fresh per call from the upstream
/// body and never mutated after enrichment.
///
/// Decoding is lenient: a parseable body missing `main`, `weather`, or
/// `name` still yields a report, with the absent pieces left empty — no
/// error is raised for a malformed-but-parseable upstream body.
///
/// `weather` keeps every condition entry the provider sent, though only the
/// first one drives enrichment and the HTML view. `icon_file_name` is not an
/// upstream field: it is derived locally from `weather[0].icon` and omitted
/// when the code is unrecognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub main: Option<MainInfo>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "iconFileName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_file_name: Option<String>,
}
