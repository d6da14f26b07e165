use weather_core::WeatherReport;

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Render the single-page weather view for a successful lookup.
///
/// Only the first condition entry is shown; the icon image is included only
/// when a local asset was resolved for its code.
pub fn render(report: &WeatherReport) -> String {
    let temp = report
        .main
        .as_ref()
        .map(|m| m.temp.to_string())
        .unwrap_or_default();

    let description = report
        .weather
        .first()
        .map(|c| c.description.as_str())
        .unwrap_or("");

    let icon = report
        .icon_file_name
        .as_deref()
        .map(|file| format!(r#"<img src="{ICON_BASE_URL}/{file}" alt="{description}">"#))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Weather in {name}</title></head>\n\
         <body>\n\
         <h1>Weather in {name}</h1>\n\
         <p class=\"temperature\">{temp} °С</p>\n\
         <p class=\"description\">{description}</p>\n\
         {icon}\n\
         </body>\n\
         </html>\n",
        name = report.name,
    )
}
