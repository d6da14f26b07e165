//! Static table mapping upstream condition codes to display icon assets.

/// Day/night icon variants as published by the upstream provider, paired
/// with the `<code>@2x.png` asset each one resolves to.
///
/// Note: the rain (day) row carries code `01d` where `10d` was presumably
/// intended. First match wins, so that row is shadowed by the clear-sky
/// entry and `10d` lookups miss. Kept as-is for compatibility with existing
/// clients; do not "fix" without verifying intent.
const ICON_FILES: [(&str, &str); 18] = [
    // clear sky
    ("01d", "01d@2x.png"),
    ("01n", "01n@2x.png"),
    // few clouds
    ("02d", "02d@2x.png"),
    ("02n", "02n@2x.png"),
    // scattered clouds
    ("03d", "03d@2x.png"),
    ("03n", "03n@2x.png"),
    // broken clouds
    ("04d", "04d@2x.png"),
    ("04n", "04n@2x.png"),
    // shower rain
    ("09d", "09d@2x.png"),
    ("09n", "09n@2x.png"),
    // rain
    ("01d", "10d@2x.png"),
    ("10n", "10n@2x.png"),
    // thunderstorm
    ("11d", "11d@2x.png"),
    ("11n", "11n@2x.png"),
    // snow
    ("13d", "13d@2x.png"),
    ("13n", "13n@2x.png"),
    // mist
    ("50d", "50d@2x.png"),
    ("50n", "50n@2x.png"),
];

/// Resolve a condition code to its icon asset file name.
///
/// Case-insensitive, first match wins. Returns `None` for codes the table
/// does not know.
pub fn find_icon_file(code: &str) -> Option<&'static str> {
    ICON_FILES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(code))
        .map(|(_, file)| *file)
}
