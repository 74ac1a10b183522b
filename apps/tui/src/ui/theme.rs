use ratatui::style::Color;
use solar_zoning::domain::SolarZone;
use solar_zoning::metrics;

pub const ACCENT: Color = Color::Rgb(249, 168, 37);

/// Terminal palette for the zone colour tokens (solar-low ... solar-very-high).
pub fn token_color(token: &str) -> Color {
    match token {
        "solar-very-high" => Color::Red,
        "solar-high" => Color::Rgb(249, 115, 22),
        "solar-medium" => Color::Yellow,
        "solar-low" => Color::Green,
        _ => Color::Gray,
    }
}

pub fn zone_color(zone: SolarZone) -> Color {
    token_color(metrics::zone_color(zone))
}

/// Groups thousands with a space: 39900 -> "39 900".
pub fn format_thousands(value: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let digits = (value.round().max(0.0) as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{lat:.2}°N, {lon:.2}°E")
}

/// First word of a display name, used for map labels.
pub fn short_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
