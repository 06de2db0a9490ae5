//! Outfit Rendering
//!
//! Turns a suggestion into the lines shown under the suggest button.

use crate::models::{ClothingEntry, SuggestionResult};

/// `Weather: 24°C, Clear`
pub fn weather_line(result: &SuggestionResult) -> String {
    format!(
        "Weather: {}°C, {}",
        result.current_weather.temperature, result.current_weather.condition
    )
}

/// Garment lines in display order: shirt, pants, shoes, then top if any.
/// Returns (label, text) pairs, e.g. ("Shirt", "Oxford Shirt (White)").
pub fn item_lines(result: &SuggestionResult) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Shirt", describe(&result.shirt)),
        ("Pants", describe(&result.pants)),
        ("Shoes", describe(&result.shoes)),
    ];
    if let Some(top) = &result.top {
        lines.push(("Top", describe(top)));
    }
    lines
}

/// Every rendered line, weather first
pub fn outfit_lines(result: &SuggestionResult) -> Vec<String> {
    std::iter::once(weather_line(result))
        .chain(
            item_lines(result)
                .into_iter()
                .map(|(label, text)| format!("{}: {}", label, text)),
        )
        .collect()
}

fn describe(entry: &ClothingEntry) -> String {
    format!("{} ({})", entry.item_name, entry.color)
}
