pub mod comparison;
pub mod dashboard;
pub mod help;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Alternating key/description spans for a shortcut hint line.
fn shortcut_spans(pairs: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    pairs
        .iter()
        .flat_map(|&(key, action)| {
            [
                key_span(key),
                Span::styled(format!(": {action}   "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect()
}
