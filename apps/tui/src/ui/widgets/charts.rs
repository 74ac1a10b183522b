use crate::ui::theme::{zone_color, ACCENT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;
use solar_zoning::domain::{MonthlyData, Region};
use solar_zoning::metrics::zone_counts;

const RADIATION_COLOR: Color = ACCENT;
const SUNSHINE_COLOR: Color = Color::Cyan;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_value(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

fn empty_chart(title: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new("No data available")
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Grouped bars per month: radiation (kWh/m²) next to sunshine hours.
pub fn render_monthly_chart(monthly: &[MonthlyData], f: &mut Frame<'_>, area: Rect) {
    if monthly.is_empty() {
        empty_chart("Annual Dynamics", f, area);
        return;
    }

    let title = TextLine::from(vec![
        Span::raw(" Annual Dynamics  "),
        Span::styled("■", Style::default().fg(RADIATION_COLOR)),
        Span::raw(" radiation kWh/m²  "),
        Span::styled("■", Style::default().fg(SUNSHINE_COLOR)),
        Span::raw(" sunshine hours "),
    ]);

    let groups: Vec<BarGroup<'_>> = monthly
        .iter()
        .map(|month| {
            let bars = [
                Bar::default()
                    .value(bar_value(month.radiation))
                    .style(Style::default().fg(RADIATION_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(RADIATION_COLOR)),
                Bar::default()
                    .value(bar_value(month.sunshine))
                    .style(Style::default().fg(SUNSHINE_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(SUNSHINE_COLOR)),
            ];
            BarGroup::default()
                .label(TextLine::from(month.month))
                .bars(&bars)
        })
        .collect();

    let max_value = monthly
        .iter()
        .map(|month| bar_value(month.radiation.max(month.sunshine)))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .max(max_value)
        .bar_width(2)
        .bar_gap(0)
        .group_gap(1);

    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

/// Number of regions per zone, most intense first.
pub fn render_zone_distribution(regions: &[Region], f: &mut Frame<'_>, area: Rect) {
    if regions.is_empty() {
        empty_chart("Zone Distribution", f, area);
        return;
    }

    let counts = zone_counts(regions);
    let bars: Vec<Bar<'_>> = counts
        .iter()
        .map(|(zone, count)| {
            Bar::default()
                .value(*count as u64)
                .label(TextLine::from(zone.stars()))
                .style(Style::default().fg(zone_color(*zone)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Zone Distribution")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(regions.len() as u64)
        .bar_gap(1)
        .bar_width(5);

    f.render_widget(chart, area);
}
