use super::shortcut_spans;
use crate::app::App;
use crate::ui::theme::{format_coordinates, format_thousands, zone_color, ACCENT};
use crate::ui::widgets::cards::render_stat_cards;
use crate::ui::widgets::charts::{render_monthly_chart, render_zone_distribution};
use crate::ui::widgets::map::{render_geographic_map, render_schematic_map};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use solar_zoning::domain::{MapView, Region, SolarZone};
use solar_zoning::metrics::{energy_potential, region_zone, zone_counts, PANEL_EFFICIENCY};
use tachyonfx::EffectRenderer;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let [title, cards, content, chart, footer] = Layout::vertical([
        Constraint::Length(3),  // Title
        Constraint::Length(3),  // Stats cards
        Constraint::Min(14),    // Map and region details
        Constraint::Length(12), // Monthly chart
        Constraint::Length(2),  // Shortcuts and status
    ])
    .areas(f.area().inner(Margin::new(1, 0)));

    render_title(app, f, title);
    render_stat_cards(app.summary.as_ref(), f, cards);

    let [map_area, side] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(content);
    render_map_panel(app, f, map_area);

    let [info, legend, distribution] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(side);
    render_region_info(app, f, info);
    render_legend(app, f, legend);
    if distribution.height >= 5 {
        render_zone_distribution(&app.regions, f, distribution);
    }

    render_monthly_chart(&app.monthly, f, chart);
    render_footer(app, f, footer);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let line = TextLine::from(vec![
        Span::styled(
            "☀ Solar Radiation of Belarus",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Regional zoning by solar radiation",
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  {} regions", app.regions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_map_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Zoning Map")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [tabs_area, map_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let tabs = Tabs::new(MapView::ALL.iter().map(|view| TextLine::from(view.label())))
        .select(app.map_view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));
    f.render_widget(tabs, tabs_area);

    match app.map_view {
        MapView::Geographic => render_geographic_map(
            &app.regions,
            app.selected_region_index,
            app.animation_counter,
            f,
            map_area,
        ),
        MapView::Schematic => {
            render_schematic_map(&app.regions, app.selected_region_index, f, map_area);
        }
    }
}

fn region_info_lines(region: &Region) -> Vec<TextLine<'static>> {
    let zone = region_zone(region);
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let stat = |name: &'static str, text: String| {
        TextLine::from(vec![
            Span::styled(format!("{name:<18}"), label),
            Span::styled(text, value),
        ])
    };

    vec![
        TextLine::from(Span::styled(
            format_coordinates(region.center_lat, region.center_lon),
            label,
        )),
        TextLine::from(Span::styled(
            zone.label(),
            Style::default()
                .fg(zone_color(zone))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        stat(
            "Solar radiation",
            format!("{} kWh/m²/year", format_thousands(region.solar_radiation)),
        ),
        stat(
            "Sunshine hours",
            format!("{} h/year", format_thousands(region.average_annual_sunshine)),
        ),
        stat("Optimal angle", format!("{}°", region.optimal_panel_angle)),
        stat("Area", format!("{} km²", format_thousands(region.area))),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Energy potential  ", label),
            Span::styled(
                // Same rounding as `comparison_data`, not `{:.0}`
                format!("{}", energy_potential(region).round()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" kWh/m²/year ({:.0}% efficiency)", PANEL_EFFICIENCY * 100.0),
                label,
            ),
        ]),
    ]
}

fn render_region_info(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(region) = app.selected_region() else {
        let paragraph = Paragraph::new("Select a region on the map")
            .block(Block::default().title("Region").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let block = Block::default()
        .title(region.name)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(zone_color(region_zone(region))));

    let paragraph = Paragraph::new(Text::from(region_info_lines(region)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);

    if let Ok(mut slot) = app.region_fx.lock() {
        let buffer = f.buffer_mut();
        let done = slot.as_mut().is_some_and(|effect| {
            buffer.render_effect(effect, area, app.last_tick);
            effect.done()
        });
        if done {
            *slot = None;
        }
    }
}

fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let counts = zone_counts(&app.regions);
    let lines: Vec<TextLine<'_>> = SolarZone::ALL
        .iter()
        .zip(counts.iter())
        .map(|(zone, (_, count))| {
            TextLine::from(vec![
                Span::styled("██ ", Style::default().fg(zone_color(*zone))),
                Span::styled(format!("{:<16}", zone.label()), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>9} kWh/m²", zone.range_label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(format!("  ({count})"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title("Legend")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [shortcuts, status] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let hint = Paragraph::new(TextLine::from(shortcut_spans(&[
        ("←/→", "Region"),
        ("m", "Map view"),
        ("c", "Compare"),
        ("F1", "Help"),
        ("q", "Quit"),
    ])))
    .alignment(Alignment::Center);
    f.render_widget(hint, shortcuts);

    let status_text = if app.status_message.is_empty() {
        String::from("Data: long-term meteorological observations")
    } else {
        app.status_message.clone()
    };
    let status_line = Paragraph::new(status_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(status_line, status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_zoning::catalog::find_region;

    fn plain(lines: &[TextLine<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn region_details_for_brest() {
        let brest = find_region("brest").unwrap();
        let lines = plain(&region_info_lines(brest));
        assert_eq!(lines[0], "52.10°N, 25.30°E");
        assert_eq!(lines[1], "Very high level");
        assert!(lines[3].ends_with("1 120 kWh/m²/year"));
        assert!(lines[5].ends_with("34°"));
        assert!(lines[6].ends_with("32 800 km²"));
        assert!(lines[8].contains("168 kWh/m²/year (15% efficiency)"));
    }

    #[test]
    fn energy_potential_matches_comparison_rounding() {
        let region = Region {
            solar_radiation: 1110.0,
            ..*find_region("brest").unwrap()
        };
        let lines = plain(&region_info_lines(&region));
        let served = solar_zoning::metrics::comparison_data(&[region])[0].efficiency;
        assert!((served - 167.0).abs() < f64::EPSILON);
        assert!(lines[8].contains("167 kWh/m²/year"), "{}", lines[8]);
    }
}
