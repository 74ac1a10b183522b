use super::shortcut_spans;
use crate::app::App;
use crate::ui::theme::{format_thousands, zone_color, ACCENT};
use crate::ui::widgets::tables::visible_rows;
use ratatui::layout::{Alignment, Constraint, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use solar_zoning::domain::{SortField, SortState};
use solar_zoning::metrics::region_zone;

fn header_label(field: SortField, sort: SortState) -> String {
    if field == sort.field {
        format!("{} {}", field.label(), sort.order.arrow())
    } else {
        format!("{} ⇅", field.label())
    }
}

pub fn render_comparison(app: &App, f: &mut Frame<'_>) {
    let [search_area, table_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .areas(f.area().inner(Margin::new(1, 0)));

    render_search_bar(app, f, search_area);

    let rows = app.comparison_rows();
    let total_rows = rows.len();

    if rows.is_empty() {
        let paragraph = Paragraph::new(format!("No regions match \"{}\"", app.search_query))
            .block(
                Block::default()
                    .title("Region Comparison")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .alignment(Alignment::Center);
        f.render_widget(paragraph, table_area);
    } else {
        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from("Region"),
            Cell::from(header_label(SortField::Radiation, app.sort)),
            Cell::from(header_label(SortField::Sunshine, app.sort)),
            Cell::from("Zone"),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let max_visible_rows = table_area.height.saturating_sub(3) as usize;
        let window = visible_rows(total_rows, max_visible_rows, app.comparison_index);
        let offset = window.start;

        let table_rows = rows[window].iter().enumerate().map(|(i, (rank, region))| {
            let zone = region_zone(region);
            let is_selected = i + offset == app.comparison_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(rank.to_string()),
                Cell::from(region.name),
                Cell::from(format!("{} kWh/m²", format_thousands(region.solar_radiation))),
                Cell::from(format!("{} h", format_thousands(region.average_annual_sunshine))),
                Cell::from(Span::styled(zone.stars(), Style::default().fg(zone_color(zone)))),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(3),
            Constraint::Length(18),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(6),
        ];

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!(
                        "Region Comparison ({} of {})",
                        app.comparison_index + 1,
                        total_rows
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            )
            .column_spacing(1);

        f.render_widget(table, table_area);
    }

    let help = Paragraph::new(TextLine::from(shortcut_spans(&[
        ("r", "Sort by radiation"),
        ("s", "Sort by sunshine"),
        ("/", "Search"),
        ("Enter", "Show on map"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ])))
    .block(Block::default().borders(Borders::TOP))
    .alignment(Alignment::Center);
    f.render_widget(help, help_area);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let (text, style) = if app.search_active {
        (
            format!("/{}█", app.search_query),
            Style::default().fg(Color::White),
        )
    } else if app.search_query.is_empty() {
        (
            "Press / to filter regions".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            format!("/{}", app.search_query),
            Style::default().fg(Color::Gray),
        )
    };

    let paragraph = Paragraph::new(text).style(style).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_zoning::domain::SortOrder;

    #[test]
    fn header_marks_active_sort_key() {
        let sort = SortState::new(SortField::Sunshine, SortOrder::Ascending);
        assert_eq!(header_label(SortField::Sunshine, sort), "Sunshine ▲");
        assert_eq!(header_label(SortField::Radiation, sort), "Radiation ⇅");
    }
}
