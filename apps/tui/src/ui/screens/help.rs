use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use solar_zoning::domain::SolarZone;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press F1, ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<8}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Solar Radiation Zoning",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Annual solar radiation, sunshine hours and panel angles for each region, classified into four zones.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled("Dashboard:", bold)),
        shortcut("←/→", "Previous / next region"),
        shortcut("m, Tab", "Switch between geographic and schematic map"),
        shortcut("1 / 2", "Geographic / schematic map"),
        shortcut("c", "Open region comparison"),
        shortcut("Space", "Pause / resume animation"),
        shortcut("F1, ?", "Toggle this help screen"),
        shortcut("q", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled("Comparison:", bold)),
        shortcut("r / s", "Sort by radiation / sunshine (repeat to reverse)"),
        shortcut("/", "Filter regions by name"),
        shortcut("Enter", "Show the highlighted region on the dashboard"),
        shortcut("Esc", "Clear filter / back to dashboard"),
        TextLine::from(""),
        TextLine::from(Span::styled("Zones (kWh/m²/year):", bold)),
    ];

    lines.extend(SolarZone::ALL.iter().map(|zone| {
        TextLine::from(format!(
            "  {:<5} {:<16} {}",
            zone.stars(),
            zone.label(),
            zone.range_label()
        ))
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("CLI Options:", bold)));

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
