use crate::ui::theme::{format_thousands, ACCENT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use solar_zoning::metrics::CatalogSummary;

pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub color: Color,
}

pub fn summary_cards(summary: &CatalogSummary) -> [StatCard; 4] {
    [
        StatCard {
            label: "Average radiation",
            value: format_thousands(summary.average_radiation),
            unit: "kWh/m²/year",
            color: ACCENT,
        },
        StatCard {
            label: "Country area",
            value: format!("{:.1}", summary.total_area_thousands()),
            unit: "thousand km²",
            color: Color::Green,
        },
        StatCard {
            label: "Sunshine hours",
            value: format_thousands(summary.average_sunshine),
            unit: "h/year",
            color: Color::Blue,
        },
        StatCard {
            label: "Maximum",
            value: format_thousands(summary.max_radiation),
            unit: "kWh/m²/year",
            color: Color::Magenta,
        },
    ]
}

pub fn render_stat_cards(summary: Option<&CatalogSummary>, f: &mut Frame<'_>, area: Rect) {
    let Some(summary) = summary else {
        let paragraph = Paragraph::new("Loading regional statistics...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    };

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (card, column) in summary_cards(summary).into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(card.label)
            .title_style(Style::default().fg(Color::Gray))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.color));

        let text = Text::from(TextLine::from(vec![
            Span::styled(
                card.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", card.unit), Style::default().fg(Color::Gray)),
        ]));

        f.render_widget(Paragraph::new(text).block(block), *column);
    }
}
