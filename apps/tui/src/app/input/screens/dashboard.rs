use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;
use solar_zoning::domain::{MapView, SortField};

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => app.select_next_region(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => app.select_prev_region(),
        KeyCode::Home => app.select_region(0),
        KeyCode::End => app.select_region(app.regions.len().saturating_sub(1)),
        KeyCode::Char('m') | KeyCode::Tab => app.toggle_map_view(),
        KeyCode::Char('1') => app.map_view = MapView::Geographic,
        KeyCode::Char('2') => app.map_view = MapView::Schematic,
        KeyCode::Char('c') => {
            app.screen = AppScreen::Comparison;
            app.comparison_index = 0;
        }
        KeyCode::Char('r') => app.select_sort(SortField::Radiation),
        KeyCode::Char('s') => app.select_sort(SortField::Sunshine),
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}
