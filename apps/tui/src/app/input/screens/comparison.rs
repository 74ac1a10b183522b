use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;
use solar_zoning::domain::SortField;

pub fn handle_comparison_input(app: &mut App, key: KeyCode) {
    let total_rows = app.comparison_rows().len();

    match key {
        KeyCode::Esc => {
            if app.search_query.is_empty() {
                app.screen = AppScreen::Dashboard;
            } else {
                app.clear_search();
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('r') => app.select_sort(SortField::Radiation),
        KeyCode::Char('s') => app.select_sort(SortField::Sunshine),
        KeyCode::Enter => app.open_comparison_selection(),
        KeyCode::Up => {
            if app.comparison_index > 0 {
                app.comparison_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.comparison_index + 1 < total_rows {
                app.comparison_index += 1;
            }
        }
        KeyCode::Home => {
            app.comparison_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.comparison_index = total_rows - 1;
            }
        }
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => app.push_search_char(ch),
        _ => {}
    }
}
