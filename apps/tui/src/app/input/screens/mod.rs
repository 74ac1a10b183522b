use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod comparison;
mod dashboard;

/// F1 (or `?` outside the search box) toggles the help popup.
/// While the popup is open it swallows every other key.
fn handle_help_keys(app: &mut App, key: KeyCode) -> bool {
    let typing = app.screen == AppScreen::Comparison && app.search_active;
    match (app.show_help, key) {
        (_, KeyCode::F(1)) => app.show_help = !app.show_help,
        (false, KeyCode::Char('?')) if !typing => app.show_help = true,
        (true, KeyCode::Esc | KeyCode::Char('?')) => app.show_help = false,
        (true, _) => {}
        (false, _) => return false,
    }
    true
}

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if handle_help_keys(app, key) {
        return;
    }

    // Typing into the search box must not trigger shortcuts
    if app.screen == AppScreen::Comparison && app.search_active {
        comparison::handle_search_input(app, key);
        return;
    }

    if key == KeyCode::Char(' ') {
        app.toggle_animation_pause();
        return;
    }

    match app.screen {
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::Comparison => comparison::handle_comparison_input(app, key),
    }
}
