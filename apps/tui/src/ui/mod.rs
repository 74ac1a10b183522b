// Rendering for the dashboard and comparison screens

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f),
        AppScreen::Comparison => screens::comparison::render_comparison(app, f),
    }

    if app.show_help {
        let area = f.area();
        screens::help::render_help_popup(f, area);
    }
}
