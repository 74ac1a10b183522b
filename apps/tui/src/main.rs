mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use solar_zoning::api::StaticSolarApi;
use solar_zoning::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let settings = Settings::load(&args.overrides())?;

    let interactive = !args.headless && is_terminal();
    logging::init(settings.debug, interactive)?;
    tracing::debug!(
        region = settings.initial_region_id(),
        api = %settings.api_base_url,
        interactive,
        "starting"
    );

    let api = StaticSolarApi::new(settings.api_base_url.clone());

    if !interactive {
        return event::run_headless(&api, &settings, args.json).await;
    }

    let mut app = App::new(settings);
    app.load(&api).await?;

    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal even when the loop failed
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
