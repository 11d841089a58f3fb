use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use silverzone_tui::api::{AccidentSource, OpenDataClient};
use silverzone_tui::app::App;
use silverzone_tui::cli::CliArgs;
use silverzone_tui::{config, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Piped output gets the plain report instead of the dashboard
    let headless = args.headless || args.json || !is_terminal();

    let config = config::init_app_config()?;
    init_logging(args.log_filter(!headless).as_deref());

    let source: Arc<dyn AccidentSource> = Arc::new(OpenDataClient::new(&config.api)?);

    if headless {
        return event::run_headless(source.as_ref(), config.start_year, args.json).await;
    }

    let mut app = App::new(source, config.start_year, &config.start_route);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn init_logging(filter: Option<&str>) {
    if let Some(filter) = filter {
        pretty_env_logger::formatted_builder()
            .parse_filters(filter)
            .init();
    }
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
