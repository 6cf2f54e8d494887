use clap::Parser;
use color_eyre::Result;

use jobease_tui::app::actions::AppActions;
use jobease_tui::app::App;
use jobease_tui::cli::CliArgs;
use jobease_tui::import::import_resume;
use jobease_tui::{config, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    init_tracing(args.debug);

    let app_config = config::init_app_config();

    if !is_terminal() {
        eprintln!("jobease-tui needs an interactive terminal.\n");
        eprintln!("{}", CliArgs::help_text());
        return Ok(());
    }

    // Initialize application state
    let mut app = App::new(app_config.api_key.clone());

    // Optionally preload the resume buffer from a file
    if let Some(path) = &args.import {
        match import_resume(std::path::Path::new(path)) {
            Ok(Some(text)) => app.apply_imported_text(text),
            Ok(None) => app.notify("Only .txt and .docx files are supported"),
            Err(e) => app.notify(format!("Import failed: {e}")),
        }
    }

    let actions = AppActions::new(app_config.api_base.clone(), app_config.download_dir.clone());

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, actions).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if debug {
        "jobease_tui=debug"
    } else {
        "jobease_tui=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
