use anyhow::Result;
use clap::Parser;
use courseoutline::app::App;
use courseoutline::cli::Cli;
use courseoutline::utils::{get_log_dir, path::LOG_FILE_NAME};
use courseoutline::ApiClient;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file, the TUI owns stdout
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let result = if cli.command.is_some() {
        cli.execute()
    } else {
        setup_panic_hook();

        let config = cli.load_config()?;
        let client = ApiClient::new(&config.api)?;
        tracing::info!("Using backend at {}", client.base_url());

        App::new(config, client).and_then(|mut app| app.run())
    };

    drop(guard);

    result
}
