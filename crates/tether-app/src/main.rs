mod app_state;
mod cli;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use tether_common::PlatformError;
use tether_config::TetherConfig;
use tether_platform::{MoveEventSupport, MoveSource};

use app_state::{AppEvent, TetherApp};

const DEFAULT_LOG_DIRECTIVE: &str = "tether=info";

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config comes first: it carries the default log level
    let loaded = match args.config {
        Some(ref path) => tether_config::load_config_from(path),
        None => tether_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(config_level);
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{log_directive}', using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Tether v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TetherConfig::default()
    });
    tracing::debug!("Effective config:\n{}", tether_config::config_to_json(&config));

    // Pick the move notification source
    let mode = args.move_events.unwrap_or(config.move_events.mode);
    let move_source = MoveEventSupport::detect().resolve(mode);
    tracing::info!(?mode, "Move events: {}", move_source.status_text());

    if let Err(e) = run(config, move_source) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Create the event loop and run the app until the opener closes.
fn run(config: TetherConfig, move_source: MoveSource) -> tether_common::Result<()> {
    let event_loop = EventLoop::<AppEvent>::with_user_event()
        .build()
        .map_err(|e| PlatformError::WindowError(format!("failed to create event loop: {e}")))?;
    let mut app = TetherApp::new(config, move_source, event_loop.create_proxy());

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PlatformError::WindowError(format!("event loop error: {e}")))?;
    Ok(())
}
