//! pix-tui - Terminal UI for Pix
//!
//! Browse, search, like, save and comment on an in-memory media feed, and
//! publish new posts from local image or video files.

use std::path::PathBuf;

use clap::Parser;
use libpix::logging::{config_from_env, LogFormat};
use libpix::media::MediaDecoder;
use libpix::Config;

use pix_tui::{
    app::event::{EventHandler, TuiEvent},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, App, Effect,
};

#[derive(Parser, Debug)]
#[command(name = "pix-tui")]
#[command(about = "Terminal UI for an in-memory media feed", long_about = None)]
struct Cli {
    /// Config file (defaults to $PIX_CONFIG or ~/.config/pix/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty feed
    #[arg(long)]
    no_seed: bool,

    /// Write logs to this file; nothing is logged otherwise
    #[arg(long, env = "PIX_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log format (text, json or pretty)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// The terminal is drawn on, so logs only ever go to a file
fn init_logging(cli: &Cli) -> std::io::Result<()> {
    let Some(ref path) = cli.log_file else {
        return Ok(());
    };

    let mut logging = config_from_env(cli.verbose);
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    logging.init_to_file(path)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if cli.no_seed {
        config.feed.seed = false;
    }

    tracing::info!(
        seed = config.feed.seed,
        viewer = %config.feed.viewer_name,
        "Starting pix-tui"
    );

    let services = ServiceHandle::new(MediaDecoder::from_config(&config.media))?;
    let mut app = App::new(&config);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app, &services);
    restore_terminal(terminal)?;

    tracing::info!("Exiting pix-tui");
    result
}

fn run_app(terminal: &mut Tui, app: &mut App, services: &ServiceHandle) -> Result<()> {
    let event_handler = EventHandler::new(app.tick_rate_ms);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event_handler.next()? {
            TuiEvent::Key(key) => {
                if let Some(Effect::Decode(request)) = app.handle_key(key) {
                    tracing::debug!(
                        upload = %request.upload,
                        path = %request.path.display(),
                        "Decoding upload"
                    );
                    services.decode(request);
                }
            }
            TuiEvent::Resize(_, _) => {}
            TuiEvent::Tick => app.on_tick(),
        }

        while let Some(result) = services.try_recv() {
            app.on_decoded(result);
        }
    }

    Ok(())
}
