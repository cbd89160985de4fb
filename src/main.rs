//! # Match Sounds Main Entry Point
//!
//! Loads assets and preferences, sets up the shared context, and runs the
//! screen loop starting on the main menu.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use match_sounds::config::{BACKGROUND_TEXTURE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use match_sounds::rendering::MacroquadMeasure;
use match_sounds::{
    AppContext, AssetCache, Fonts, InputHandler, MatchSoundsResult, Preferences, ScreenId,
    ScreenManager, Skins,
};
use std::path::PathBuf;

/// Command line arguments for Match Sounds.
#[derive(Parser, Debug)]
#[command(name = "match-sounds")]
#[command(about = "A casual ear-training game: match the sounds you hear")]
#[command(version)]
struct Args {
    /// Directory containing game assets
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Preferences file holding scores and counters
    #[arg(long, default_value = "prefs.json")]
    prefs: PathBuf,

    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Match Sounds")]
async fn main() {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level);

    info!("Starting Match Sounds v{}", match_sounds::VERSION);

    if let Err(e) = run(&args).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }

    info!("Goodbye");
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

/// Loads resources and runs the screen loop.
async fn run(args: &Args) -> MatchSoundsResult<()> {
    info!("Requesting {}x{} window", args.width, args.height);
    request_new_screen_size(args.width, args.height);
    // the new size takes effect on the next frame
    next_frame().await;

    let preferences = Preferences::load(&args.prefs)?;

    let mut assets = AssetCache::new(&args.assets);
    assets.load_texture(BACKGROUND_TEXTURE).await?;

    let fonts = Fonts::load(&args.assets).await;
    let skins = Skins::default().with_font(fonts.big.font.clone());

    let ctx = AppContext::new(
        fonts,
        skins,
        Box::new(MacroquadMeasure),
        assets,
        preferences,
        screen_width(),
        screen_height(),
    );
    info!("Viewport is {}x{}", ctx.viewport_width, ctx.viewport_height);

    let mut manager = ScreenManager::new(ctx);
    let mut input = InputHandler::new();
    manager.start(ScreenId::Menu);
    manager.run(&mut input).await
}
