//! Timekeeping Guide - interactive terminal guide to legal time entries
//!
//! Renders the guide page with ratatui; `print` dumps it as plain text.

mod clipboard;
mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use crossterm::event::{MouseButton, MouseEventKind};
use frontend::{Frontend, FrontendEvent};
use std::path::PathBuf;
use std::time::Instant;

#[derive(ClapParser)]
#[command(name = "timekeeping-guide")]
#[command(about = "Interactive guide to timekeeping for legal professionals", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.timekeeping-guide)
    /// Can also be set via TIMEKEEPING_GUIDE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Color theme (dark, light)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the page to stdout as plain text
    Print {
        /// Output width in columns
        #[arg(short, long, default_value_t = 100)]
        width: u16,

        /// Open the detail panel of this card (1-4)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        card: Option<u8>,

        /// Show the quick tip examples
        #[arg(long)]
        tip: bool,
    },
    /// Load a config file and report the effective settings
    CheckConfig {
        /// Config file to check (default: config.toml in the data directory)
        file: Option<PathBuf>,
    },
}

fn init_logging() -> Result<()> {
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create data directory: {:?}", parent))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // The data directory decides where the log goes, so set it first
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV_VAR, data_dir);
    }

    // TUI apps can't log to stdout, so we write to a file
    // (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    init_logging()?;

    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV_VAR) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV_VAR, env_dir);
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::Print { width, card, tip } => {
                let mut page = data::PageState::new();
                if let Some(card) = card {
                    page.toggle_card(usize::from(card) - 1);
                }
                if tip {
                    page.toggle_tip();
                }
                print!("{}", frontend::plain::render_plain_text(&page, width)?);
            }
            Commands::CheckConfig { file } => check_config(file)?,
        }
        return Ok(());
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };
    if let Some(theme) = &cli.theme {
        config.set_theme(theme);
    }

    run_tui(config)
}

/// Report the effective settings of a config file, exiting 1 if it fails to load
fn check_config(file: Option<PathBuf>) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => config::Config::config_path()?,
    };

    let result = if path.exists() {
        println!("Checking config file: {:?}", path);
        config::Config::load_from_path(&path)
    } else {
        println!("No config file at {:?}, checking embedded default", path);
        config::Config::embedded_default()
    };

    match result {
        Ok(config) => {
            let theme = theme::ThemePresets::by_name(&config.active_theme);
            println!("✓ Config loaded successfully");
            println!("  active_theme      = {} ({})", config.active_theme, theme.description);
            println!("  poll_timeout_ms   = {}", config.ui.poll_timeout_ms);
            println!("  toast_duration_ms = {}", config.ui.toast_duration_ms);
            println!("  max_toasts        = {}", config.ui.max_toasts);
            println!("  mouse_capture     = {}", config.ui.mouse_capture);
            println!("  max_content_width = {}", config.ui.max_content_width);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run TUI frontend
fn run_tui(config: config::Config) -> Result<()> {
    let mut frontend = frontend::TuiFrontend::new(&config)?;
    let mut app_core = core::AppCore::new(config);

    let (width, height) = frontend.size();
    tracing::info!("Starting guide at {}x{}", width, height);

    // Main event loop
    while app_core.running {
        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key(key) => app_core.handle_key(key),
                FrontendEvent::Mouse { kind, x, y } => match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        app_core.handle_click(frontend.hit_test(x, y));
                    }
                    MouseEventKind::ScrollUp => app_core.handle_wheel(-1),
                    MouseEventKind::ScrollDown => app_core.handle_wheel(1),
                    _ => {}
                },
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    app_core.needs_render = true;
                }
                FrontendEvent::Paste { text } => app_core.handle_paste(&text),
            }
        }

        app_core.tick(Instant::now());

        if app_core.needs_render {
            frontend.render(&mut app_core)?;
            app_core.needs_render = false;
        }
    }

    frontend.cleanup()?;
    tracing::info!("Guide closed");
    Ok(())
}
