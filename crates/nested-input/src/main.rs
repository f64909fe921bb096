//! nested-input standalone entry point.
//!
//! Opens an SDL window, runs the input bridge against it and logs every
//! event that would be injected into the compositor.  Useful for checking
//! scancode translation and hotkeys on a given host without a compositor.
//!
//! # Usage
//!
//! ```text
//! nested-input [OPTIONS]
//!
//! Options:
//!   --config <PATH>       Config file [default: $XDG_CONFIG_HOME/nested-input/config.toml]
//!   --log-level <LEVEL>   Log level when RUST_LOG is unset [default: from config]
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()                 -- TOML + CLI overrides
//!  └─ InputBridge::start()          -- loop thread: SdlHost → EventDispatcher → LogSink
//!  └─ InputBridge::shutdown_on()    -- wait for Ctrl-C, close host queue, join loop thread
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nested_input::infrastructure::host::sdl::SdlHost;
use nested_input::infrastructure::sink::log::LogSink;
use nested_input::infrastructure::storage::config::load_config;
use nested_input::{BridgeOptions, InputBridge};
use nested_input_core::OutputState;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Host input bridge for a nested compositor.
#[derive(Debug, Parser)]
#[command(
    name = "nested-input",
    about = "Forwards host window input to a nested compositor",
    version
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, env = "NESTED_INPUT_CONFIG")]
    config: Option<PathBuf>,

    /// `tracing` level filter, overriding `log_level` from the config.
    ///
    /// `RUST_LOG` takes precedence over both.
    #[arg(long, env = "NESTED_INPUT_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    let level = cli.log_level.unwrap_or_else(|| config.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    info!("nested-input starting");

    let output = Arc::new(OutputState::new(config.output));
    let sink = Arc::new(Mutex::new(LogSink::new()));
    let options = BridgeOptions::from(&config);
    let window_mode = config.output;

    // `start` blocks until the loop thread has finished host setup.
    let bridge = {
        let output = Arc::clone(&output);
        let sink = Arc::clone(&sink);
        tokio::task::spawn_blocking(move || {
            InputBridge::start(
                options,
                move || SdlHost::with_window("nested-input", window_mode),
                sink,
                output,
            )
        })
        .await
        .context("bridge startup task failed")?
        .context("starting input bridge")?
    };

    info!("input bridge running; press Ctrl-C to stop");
    let exit = bridge
        .shutdown_on(tokio::signal::ctrl_c())
        .await
        .context("stopping input bridge")?;

    let mode = output.mode();
    let forwarded = sink.lock().map(|s| s.forwarded()).unwrap_or_default();
    info!(
        ?exit,
        width = mode.width,
        height = mode.height,
        refresh_rate = mode.refresh_rate,
        fullscreen = output.is_fullscreen(),
        forwarded,
        "nested-input stopped"
    );
    Ok(())
}
