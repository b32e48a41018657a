use std::fs::File;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod bridge;
mod client;
mod commands;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::state::{App, AppConfig};
use crate::theme::ThemeMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
██╗  ██╗██╗     ██╗███╗   ██╗██╗  ██╗
╚██╗██╔╝██║     ██║████╗  ██║██║ ██╔╝
 ╚███╔╝ ██║     ██║██╔██╗ ██║█████╔╝
 ██╔██╗ ██║     ██║██║╚██╗██║██╔═██╗
██╔╝ ██╗███████╗██║██║ ╚████║██║  ██╗
╚═╝  ╚═╝╚══════╝╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝
";

/// xLink Bridge - move RUPX between Rupaya and BSC from the terminal
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wallet JSON-RPC endpoint, overriding the config file
    #[arg(long, value_name = "URL")]
    rpc_url: Option<String>,

    /// Start in this color mode, overriding the config file
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("xLink Bridge v{VERSION}");
        println!("Bridge RUPX and BRUPX between Rupaya and BSC testnets");
        return Ok(());
    }

    color_eyre::install()?;
    init_logging();

    let mut config = AppConfig::load();
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let config_path = AppConfig::config_path().ok();
    let mut app = App::new(config, config_path)?;
    tracing::info!("Starting xLink Bridge v{VERSION}");

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Logs to a file in the app directory; the terminal belongs to the UI.
///
/// `RUST_LOG` overrides the default `info` filter. Logging stays off if the
/// file cannot be created.
fn init_logging() {
    let Ok(log_path) = AppConfig::log_path() else {
        return;
    };
    let Ok(file) = File::create(log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
}
