use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termfolio_core::{AppConfig, Portfolio};

mod commands;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(author, version, about = "A scroll-driven personal portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Portfolio content file (overrides `content_path` in the config)
    #[arg(short = 'c', long, global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio viewer
    Run,
    /// Write a default config and a sample portfolio to edit
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Validate the portfolio content and summarize its sections
    Check,
    /// Print the portfolio content as JSON
    Export {
        #[arg(long)]
        pretty: bool,
    },
    /// List built-in themes
    Themes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, interactive)?;

    let content_path = cli.content.clone().or_else(|| config.content_path());

    match cli.command {
        Some(Commands::Run) | None => {
            let portfolio = Portfolio::load_or_sample(content_path.as_deref())?;
            commands::run::run(config, portfolio)
        }
        Some(Commands::Init { force }) => commands::init::run(force),
        Some(Commands::Check) => {
            let portfolio = Portfolio::load_or_sample(content_path.as_deref())?;
            commands::check::run(&portfolio)
        }
        Some(Commands::Export { pretty }) => {
            let portfolio = Portfolio::load_or_sample(content_path.as_deref())?;
            commands::export::run(&portfolio, pretty)
        }
        Some(Commands::Themes) => commands::themes::run(&config),
    }
}

/// The viewer owns the terminal, so it logs to a file under the data
/// directory. Other commands log to stderr.
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if interactive {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
