use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use revolve_core::{AppConfig, VisualMode, WrapRule};

mod commands;

#[derive(Parser)]
#[command(name = "revolve")]
#[command(author, version, about = "An infinitely looping review carousel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/revolve/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the carousel (default)
    Run {
        /// Reviews file (.toml or .json) instead of the built-in samples
        #[arg(short = 'r', long)]
        reviews: Option<PathBuf>,
        /// Start in light mode
        #[arg(long)]
        light: bool,
        /// Wrap once the first clone reaches the left edge
        #[arg(long)]
        first_clone: bool,
    },
    /// Print the padded card sequence and its boundaries
    List {
        /// Reviews file (.toml or .json) instead of the built-in samples
        #[arg(short = 'r', long)]
        reviews: Option<PathBuf>,
        /// Card width in logical units
        #[arg(short = 'w', long, default_value_t = 368.0)]
        card_width: f64,
    },
    /// Validate a reviews file
    Check {
        /// File to validate (.toml or .json)
        file: PathBuf,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Write a configuration file with every default spelled out
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // The terminal UI owns the screen, so it logs to a file
    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run {
            reviews,
            light,
            first_clone,
        }) => {
            if light {
                config.ui.mode = VisualMode::Light;
            }
            if first_clone {
                config.carousel.wrap_rule = WrapRule::FirstClone;
            }
            let path = reviews.or_else(|| config.reviews_path());
            let reviews = commands::load_reviews(path.as_deref()).await?;
            commands::run::run(Arc::new(config), reviews).await
        }
        None => {
            let reviews = commands::load_reviews(config.reviews_path().as_deref()).await?;
            commands::run::run(Arc::new(config), reviews).await
        }
        Some(Commands::List { reviews, card_width }) => {
            let path = reviews.or_else(|| config.reviews_path());
            let reviews = commands::load_reviews(path.as_deref()).await?;
            commands::list::run(&config, reviews, card_width)
        }
        Some(Commands::Check { file }) => commands::check::run(&file).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
