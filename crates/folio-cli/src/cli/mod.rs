//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config;
use folio_core::interrupt;
use folio_core::logging::{self, LogConfig, WorkerGuard};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Personal portfolio page for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable the scroll reveal and the typewriter animation
    #[arg(long, global = true)]
    no_motion: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive page (the default)
    View,
    /// Print the whole page as plain text
    Print {
        /// Text column width (clamped to the page's supported range)
        #[arg(long, default_value_t = commands::print::DEFAULT_WIDTH)]
        width: usize,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from the built-in defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init().context("install Ctrl+C handler")?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli) })
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        no_motion,
        verbose,
    } = cli;

    match command.unwrap_or(Commands::View) {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
        Commands::View => {
            let config = load_config(no_motion)?;
            let _guard = init_logging(verbose, &config.log.level);
            commands::view::run(&config)
        }
        Commands::Print { width } => {
            let config = load_config(no_motion)?;
            let _guard = init_logging(verbose, &config.log.level);
            commands::print::run(&config, width)
        }
    }
}

fn load_config(no_motion: bool) -> Result<config::Config> {
    let mut config = config::Config::load().context("load config")?;
    if no_motion {
        config.motion.disable();
    }
    Ok(config)
}

/// Logging is best effort: a read-only home must not stop the page.
fn init_logging(verbose: u8, configured: &str) -> Option<WorkerGuard> {
    let log_config = LogConfig::from_verbosity(verbose, configured);
    match logging::init_logging(&log_config) {
        Ok(guard) => {
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio started");
            Some(guard)
        }
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    }
}
