use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::browse::{self, ListKind};
use commands::{config, demo, simulate};
use reelshelf_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod messages;
mod output;

#[derive(Parser)]
#[command(name = "reelshelf")]
#[command(about = "ReelShelf - a small in-memory catalog of movies and tv series episodes")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every catalog query against the configured library
    Demo,
    /// List library contents
    List {
        /// Which items to list
        #[arg(long, default_value = "all", value_enum)]
        kind: ListKind,
    },
    /// Find every item with exactly this title
    Search {
        title: String,
    },
    /// Count episodes of a tv series
    CountEpisodes {
        title: String,
    },
    /// Show the most viewed titles
    #[command(
        long_about = "Show the most viewed titles of one kind. KIND is 'movie' or 'tv series' \
                      (case-insensitive; quote the space)."
    )]
    Top {
        kind: String,

        /// Number of titles to show (defaults to ranking.top_count)
        #[arg(long)]
        count: Option<usize>,
    },
    /// Add random views to random items and report each pick
    Simulate {
        /// Number of picks (defaults to simulation.batch_size)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config_file = cli.config.clone().unwrap_or_else(|| paths.config_file());
    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    let log_file = config.logging.log_file(&paths);
    logging::init_logging(cli.verbose, cli.quiet, &config.logging, log_file.as_deref())
        .map_err(|e| eyre!("{}", e))?;
    tracing::debug!(path = %config_file.display(), "Configuration loaded");

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Demo => demo::run_demo(&config, &output),
        Commands::List { kind } => browse::run_list(kind, &config, &output),
        Commands::Search { title } => browse::run_search(&title, &config, &output),
        Commands::CountEpisodes { title } => browse::run_count_episodes(&title, &config, &output),
        Commands::Top { kind, count } => browse::run_top(&kind, count, &config, &output),
        Commands::Simulate { count, seed } => simulate::run_simulate(count, seed, &config, &output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &config_file, &config, &output)
        }
    }
}
