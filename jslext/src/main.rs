//! jslext - command-line front end for the jslex scanner.
//!
//! Tokenizes source files and prints the lexeme table, the lexemes grouped
//! by class, or per-class counts. Flags override `jslext.toml`.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{OutputFormat, ScanSettings},
    run_classes, run_classify, run_summary, run_table, ClassesArgs, ClassifyArgs, SummaryArgs,
    TableArgs,
};
use config::Config;
use error::{JslextError, Result};

/// jslext - tokenize JavaScript-like source
#[derive(Parser, Debug)]
#[command(name = "jslext")]
#[command(author = "jslex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize JavaScript-like source and report the lexemes", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JSLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JSLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JSLEXT_NO_COLOR")]
    no_color: bool,

    /// Exit with an error if scanning raises any warning
    #[arg(long, global = true)]
    strict: bool,

    /// Worker threads for multi-file runs
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jslext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the lexeme table of each file
    Table(TableCommand),

    /// Print each file's lexemes grouped by class
    Classes(ClassesCommand),

    /// Classify lexemes given on the command line
    Classify(ClassifyCommand),

    /// Print per-class token counts
    Summary(SummaryCommand),
}

/// Arguments for the table subcommand.
#[derive(Parser, Debug)]
struct TableCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the classes subcommand.
#[derive(Parser, Debug)]
struct ClassesCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the classify subcommand.
#[derive(Parser, Debug)]
struct ClassifyCommand {
    /// Lexemes to classify
    #[arg(required = true, allow_hyphen_values = true)]
    lexemes: Vec<String>,
}

/// Arguments for the summary subcommand.
#[derive(Parser, Debug)]
struct SummaryCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let settings = ScanSettings {
        jobs: config.resolve_jobs(cli.jobs)?,
        strict: cli.strict || config.strict,
    };

    execute_command(cli.command, settings, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that reports on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JslextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, settings: ScanSettings, config: Config) -> Result<()> {
    match command {
        Commands::Table(args) => run_table(TableArgs {
            files: args.files,
            format: args.format.unwrap_or(config.format),
            style: config.table,
            settings,
        }),
        Commands::Classes(args) => run_classes(ClassesArgs {
            files: args.files,
            settings,
        }),
        Commands::Classify(args) => run_classify(ClassifyArgs {
            lexemes: args.lexemes,
        }),
        Commands::Summary(args) => run_summary(SummaryArgs {
            files: args.files,
            format: args.format.unwrap_or(config.format),
            settings,
        }),
    }
}
