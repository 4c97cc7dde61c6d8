//! Command-line interface for the attraction generator.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::XaiClient;
use crate::config::{
    validate_count, GeneratorConfig, DEFAULT_ATTRACTION_COUNT, DEFAULT_OUTPUT_FILENAME,
};
use crate::error::{GeneratorError, Result};
use crate::generator::generate_attractions;
use crate::output::{print_table, save_csv};

/// Austin Attractions - Generate a kid-friendly attractions dataset via xAI.
#[derive(Parser)]
#[command(name = "austin-attractions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate attractions, print them as a table, and save them to CSV.
    Generate {
        /// Number of attractions to request (default: 100)
        #[arg(short = 'n', long, default_value_t = DEFAULT_ATTRACTION_COUNT)]
        count: usize,

        /// Output CSV path (default: data.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
///
/// # Errors
/// Returns an error when the executed command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { count, output } => generate_command(count, output.as_deref()),
    }
}

/// Execute the generate command.
fn generate_command(count: usize, output: Option<&Path>) -> Result<()> {
    // Validate inputs before touching the network
    validate_count(count)?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME));

    // Catch a bad output location before spending tokens on a completion
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            if !parent.exists() {
                return Err(GeneratorError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Output directory does not exist: {}", parent.display()),
                )));
            }
            if !parent.is_dir() {
                return Err(GeneratorError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Output path is not a directory: {}", parent.display()),
                )));
            }
        }
    }

    println!(
        "{} {} kid-friendly attractions in Austin, TX",
        style("Generating").bold(),
        style(count).cyan()
    );

    // The credential check also happens before any network activity
    let config = GeneratorConfig::from_env()?;
    println!(
        "  API key found. Using model {} at {}",
        style(&config.model).green(),
        config.api_base_url
    );
    println!();

    let client = XaiClient::new(&config)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Waiting for chat completion...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = match generate_attractions(&client, count) {
        Ok(outcome) => outcome,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    println!(
        "  Parsed {} attractions from the response",
        style(outcome.received).green()
    );
    if outcome.is_underdelivered() {
        println!(
            "  {} received {} of {} requested attractions",
            style("Warning:").yellow().bold(),
            outcome.received,
            outcome.requested
        );
    }
    println!();

    print_table(&outcome.attractions);

    let saved = save_csv(&outcome.attractions, &output_path)?;
    println!();
    println!(
        "{} {} attractions to {}",
        style("Saved").green().bold(),
        outcome.attractions.len(),
        saved.display()
    );

    Ok(())
}
