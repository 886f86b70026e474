//! Command-line interface for gmd-extract.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::LEVEL_STRING_KEY;
use crate::error::Result;
use crate::extractor::{extract_to_file, extract_to_string};
use crate::level::Level;

/// gmd-extract - Decode the compressed level string stored in .gmd files.
#[derive(Parser)]
#[command(name = "gmd-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the decoded level string to a file.
    Extract {
        /// Path to the .gmd XML document
        input: PathBuf,

        /// Path to write the decoded text to
        output: PathBuf,

        /// Dictionary key holding the encoded level string
        #[arg(short, long, default_value = LEVEL_STRING_KEY)]
        key: String,
    },

    /// Decode the level string and print a summary without writing a file.
    Inspect {
        /// Path to the .gmd XML document
        input: PathBuf,

        /// Dictionary key holding the encoded level string
        #[arg(short, long, default_value = LEVEL_STRING_KEY)]
        key: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output, key } => extract_command(&input, &output, &key),
        Commands::Inspect { input, key } => inspect_command(&input, &key),
    }
}

/// Execute the extract command.
fn extract_command(input: &Path, output: &Path, key: &str) -> Result<()> {
    println!(
        "{} {} (key {})",
        style("Extracting").bold(),
        style(input.display()).cyan(),
        style(key).green()
    );

    let written = extract_to_file(input, output, key)?;

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        written.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(input: &Path, key: &str) -> Result<()> {
    let text = extract_to_string(input, key)?;
    let level = Level::parse(&text);

    println!(
        "{} {} (key {})",
        style("Level in").bold(),
        style(input.display()).cyan(),
        style(key).green()
    );
    println!("  Decoded size: {} bytes", text.len());
    println!("  Header entries: {}", level.header.len());
    println!("  Objects: {}", style(level.objects.len()).green());

    if let Some(last) = level
        .objects
        .iter()
        .map(|o| o.x)
        .max_by(|a, b| a.total_cmp(b))
    {
        println!("  Rightmost object at x = {last}");
    }

    Ok(())
}
