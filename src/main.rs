//! sqlassist - Context-aware SQL editing assistance
//!
//! Command-line host for the analysis engine. Reads a SQL buffer from a file
//! or stdin, runs one engine call, and prints the result as text or JSON.
//! The actual logic is in the library modules for better testability.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sqlassist::catalog::Catalog;
use sqlassist::completer::GhostText;
use sqlassist::config;
use sqlassist::report;
use sqlassist::sql::{self, CursorContext, Suggestion};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlassist", version, about = "Context-aware SQL autocomplete and spell checking")]
struct Cli {
    /// Settings file (defaults to ~/.sqlassist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the cursor context, completion candidates and ghost-text suffix
    Suggest {
        #[command(flatten)]
        input: Input,
        /// Cursor byte offset (defaults to end of buffer)
        #[arg(long)]
        cursor: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Report misspelled or inconsistently cased identifiers
    Check {
        #[command(flatten)]
        input: Input,
        /// Byte offset of the word being typed; it is never flagged
        #[arg(long)]
        exclude: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Accept a suggestion and print the resulting buffer
    Apply {
        #[command(flatten)]
        input: Input,
        /// Cursor byte offset (defaults to end of buffer)
        #[arg(long)]
        cursor: Option<usize>,
        /// Which suggestion to accept
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct Input {
    /// Table catalog (.toml or .json)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// SQL file to read; `-` or omitted reads stdin
    file: Option<PathBuf>,
}

#[derive(Serialize)]
struct SuggestOutput<'a> {
    context: &'a CursorContext,
    suggestions: &'a [Suggestion],
    ghost: Option<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => config::load_settings_from(path),
        None => config::load_settings(),
    }
    .context("Failed to load settings")?;

    match cli.command {
        Command::Suggest {
            input,
            cursor,
            json,
        } => {
            let (text, catalog) = read_input(&input)?;
            let cursor = cursor.unwrap_or_else(|| default_cursor(&text));
            let context = sql::resolve_context(&text, cursor, &catalog);
            let partial = sql::partial_word(&text, cursor);
            let suggestions = sql::generate_suggestions(&context, partial, &catalog);
            let ghost =
                GhostText::new().recompute(&suggestions, partial, settings.ghost_candidates);
            if json {
                let output = SuggestOutput {
                    context: &context,
                    suggestions: &suggestions,
                    ghost: ghost.as_deref(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let rendered =
                    report::render_suggestions(&context, &suggestions, ghost.as_deref());
                print!("{}", rendered);
            }
        }
        Command::Check {
            input,
            exclude,
            json,
        } => {
            let (text, catalog) = read_input(&input)?;
            let config = settings.spell_config();
            let spans = sql::check_spelling_with(&text, &catalog, exclude, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&spans)?);
            } else {
                print!("{}", report::render_spans(&text, &spans));
            }
        }
        Command::Apply {
            input,
            cursor,
            index,
            json,
        } => {
            let (text, catalog) = read_input(&input)?;
            let cursor = cursor.unwrap_or_else(|| default_cursor(&text));
            let suggestions = sql::suggest(&text, cursor, &catalog);
            let Some(choice) = suggestions.get(index) else {
                bail!(
                    "No suggestion at index {} ({} available)",
                    index,
                    suggestions.len()
                );
            };
            let applied = sql::apply_suggestion(&text, cursor, choice);
            if json {
                println!("{}", serde_json::to_string_pretty(&applied)?);
            } else {
                println!("{}", applied.text);
                eprintln!("cursor: {}", applied.cursor);
            }
        }
    }

    Ok(())
}

/// End of the buffer, ignoring the trailing newline editors add.
fn default_cursor(text: &str) -> usize {
    text.trim_end_matches(['\n', '\r']).len()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sqlassist=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: &Input) -> Result<(String, Catalog)> {
    let catalog = match &input.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::new(),
    };
    let text = match input.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok((text, catalog))
}
