use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wordbag::config::Config;
use wordbag::corpus::Corpus;
use wordbag::model::vector::vectorize;
use wordbag::model::vocabulary::Vocabulary;
use wordbag::output::terminal;
use wordbag::pipeline::analysis;

/// wordbag: bag-of-words vocabulary and presence vectors for a small corpus.
///
/// Loads text files, strips punctuation and case, builds a sorted vocabulary
/// and reports which tokens one document has that another lacks.
#[derive(Parser)]
#[command(name = "wordbag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and print the comparison report
    Report {
        /// Input text files, one document each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Label of the first document to compare (default: first file)
        #[arg(long, requires = "second")]
        first: Option<String>,

        /// Label of the second document to compare (default: second file)
        #[arg(long, requires = "first")]
        second: Option<String>,

        /// Print the full analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Print the corpus vocabulary
    Vocab {
        /// Input text files, one document each
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show which vocabulary tokens one document contains
    Vector {
        /// Input text files, one document each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Label of the document to encode (file name without .txt)
        #[arg(long)]
        label: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordbag=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Report {
            files,
            first,
            second,
            json,
        } => {
            let pair = first.as_deref().zip(second.as_deref());
            let analysis =
                analysis::run(&files, pair).context("bag-of-words analysis failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                terminal::display_document_previews(
                    analysis.corpus.documents(),
                    config.preview_chars,
                );
                terminal::display_distinguishers(&analysis.distinguishers, config.example_count);
            }
        }

        Commands::Vocab { files } => {
            let corpus = Corpus::from_files(&files)?;
            let vocabulary = Vocabulary::build(&corpus);
            terminal::display_vocabulary(&vocabulary);
        }

        Commands::Vector { files, label } => {
            let corpus = Corpus::from_files(&files)?;
            let text = corpus
                .get(&label)
                .ok_or_else(|| wordbag::Error::UnknownDocument(label.clone()))?;
            let vocabulary = Vocabulary::build(&corpus);
            let vector = vectorize(text, &vocabulary);
            info!(label = %label, present = vector.ones(), "Encoded document");
            terminal::display_vector(&label, &vector, &vocabulary);
        }
    }

    Ok(())
}
