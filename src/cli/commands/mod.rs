//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod config_cmd;
mod draft;
mod ocr;
mod serve;
mod speech;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, Config, LoadOptions, Settings};
use crate::services::Assistant;
use crate::utils::format_size;

#[derive(Parser)]
#[command(name = "nyayai")]
#[command(about = "Legal assistant prototype: document OCR, reply drafting and text-to-speech")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,
    },

    /// Extract text from a document image and draft a reply
    Ocr {
        /// PNG or JPEG image
        image: PathBuf,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Classify text and print the matching draft
    Classify {
        /// Text to classify (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print a canned draft (lists the kinds when none is given)
    Template {
        /// eviction-reply, deposit-refund-request or general
        kind: Option<String>,
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Synthesize speech to an MP3 file
    Tts {
        /// Text to speak (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// Language code (detected from the text when omitted)
        #[arg(short, long, conflicts_with = "regional")]
        lang: Option<String>,
        /// Speak in the regional language
        #[arg(long)]
        regional: bool,
    },

    /// Mock-transcribe an audio file and draft a reply
    Transcribe {
        /// MP3, WAV, WebM or M4A clip
        audio: PathBuf,
    },

    /// Show the effective configuration (secrets redacted)
    Config,
}

/// Read an input file, refusing anything over `limit` bytes.
async fn read_input(path: &Path, limit: usize) -> anyhow::Result<(Vec<u8>, Option<String>)> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
    if metadata.len() > limit as u64 {
        anyhow::bail!(
            "{} is {}, larger than the {} limit",
            path.display(),
            format_size(metadata.len()),
            format_size(limit as u64)
        );
    }
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string);
    Ok((bytes, filename))
}

fn build_assistant(config: &Config, settings: &Settings) -> anyhow::Result<Assistant> {
    Ok(Assistant::from_config(config, settings)?)
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
    };
    let (settings, config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&config, &settings, &bind).await,
        Commands::Ocr { image, json } => {
            let assistant = build_assistant(&config, &settings)?;
            ocr::cmd_ocr(&assistant, &settings, &image, json).await
        }
        Commands::Classify { text, json } => draft::cmd_classify(&config, &text.join(" "), json),
        Commands::Template { kind, json } => draft::cmd_template(&config, kind.as_deref(), json),
        Commands::Tts {
            text,
            output,
            lang,
            regional,
        } => {
            let assistant = build_assistant(&config, &settings)?;
            speech::cmd_tts(&assistant, &text.join(" "), &output, lang.as_deref(), regional).await
        }
        Commands::Transcribe { audio } => {
            let assistant = build_assistant(&config, &settings)?;
            speech::cmd_transcribe(&assistant, &settings, &audio).await
        }
        Commands::Config => config_cmd::cmd_config_show(&config, &settings),
    }
}
