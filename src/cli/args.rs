//! Command line argument parsing for the sitebot CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pipeline::service::Engine;

/// sitebot - a spelling-tolerant question answering assistant for a website
#[derive(Parser, Debug, Clone)]
#[command(name = "sitebot")]
#[command(about = "A spelling-tolerant question answering assistant for website content")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SitebotArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, env = "SITEBOT_CONFIG", value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Never contact the website; live answers use their static fallbacks
    #[arg(long)]
    pub offline: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SitebotArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer a single message
    Ask(AskArgs),

    /// Interactive chat session on stdin
    Chat(ChatArgs),

    /// Rebuild the corpus from the website
    Train,

    /// Run the HTTP server
    Serve(ServeArgs),

    /// Show corpus statistics
    Stats,

    /// Show how a message is normalized, classified and answered
    Analyze(AnalyzeArgs),
}

/// Arguments for answering one message
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The message; multiple words are joined with spaces
    #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Answering engine
    #[arg(short, long, default_value = "smart")]
    pub engine: EngineArg,
}

impl AskArgs {
    /// The message as one string.
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Answering engine
    #[arg(short, long, default_value = "smart")]
    pub engine: EngineArg,
}

/// Arguments for the HTTP server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    pub bind: String,

    /// Worker threads for the async runtime
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for analyzing a message
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// The message; multiple words are joined with spaces
    #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl AnalyzeArgs {
    /// The message as one string.
    pub fn text(&self) -> String {
        self.message.join(" ")
    }
}

/// Answering engines selectable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineArg {
    /// Spelling correction, topic answers and the trained corpus
    Smart,
    /// Keyword rules over the built-in knowledge base
    Simple,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Smart => Engine::Smart,
            EngineArg::Simple => Engine::Simple,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
