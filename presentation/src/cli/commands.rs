//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for research results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full structured result as JSON
    Json,
}

/// CLI arguments for deep-research
#[derive(Parser, Debug)]
#[command(name = "deep-research")]
#[command(author, version, about = "Deep research client - drive a remote research tool server")]
#[command(long_about = r#"
deep-research talks to a research tool server over JSON-RPC (HTTP POST).

Commands:
  research   One composite call that plans, searches and writes the report
  workflow   Four explicit steps: plan, SERP queries, search, final report
  batch      Composite research for several genes, one at a time

Configuration files are loaded from (in priority order):
1. Environment        MCP_SERVER_URL, ACCESS_PASSWORD, MCP_CLIENT_TIMEOUT, OUTPUT_DIR
2. --config <path>    Explicit config file
3. ./deep-research.toml   Project-level config
4. ~/.config/deep-research/config.toml   Global config

Example:
  deep-research research talB "Escherichia coli" --focus molecular_function
  deep-research workflow "Role of talB in the pentose phosphate pathway"
  deep-research batch --jobs genes.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Report language (overrides config)
    #[arg(long, global = true, value_name = "LANG")]
    pub language: Option<String>,

    /// Maximum search results per task (overrides config)
    #[arg(long, global = true, value_name = "N")]
    pub max_result: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Composite research on one gene (single tool call)
    Research {
        /// Gene symbol, e.g. talB
        gene: String,

        /// Organism, e.g. "Escherichia coli"
        organism: String,

        /// Research focus area (can be specified multiple times)
        #[arg(long, value_name = "AREA")]
        focus: Vec<String>,

        /// Specific aspect to cover (can be specified multiple times)
        #[arg(long, value_name = "ASPECT")]
        aspect: Vec<String>,

        /// Disease context
        #[arg(long, value_name = "TEXT")]
        disease: Option<String>,

        /// Experimental approach
        #[arg(long, value_name = "TEXT")]
        approach: Option<String>,

        /// Additional free-form instructions
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,

        /// Do not write the report or data files
        #[arg(long)]
        no_save: bool,
    },

    /// Four-step research workflow on a free-text query
    Workflow {
        /// Research question
        query: String,
    },

    /// Composite research over a list of genes
    Batch {
        /// Job file (.toml or .json); built-in example genes when omitted
        #[arg(long, value_name = "PATH")]
        jobs: Option<PathBuf>,

        /// Seconds to wait between jobs (overrides config)
        #[arg(long, value_name = "SECS")]
        cooldown: Option<u64>,
    },
}
