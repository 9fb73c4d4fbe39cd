// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use mmca_config::PreamblePolicy;
use std::path::PathBuf;

/// Output format for `mmca segment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SegmentFormat {
    /// Styled cards, one per segment.
    #[default]
    Text,
    /// JSON array of `{ "label": ..., "text": ... }` objects.
    Json,
}

/// Preamble handling override for `mmca segment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Show only the untagged preamble, labelled Agent.
    Override,
    /// Show the preamble, then the tagged parts.
    Keep,
}

impl From<PolicyArg> for PreamblePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Override => PreamblePolicy::Override,
            PolicyArg::Keep => PreamblePolicy::Keep,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "mmca",
    about = "Render multi-model [A]/[B]/[C]/[Agent] tagged responses",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use plain ASCII icons and bars.
    /// Can also be forced with MMCA_ASCII=1.
    #[arg(long, global = true, env = "MMCA_ASCII")]
    pub ascii: bool,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a tagged response into labelled segments.
    /// Reads FILE, or stdin when FILE is omitted or "-".
    Segment {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Output format (text | json)
        #[arg(long, value_enum, default_value = "text")]
        format: SegmentFormat,
        /// Override the configured preamble handling
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Chat with the simulated multi-model agent.
    /// Prompts are read line by line from stdin unless --once is given.
    Chat {
        /// Send a single prompt and exit
        #[arg(long, value_name = "PROMPT")]
        once: Option<String>,
        /// Cite the memory with this title in every prompt
        #[arg(long, value_name = "TITLE")]
        cite: Option<String>,
    },
    /// List the memories of past conversations
    Memories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration and exit
    ShowConfig,
    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "mmca", &mut std::io::stdout());
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
