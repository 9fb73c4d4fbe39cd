// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod cli;

use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands, SegmentFormat};
use mmca_config::{Config, PreamblePolicy};
use mmca_core::{Session, SessionEvent};
use mmca_model::{MemoryProvider, MockMemories, MockProvider};
use mmca_segment::{segment_with, Segment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        cli::print_completions(*shell);
        return Ok(());
    }

    let mut config = mmca_config::load(cli.config.as_deref())?;
    if cli.no_color || !io::stdout().is_terminal() {
        config.ui.color = false;
    }
    if cli.ascii {
        config.ui.ascii = true;
    }
    let config = Arc::new(config);

    match cli.command {
        Commands::Segment { file, format, policy } => {
            let policy = policy.map(PreamblePolicy::from).unwrap_or(config.segment.preamble);
            segment_cmd(file.as_deref(), format, policy, &config)
        }
        Commands::Chat { once, cite } => chat_cmd(once, cite, config).await,
        Commands::Memories { json } => memories_cmd(json, &config).await,
        Commands::ShowConfig => {
            println!("{}", serde_yaml::to_string(config.as_ref())?);
            Ok(())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Read a whole response from `file`, or from stdin for `None` / `-`.
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn segment_cmd(
    file: Option<&Path>,
    format: SegmentFormat,
    policy: PreamblePolicy,
    config: &Config,
) -> anyhow::Result<()> {
    let raw = read_input(file)?;
    let segments = segment_with(&raw, policy);
    let visible: Vec<&Segment> = segments.iter().filter(|s| !s.is_void()).collect();

    match format {
        SegmentFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
        SegmentFormat::Text => {
            let lines = mmca_tui::render_segments(&segments, config.ui.width, config.ui.ascii);
            mmca_tui::write_lines(&mut io::stdout().lock(), &lines, config.ui.color)?;
        }
    }
    Ok(())
}

async fn memories_cmd(as_json: bool, config: &Config) -> anyhow::Result<()> {
    let memories = MockMemories::from_config(&config.provider).list().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&memories)?);
        return Ok(());
    }

    for m in &memories {
        println!("{}  {}", m.timestamp.format("%Y-%m-%d %H:%M"), m.title);
        println!("    {}", m.summary);
    }
    Ok(())
}

async fn chat_cmd(once: Option<String>, cite: Option<String>, config: Arc<Config>) -> anyhow::Result<()> {
    let interactive = once.is_none() && io::stdin().is_terminal();
    let mut session = Session::new(
        config.clone(),
        Arc::new(MockProvider::from_config(&config.provider)),
        Arc::new(MockMemories::from_config(&config.provider)),
    );

    let greeting = session.state().messages.clone();
    for m in &greeting {
        let segments = session.segments_for(m);
        print_segments(&segments, &config)?;
    }

    if let Err(e) = session.load_memories().await {
        warn!(error = %e, "could not load memories");
    }

    let cited = match cite {
        Some(title) => match session.state().memory_by_title(&title) {
            Some(m) => Some(m.clone()),
            None => {
                let known: Vec<&str> = session.state().memories.iter().map(|m| m.title.as_str()).collect();
                anyhow::bail!("no memory titled {title:?}; known titles: {}", known.join(", "));
            }
        },
        None => None,
    };

    let (tx, rx) = mpsc::channel(16);
    let printer = tokio::spawn(print_events(rx, config.clone(), !interactive, interactive));

    if interactive {
        prompt_marker()?;
    }

    let single = once.is_some();
    let mut pending = once;
    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = if single {
            match pending.take() {
                Some(p) => p,
                None => break,
            }
        } else {
            match stdin.next_line().await.context("reading prompt")? {
                Some(l) => l,
                None => break,
            }
        };

        if session.submit_line(line, cited.as_ref(), &tx).await?.is_none() && interactive {
            prompt_marker()?;
        }
    }

    drop(tx);
    printer.await.context("event printer panicked")??;
    Ok(())
}

/// Print session events as they arrive.  Runs until the sender is dropped.
async fn print_events(
    mut rx: mpsc::Receiver<SessionEvent>,
    config: Arc<Config>,
    echo_user: bool,
    interactive: bool,
) -> anyhow::Result<()> {
    let show_busy = io::stderr().is_terminal();
    while let Some(ev) = rx.recv().await {
        match ev {
            SessionEvent::UserMessage(m) if echo_user => {
                let lines = mmca_tui::render_user(&m.content, config.ui.width);
                mmca_tui::write_lines(&mut io::stdout().lock(), &lines, config.ui.color)?;
                println!();
            }
            SessionEvent::UserMessage(_) => {}
            SessionEvent::Loading(on) if show_busy => {
                let mut err = io::stderr().lock();
                if on {
                    let busy = if config.ui.ascii { "* " } else { "⠿ " };
                    queue!(err, Print(format!("{busy}思考中…")))?;
                } else {
                    queue!(err, Clear(ClearType::CurrentLine), MoveToColumn(0))?;
                }
                err.flush()?;
            }
            SessionEvent::Loading(_) => {}
            // Already logged by the session; the fallback reply follows.
            SessionEvent::ProviderFailed(_) => {}
            SessionEvent::AgentReply { segments, .. } => {
                print_segments(&segments, &config)?;
                if interactive {
                    prompt_marker()?;
                }
            }
        }
    }
    Ok(())
}

fn print_segments(segments: &[Segment], config: &Config) -> anyhow::Result<()> {
    let lines = mmca_tui::render_segments(segments, config.ui.width, config.ui.ascii);
    let mut out = io::stdout().lock();
    mmca_tui::write_lines(&mut out, &lines, config.ui.color)?;
    writeln!(out)?;
    Ok(())
}

fn prompt_marker() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "> ")?;
    out.flush()
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
