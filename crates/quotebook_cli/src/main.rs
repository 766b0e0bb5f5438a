//! Quotebook command-line entry point.
//!
//! # Responsibility
//! - Browse the built-in quotes by topic from a terminal.
//! - Keep a tiny probe command to verify `quotebook_core` linkage.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;
use quotebook_core::{
    BrowseSession, BrowseView, Quote, QuoteService, TopicQuery, DEFAULT_RESULT_LIMIT,
};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "quotebook", about = "Browse quotes by topic", version)]
struct Cli {
    /// Log level for file logging (trace|debug|info|warn|error).
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging stays off when unset.
    #[arg(long, global = true, env = "QUOTEBOOK_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available topics.
    Topics,
    /// Print quotes for one topic.
    Find {
        topic: String,
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },
    /// Interactive session reading topics from stdin.
    Browse,
    /// Print core ping and version.
    Probe,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| quotebook_core::default_log_level().to_string());
        quotebook_core::init_logging(&level, log_dir).context("failed to initialize logging")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Topics => topics(&mut out)?,
        Command::Find { topic, limit } => find(&topic, limit, &mut out)?,
        Command::Browse => browse(io::stdin().lock(), &mut out)?,
        Command::Probe => probe(&mut out)?,
    }
    Ok(())
}

fn topics(out: &mut impl Write) -> io::Result<()> {
    for topic in QuoteService::builtin().all_topics() {
        writeln!(out, "{topic}")?;
    }
    Ok(())
}

fn find(topic: &str, limit: usize, out: &mut impl Write) -> anyhow::Result<()> {
    let query = TopicQuery::parse(topic)?.with_limit(limit);
    let service = QuoteService::builtin();
    let quotes = service.find(&query);
    debug!(
        "event=cli_find module=cli status=ok limit={} hits={}",
        query.limit,
        quotes.len()
    );

    if query.limit == 0 {
        writeln!(out, "Limit is 0; no quotes shown for \"{}\"", query.topic)?;
    } else if quotes.is_empty() {
        writeln!(out, "No quotes found for \"{}\"", query.topic)?;
    } else {
        writeln!(out, "Quotes about \"{}\"", query.topic)?;
        for quote in quotes {
            write_quote(out, quote)?;
        }
    }
    Ok(())
}

fn probe(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "quotebook_core ping={}", quotebook_core::ping())?;
    writeln!(out, "quotebook_core version={}", quotebook_core::core_version())
}

fn browse(input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut session = BrowseSession::new(QuoteService::builtin());
    writeln!(
        out,
        "Popular topics: {}",
        session.suggested_topics().join(", ")
    )?;
    writeln!(out, "Enter a topic, :topics, :clear or :quit.")?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => {
                debug!("event=cli_browse module=cli status=quit");
                break;
            }
            ":topics" => {
                writeln!(out, "{}", session.suggested_topics().join(", "))?;
                continue;
            }
            ":clear" => session.clear(),
            _ => {
                session.set_input(line.as_str());
                if !session.submit() {
                    continue;
                }
            }
        }
        render(&session, out)?;
    }
    Ok(())
}

fn render<S: quotebook_core::QuoteSource>(
    session: &BrowseSession<S>,
    out: &mut impl Write,
) -> io::Result<()> {
    match session.view() {
        BrowseView::Idle => writeln!(out, "Ready to discover quotes?"),
        BrowseView::NoResults { topic } => writeln!(
            out,
            "No quotes found for \"{topic}\". Try one of the popular topics."
        ),
        BrowseView::Results { topic, quotes } => {
            writeln!(out, "Quotes about \"{topic}\"")?;
            for quote in quotes {
                write_quote(out, quote)?;
            }
            Ok(())
        }
    }
}

fn write_quote(out: &mut impl Write, quote: &Quote) -> io::Result<()> {
    writeln!(out, "  \"{}\"  [{}]", quote.text(), quote.topic())
}
