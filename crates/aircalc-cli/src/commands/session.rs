//! `aircalc session`: line-oriented calculator on stdin.
//!
//! Each line is one command. Every quantity change goes through the core
//! session, so the configured host and export sinks see it immediately.

use std::{
    io::{self, BufRead},
    time::Instant,
};

use tracing::{info, instrument};

use aircalc_core::{application::CalculatorSession, domain::ServiceId, error::CalcError};

use crate::{
    cli::{OutputFormat, SessionArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    render, wiring,
};

const PROMPT: &str = "aircalc> ";

const HELP: &[(&str, &str)] = &[
    ("set ID VALUE", "set a quantity (0 removes the service)"),
    ("inc ID", "add one"),
    ("dec ID", "remove one"),
    ("clear", "reset every quantity"),
    ("show", "print the current summary"),
    ("help", "list commands"),
    ("quit", "leave the session"),
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Set(ServiceId, String),
    Inc(ServiceId),
    Dec(ServiceId),
    Clear,
    Show,
    Help,
    Quit,
}

#[instrument(skip_all)]
pub fn execute(args: SessionArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut session = wiring::build_session(&config)?;
    info!(session = %session.id(), "Session started");

    output.header(&format!("Aircalc session {}", session.id()))?;
    output.info("Type 'help' for commands, 'quit' to leave")?;

    let stdin = io::stdin();
    let context = LoopContext {
        output: &output,
        currency: &config.display.currency,
        prompt: !args.no_prompt,
    };
    run_loop(stdin.lock(), &mut session, &context)?;

    info!(session = %session.id(), total = %session.summary().total_amount, "Session ended");
    Ok(())
}

struct LoopContext<'a> {
    output: &'a OutputManager,
    currency: &'a str,
    prompt: bool,
}

/// Read commands until `quit` or end of input.
///
/// Bad lines are reported and skipped; only I/O failures end the loop early.
fn run_loop<R: BufRead>(
    reader: R,
    session: &mut CalculatorSession,
    ctx: &LoopContext<'_>,
) -> CliResult<()> {
    if ctx.prompt {
        ctx.output.prompt(PROMPT)?;
    }

    for line in reader.lines() {
        let line = line.with_cli_context(|| "reading session input")?;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = apply(command, session, ctx) {
                    match e {
                        CliError::IoError { .. } => return Err(e),
                        other => ctx.output.error(&other.to_string())?,
                    }
                }
            }
            Err(e) => ctx.output.error(&e.to_string())?,
        }

        if ctx.prompt {
            ctx.output.prompt(PROMPT)?;
        }
    }

    Ok(())
}

/// Parse one line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> CliResult<Option<SessionCommand>> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(None);
    };
    if head.starts_with('#') {
        return Ok(None);
    }

    let args: Vec<&str> = tokens.collect();
    let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("set", [id, value]) => SessionCommand::Set(parse_id(id)?, (*value).to_string()),
        ("inc" | "+", [id]) => SessionCommand::Inc(parse_id(id)?),
        ("dec" | "-", [id]) => SessionCommand::Dec(parse_id(id)?),
        ("clear", []) => SessionCommand::Clear,
        ("show", []) => SessionCommand::Show,
        ("help" | "?", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        ("set" | "inc" | "+" | "dec" | "-" | "clear" | "show" | "help" | "?" | "quit" | "exit", _) => {
            return Err(CliError::InvalidInput {
                message: format!("wrong number of arguments for '{head}' (see 'help')"),
                source: None,
            });
        }
        _ => {
            return Err(CliError::UnknownCommand {
                command: head.to_string(),
            });
        }
    };

    Ok(Some(command))
}

fn parse_id(raw: &str) -> CliResult<ServiceId> {
    raw.parse::<ServiceId>()
        .map_err(|e| CliError::Core(CalcError::from(e)))
}

fn apply(
    command: SessionCommand,
    session: &mut CalculatorSession,
    ctx: &LoopContext<'_>,
) -> CliResult<()> {
    match command {
        SessionCommand::Set(id, value) => {
            ensure_known(session, id)?;
            session.set_quantity_input(id, &value);
            show_total(session, ctx)
        }
        SessionCommand::Inc(id) => {
            ensure_known(session, id)?;
            session.increment(id);
            show_total(session, ctx)
        }
        SessionCommand::Dec(id) => {
            ensure_known(session, id)?;
            session.decrement(id);
            show_total(session, ctx)
        }
        SessionCommand::Clear => {
            session.clear();
            show_total(session, ctx)
        }
        SessionCommand::Show => show_summary(session, ctx),
        SessionCommand::Help => {
            for (usage, about) in HELP {
                ctx.output.print(&format!("  {usage:<14} {about}"))?;
            }
            Ok(())
        }
        // Handled by the loop.
        SessionCommand::Quit => Ok(()),
    }
}

fn ensure_known(session: &CalculatorSession, id: ServiceId) -> CliResult<()> {
    if session.catalog().contains(id) {
        Ok(())
    } else {
        Err(CliError::UnknownService { id: id.get() })
    }
}

fn show_total(session: &CalculatorSession, ctx: &LoopContext<'_>) -> CliResult<()> {
    let summary = session.summary();
    if ctx.output.format() == OutputFormat::Json {
        ctx.output.json(&summary)?;
        return Ok(());
    }
    let highlight = session.total_recently_changed(Instant::now());
    ctx.output
        .total(&render::total_line(&summary, ctx.currency), highlight)?;
    Ok(())
}

fn show_summary(session: &CalculatorSession, ctx: &LoopContext<'_>) -> CliResult<()> {
    let summary = session.summary();
    if ctx.output.format() == OutputFormat::Json {
        ctx.output.json(&summary)?;
        return Ok(());
    }
    ctx.output.print(&render::summary_table(&summary))?;
    ctx.output
        .total(&render::total_line(&summary, ctx.currency), false)?;
    Ok(())
}
