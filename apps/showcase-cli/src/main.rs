use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{
    domain::RoutineKind,
    error::{ErrorReport, ShowcaseError},
};
use showcase::{
    dedup::parse_records, reduce_records, run_routine, ConsoleDisplay, ConsoleStream,
    DisplaySurface, FileDisplay, LogSink, MemorySink, Tee, TracingSink,
};
use tracing::info;

mod config;

use config::{load_settings, prepare_display, DisplayTarget};

#[derive(Parser, Debug)]
#[command(name = "showcase", about = "Runs the language showcase routines")]
struct Cli {
    /// `stdout` or `dir:<path>`; overrides the settings file.
    #[arg(long, global = true)]
    display: Option<String>,
    /// Echo every log event as a JSON line once the command finishes.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    ReduceFruits {
        /// JSON array of `{ "name", "type" }` records to use instead of the fixed list.
        #[arg(long)]
        records: Option<PathBuf>,
    },
    CreateDoggo,
    ClassSyntax,
    CreateDoggoWithPrototype,
    UserAction,
    All,
}

impl Command {
    fn routines(&self) -> Vec<RoutineKind> {
        match self {
            Self::ReduceFruits { .. } => vec![RoutineKind::ReduceFruits],
            Self::CreateDoggo => vec![RoutineKind::CreateDoggo],
            Self::ClassSyntax => vec![RoutineKind::ClassSyntax],
            Self::CreateDoggoWithPrototype => vec![RoutineKind::CreateDoggoWithPrototype],
            Self::UserAction => vec![RoutineKind::UserAction],
            Self::All => RoutineKind::ALL.to_vec(),
        }
    }
}

async fn run_command<D, S>(command: &Command, display: D, sink: S) -> Result<()>
where
    D: DisplaySurface,
    S: LogSink,
{
    if let Command::ReduceFruits {
        records: Some(path),
    } = command
    {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records from '{}'", path.display()))?;
        let records = parse_records(&raw)
            .with_context(|| format!("invalid records in '{}'", path.display()))?;
        let kinds = reduce_records(&records, display, sink)?;
        info!(kinds = kinds.len(), "reduced custom records");
        return Ok(());
    }

    for kind in command.routines() {
        run_routine(kind, &display, &sink).await?;
    }
    Ok(())
}

/// With `--json`, stdout carries only JSON lines, so console renders move to stderr.
fn console_for(json: bool) -> ConsoleDisplay {
    if json {
        ConsoleDisplay::new(ConsoleStream::Stderr)
    } else {
        ConsoleDisplay::new(ConsoleStream::Stdout)
    }
}

fn build_display(target: DisplayTarget, json: bool) -> Box<dyn DisplaySurface> {
    match target {
        DisplayTarget::Stdout => Box::new(console_for(json)),
        DisplayTarget::Dir(dir) => {
            info!(dir = %dir.display(), "rendering to files");
            Box::new(FileDisplay::new(dir))
        }
    }
}

/// Runs `command` and, when `json` is set, writes every log event to `out`
/// followed by an error report if the command failed.
async fn run_session<D, W>(command: &Command, display: D, json: bool, out: &mut W) -> Result<()>
where
    D: DisplaySurface,
    W: Write,
{
    let events = MemorySink::new();
    let sink = Tee(TracingSink, events.clone());
    let outcome = run_command(command, display, &sink).await;

    if json {
        for event in events.events() {
            writeln!(out, "{}", event.to_json_line()?)?;
        }
        if let Some(failure) = outcome
            .as_ref()
            .err()
            .and_then(|err| err.downcast_ref::<ShowcaseError>())
        {
            let report = serde_json::json!({
                "type": "error",
                "payload": ErrorReport::from(failure),
            });
            writeln!(out, "{report}")?;
        }
    }

    outcome
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let raw_display = cli.display.as_deref().unwrap_or(&settings.display);
    let display = build_display(prepare_display(raw_display)?, cli.json);

    let mut stdout = std::io::stdout();
    run_session(&cli.command, display.as_ref(), cli.json, &mut stdout).await
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
