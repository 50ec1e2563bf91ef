//! Casefile - interactive detective's notebook

use std::io;

use anyhow::Context;
use casefile::{CaseFile, CaseFileConfig, Prompt, Session};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "casefile")]
#[command(about = "Record clues and suspects, then find the most cited suspect")]
#[command(version)]
struct Args {
    /// Number of association table buckets
    #[arg(long, default_value_t = casefile::DEFAULT_BUCKET_COUNT, env = "CASEFILE_BUCKETS")]
    buckets: usize,

    /// Name buffer size in bytes, terminator included
    #[arg(long, default_value_t = casefile::DEFAULT_MAX_NAME_LEN, env = "CASEFILE_MAX_NAME_LEN")]
    max_name_len: usize,

    /// Do not keep a line history
    #[arg(long, env = "CASEFILE_NO_HISTORY")]
    no_history: bool,

    /// Enable debug logging
    #[arg(short, long, env = "CASEFILE_DEBUG")]
    debug: bool,
}

/// Line editor prompt backed by rustyline.
struct EditorPrompt {
    editor: DefaultEditor,
    history: bool,
}

impl Prompt for EditorPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if self.history && !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the menu
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("casefile={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CaseFileConfig::new()
        .with_bucket_count(args.buckets)
        .with_max_name_len(args.max_name_len);
    let case = CaseFile::with_config(config).context("cannot open case file")?;
    tracing::debug!(?config, "case file opened");

    let prompt = EditorPrompt {
        editor: DefaultEditor::new().context("cannot start line editor")?,
        history: !args.no_history,
    };

    let mut session = Session::new(case, prompt, io::stdout());
    session.run().context("session aborted")?;

    let (mut case, _) = session.into_parts();
    case.clear();
    Ok(())
}
