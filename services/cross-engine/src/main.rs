use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use cross_engine::events::Record;
use cross_engine::{protocol, CrossEngine};

/// Default actions file read from the working directory
const DEFAULT_ACTIONS_PATH: &str = "actions.txt";

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only result records
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ACTIONS_PATH.to_string());

    let stdin = io::stdin();
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(stdin.lock())
    } else {
        let file =
            File::open(&path).with_context(|| format!("failed to open actions file {path}"))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = CrossEngine::new();

    for line in reader.lines() {
        let line = line.context("failed to read action line")?;
        let records = match protocol::parse(&line) {
            Ok(action) => engine.action(action),
            Err(failure) => vec![Record::from(failure)],
        };
        for record in records {
            writeln!(out, "{record}").context("failed to write result record")?;
        }
    }

    Ok(())
}
