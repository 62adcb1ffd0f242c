use crate::parser::{self, LogEvent};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read log file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of one load pass: the surviving events in file order plus line
/// accounting for the lines that were dropped.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub events: Vec<LogEvent>,
    pub total_lines: usize,
    pub skipped_lines: usize,
}

impl LoadOutcome {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Read the whole file and parse every line into the ordered event
/// collection.
///
/// Lines that do not match the expected shape, or whose timestamp is not a
/// real instant, are dropped without any per-line diagnostic; only the
/// skip counter records them. Failing to open or read the file is the one
/// fatal condition and surfaces as [`LoadError`] with the path named.
pub fn load_events(path: &Path) -> Result<LoadOutcome, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);
    let lines: Vec<String> =
        reader
            .lines()
            .collect::<Result<_, _>>()
            .map_err(|source| LoadError::Read {
                path: path.display().to_string(),
                source,
            })?;

    let total_lines = lines.len();
    // Parsing is pure and per-line, so it fans out; the indexed collect
    // keeps file order.
    let events: Vec<LogEvent> = lines
        .par_iter()
        .map(|line| parser::parse_line(line))
        .collect::<Vec<Option<LogEvent>>>()
        .into_iter()
        .flatten()
        .collect();
    let skipped_lines = total_lines - events.len();

    Ok(LoadOutcome {
        events,
        total_lines,
        skipped_lines,
    })
}
