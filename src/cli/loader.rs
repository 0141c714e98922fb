//! Loading records into a [`RecordStore`].

use crate::error::{CliError, CliResult};
use crate::store::RecordStore;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

/// Load every line of a file as a record.
pub fn load_from_file(path: &Path) -> CliResult<RecordStore> {
    let file = File::open(path)?;
    let store = load_lines(BufReader::new(file))?;
    info!(path = %path.display(), records = store.len(), "Loaded records from file");
    Ok(store)
}

/// Load every line of a reader as a record, verbatim.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_lines(mut reader: impl BufRead) -> CliResult<RecordStore> {
    let mut store = RecordStore::new();
    while let Some(line) = read_line(&mut reader)? {
        store.ingest(line);
    }
    Ok(store)
}

/// Prompt for a record count and then read that many trimmed lines.
pub fn load_interactive(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> CliResult<RecordStore> {
    writeln!(output, "Enter the number of people:")?;
    output.flush()?;
    let raw_count = read_line(input)?.unwrap_or_default();
    let count: usize = raw_count
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidCount(raw_count.trim().to_string()))?;

    writeln!(output, "Enter all people:")?;
    output.flush()?;
    let mut store = RecordStore::new();
    for read in 0..count {
        let line = read_line(input)?.ok_or(CliError::UnexpectedEof {
            expected: count,
            read,
        })?;
        store.ingest(line.trim());
    }

    info!(records = store.len(), "Loaded records from input");
    Ok(store)
}

/// Read one line without its line terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
pub(crate) fn read_line(input: &mut impl BufRead) -> CliResult<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
