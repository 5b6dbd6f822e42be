use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{LaunchDashError, controller::OutputUpdate};

/// Writes one JSON line per chart output, to `file` or to stdout when no file is given.
pub fn write_snapshot(file: Option<&Path>, updates: &[OutputUpdate]) -> Result<(), LaunchDashError> {
    match file {
        Some(path) => {
            let snapshot_file =
                File::create(path).map_err(|e| LaunchDashError::WriterError { source: e })?;
            write_updates(BufWriter::new(snapshot_file), updates)
        }
        None => write_updates(io::stdout().lock(), updates),
    }
}

fn write_updates<W: Write>(mut writer: W, updates: &[OutputUpdate]) -> Result<(), LaunchDashError> {
    for update in updates {
        let line = serde_json::to_string(update)
            .map_err(|e| LaunchDashError::SnapshotSerializeError { source: e })?;
        writeln!(writer, "{}", line).map_err(|e| LaunchDashError::WriterError { source: e })?;
    }
    writer
        .flush()
        .map_err(|e| LaunchDashError::WriterError { source: e })
}
