// Error types for launchdash

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum LaunchDashError {
    // Errors while loading the launch records dataset
    #[snafu(display("Launch dataset not found: {path}"))]
    DatasetNotFound { path: String },
    #[snafu(display("Error opening launch dataset"))]
    DatasetOpenError { source: io::Error },
    #[snafu(display("Error reading launch dataset"))]
    DatasetReadError { source: csv::Error },
    #[snafu(display("Launch dataset is missing required column \"{column}\""))]
    MissingColumn { column: String },
    #[snafu(display("Row {row}: launch site is empty"))]
    MissingLaunchSite { row: usize },
    #[snafu(display("Row {row}: invalid payload mass \"{value}\""))]
    InvalidPayloadMass { row: usize, value: String },
    #[snafu(display("Row {row}: invalid outcome class \"{value}\", expected 0 or 1"))]
    InvalidOutcomeClass { row: usize, value: String },
    #[snafu(display("Launch dataset contains no records"))]
    EmptyDataset,

    // Dashboard wiring errors
    #[snafu(display("A callback is already registered for output {output}"))]
    DuplicateOutput { output: String },

    // Config management errors
    #[snafu(display("Could not find application config directory"))]
    NoConfigDir,
    #[snafu(display("Error reading config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Invalid config value: {field} - {reason}"))]
    InvalidConfig { field: String, reason: String },

    // Server errors
    #[snafu(display("Could not bind dashboard server to {address}"))]
    ServerBindError { address: String, source: io::Error },
    #[snafu(display("Dashboard server stopped unexpectedly"))]
    ServerError { source: io::Error },
    #[snafu(display("Could not start async runtime"))]
    RuntimeError { source: io::Error },

    // Errors for the snapshot writer
    #[snafu(display("Error writing chart snapshot"))]
    WriterError { source: io::Error },
    #[snafu(display("Error serializing chart snapshot"))]
    SnapshotSerializeError { source: serde_json::Error },
}
