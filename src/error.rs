use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse simulation JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Could not allocate storage for {requested} processes: {source}")]
    AllocationError {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Failed to build simulation configuration: {0}")]
    ConversionError(#[from] ConversionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown scheduler type '{0}'. Expected 'FCFS' or 'RR'.")]
    UnknownSchedulerType(String),

    #[error("Invalid burst length '{0}'. Burst lengths must be non-negative integers.")]
    InvalidBurst(String),

    #[error("Round-Robin scheduling requires a quantum.")]
    MissingQuantum,

    #[error("No burst lengths supplied. Use a config file, --bursts or --random.")]
    MissingBursts,
}

pub type Result<T> = std::result::Result<T, Error>;
