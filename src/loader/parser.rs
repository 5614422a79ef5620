use serde::de::DeserializeOwned;
use std::fs;

use crate::domain::process::Ticks;
use crate::error::{ConversionError, Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are automatically converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

/// Parses a list of burst lengths separated by commas and/or whitespace.
///
/// Lines starting with `#` are ignored.
pub fn parse_bursts(input: &str) -> std::result::Result<Vec<Ticks>, ConversionError> {
    input
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Ticks>().map_err(|_| ConversionError::InvalidBurst(token.to_string())))
        .collect()
}

/// Reads a plain-text burst file, see [`parse_bursts`].
pub fn parse_bursts_file(file_path: &str) -> Result<Vec<Ticks>> {
    let data = fs::read_to_string(file_path)?;
    Ok(parse_bursts(&data)?)
}
