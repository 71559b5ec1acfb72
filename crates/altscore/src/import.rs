//! Loading raw profiles from files: a single JSON object or a CSV batch with one applicant
//! per row.

use crate::scoring::{fields, RawProfile};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read profile input: {}", err),
            ProfileImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
            ProfileImportError::Json(err) => {
                write!(f, "profile JSON must be a single object: {}", err)
            }
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Csv(err) => Some(err),
            ProfileImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProfileImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ProfileImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn json_from_path<P: AsRef<Path>>(path: P) -> Result<RawProfile, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::json_from_reader(file)
    }

    pub fn json_from_reader<R: Read>(reader: R) -> Result<RawProfile, ProfileImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn csv_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawProfile>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::csv_from_reader(file)
    }

    /// Header names are profile field names. Empty cells are treated as absent and every
    /// other cell is kept as text, leaving numeric coercion to the calculator.
    pub fn csv_from_reader<R: Read>(reader: R) -> Result<Vec<RawProfile>, ProfileImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for column in csv_reader.headers()?.iter() {
            if !fields::ALL.contains(&column) {
                warn!(column, "unrecognised profile column will be ignored by the calculator");
            }
        }

        let mut profiles = Vec::new();
        for row in csv_reader.deserialize::<HashMap<String, String>>() {
            let mut profile = RawProfile::new();
            for (field, cell) in row? {
                if !cell.is_empty() {
                    profile.insert(field, Value::String(cell));
                }
            }
            profiles.push(profile);
        }

        Ok(profiles)
    }
}
