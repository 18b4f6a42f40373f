//! `.env` support for the API key.

use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load the nearest `.env` (working directory, then parents) into the process
/// environment. Variables already set are kept. Returns the file loaded, or
/// `None` when there is no `.env` at all.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load a specific env file; variables already set are kept.
pub fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}
