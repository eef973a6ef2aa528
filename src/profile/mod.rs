pub mod args;
pub mod errors;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::form::FormState;
use errors::ProfileError;

/// Remembered defaults that sit outside any one session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub claude_path: Option<String>,
    pub working_dir: Option<String>,
}

/// One profile file: optional settings plus named sessions in file order.
#[derive(Debug, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub settings: ProfileSettings,

    #[serde(default, rename = "session")]
    pub sessions: IndexMap<String, FormState>,
}

impl Profile {
    /// Select a session by name, or the first one in the file when no name
    /// was given.
    pub fn session(&self, name: Option<&str>, file: &str) -> Result<&FormState, ProfileError> {
        match name {
            Some(n) => self
                .sessions
                .get(n)
                .ok_or_else(|| ProfileError::SessionNotFound(n.to_string())),
            None => self
                .sessions
                .values()
                .next()
                .ok_or_else(|| ProfileError::NoSessions(file.to_string())),
        }
    }
}

/// Load a profile, picking the parser from the file extension.
pub fn load_profile(path: &str) -> Result<Profile, ProfileError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let contents = fs::read_to_string(path)
        .map_err(|e| ProfileError::FileError(format!("failed to read {}: {}", path, e)))?;

    match extension {
        "toml" => toml::from_str(&contents)
            .map_err(|e| ProfileError::ParseError(format!("{}: {}", path, e))),
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|e| ProfileError::ParseError(format!("{}: {}", path, e))),
        "json" => serde_json::from_str(&contents)
            .map_err(|e| ProfileError::ParseError(format!("{}: {}", path, e))),
        other => Err(ProfileError::UnsupportedFormat(other.to_string())),
    }
}
