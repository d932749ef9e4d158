//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a noteum.toml, and if present we load
//! settings from there. This provides the backend URL, export preferences
//! and the speech engine commands.

use facet::Facet;
use std::fs;
use std::path::Path;

#[derive(Facet, Clone)]
/// User preferences loaded from noteum.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "http://localhost:5000".to_string())]
    /// Base URL of the notes backend.
    pub backend_url: String,
    #[facet(default = 80)]
    /// Page width in columns for exported documents.
    pub page_width: usize,
    #[facet(default = "noteum_notes.txt".to_string())]
    /// Default path for exported notes.
    pub export_path: String,
    #[facet(default = Vec::new())]
    /// Speech-to-text command (program then arguments). Expected to record
    /// one utterance and print the transcript on stdout.
    pub speech_input_command: Vec<String>,
    #[facet(default = vec!["espeak".to_string()])]
    /// Text-to-speech command (program then arguments). The text to speak
    /// is appended as the final argument.
    pub speech_output_command: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from the given path, or from noteum.toml in the
    /// working directory when none is given. Missing files and unparsable
    /// content fall back to the defaults.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new("noteum.toml"));
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
