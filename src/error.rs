//! Error taxonomy for failures surfaced to the user.
//!
//! Nothing here escapes the event loop: every variant ends up rendered as an
//! inline pane or status message. Missing user input (no file, empty
//! question) is not an error at all and is handled as a plain message.

use thiserror::Error;

/// Failures surfaced to the user as inline pane or status messages.
#[derive(Error, Debug)]
pub enum AppError {
    /// Filesystem failure while uploading or exporting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network or backend failure, including unparsable response bodies.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Speech engine missing or failed.
    #[error("Speech error: {0}")]
    Speech(String),
}

/// Convenience alias for Results with [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Speech("no speech input command configured".to_string());
        assert_eq!(
            err.to_string(),
            "Speech error: no speech input command configured"
        );
    }
}
