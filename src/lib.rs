//! noteum: a terminal client for an AI study-notes backend.
//!
//! The backend turns uploaded documents into loosely structured study notes
//! and answers free-text questions about them. This crate renders those
//! notes as collapsible sections in a TUI, with the formatting and
//! sectioning kept as pure data transformations so they can be tested
//! without a terminal.
#![allow(clippy::multiple_crate_versions)]

/// Session state owned by the UI controller.
pub mod app_state;
/// HTTP client for the notes backend.
pub mod backend;
/// Configuration loading with defaults.
pub mod config;
/// Error taxonomy for failures surfaced to the user.
pub mod error;
/// Plain-text export with page-width wrapping.
pub mod export;
/// Raw note text to typed display lines.
pub mod format;
/// Grouping display lines into collapsible sections.
pub mod section;
/// Speech input/output behind trait seams.
pub mod speech;
/// Rendering of application state into ratatui widgets.
pub mod ui;
