//! Session state owned by the UI controller.
//!
//! Everything the original script kept as module-level globals (the last
//! answer, the speech flag, per-heading expansion marks) lives here as
//! explicit state. All mutation happens through methods on [`AppState`];
//! the view layer only reads, which keeps the formatter and sectionizer
//! testable without a terminal.

use crate::format::{self, NoteLine};
use crate::section::{sectionize, NoteDocument};
use std::collections::HashSet;

#[derive(PartialEq, Eq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Shows the rendered notes with collapsible sections.
    Notes,
    /// Captures free-text question input.
    Question,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

/// Session state for one run of the client.
pub struct AppState {
    /// Rendered notes, partitioned into preamble and sections.
    pub notes: NoteDocument,
    /// Indices of sections currently expanded. Default collapsed; cleared
    /// wholesale whenever the notes are replaced, so no state leaks across
    /// renders.
    pub expanded: HashSet<usize>,
    /// Selected section in the notes pane.
    pub current_section_index: usize,
    /// Formatted lines of the most recent answer.
    pub answer: Vec<NoteLine>,
    /// Raw text of the most recent successful answer, consumed by speech
    /// output. Unchanged by "not found" and error notices.
    pub last_answer: String,
    /// Accumulates question text while the question view is active.
    pub question_buffer: String,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Whether speech output is currently playing, for the status bar.
    pub speaking: bool,
}

impl AppState {
    #[must_use]
    /// Initialises an empty session showing the notes view.
    pub fn new() -> Self {
        Self {
            notes: NoteDocument::default(),
            expanded: HashSet::new(),
            current_section_index: 0,
            answer: Vec::new(),
            last_answer: String::new(),
            question_buffer: String::new(),
            command_buffer: String::new(),
            message: None,
            current_view: View::Notes,
            speaking: false,
        }
    }

    /// Replace the notes pane with a fresh render of raw backend text.
    ///
    /// Formats and sectionizes in one pass, then discards all per-section
    /// expansion state along with the cursor position. The old render's
    /// sections no longer exist, so their state must not survive them.
    pub fn replace_notes(&mut self, raw: &str) {
        self.notes = sectionize(format::format(Some(raw)));
        self.expanded.clear();
        self.current_section_index = 0;
    }

    /// Store a fresh answer and render it into the answer pane.
    pub fn replace_answer(&mut self, raw: &str) {
        self.last_answer = raw.to_string();
        self.answer = format::format(Some(raw));
    }

    /// Show a notice in the answer pane without touching the stored answer.
    ///
    /// Used for "not found" and error messages, which must not become the
    /// text that speech output reads aloud.
    pub fn set_answer_notice(&mut self, notice: &str) {
        self.answer = format::format(Some(notice));
    }

    /// Flip the expansion state of one section.
    ///
    /// Toggling an even number of times returns the section to collapsed.
    /// Out-of-range indices are ignored.
    pub fn toggle_section(&mut self, index: usize) {
        if index >= self.notes.sections.len() {
            return;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    #[must_use]
    /// Whether a section's body is currently visible.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Move the cursor to the previous section.
    pub fn select_prev(&mut self) {
        if self.current_section_index > 0 {
            self.current_section_index -= 1;
        }
    }

    /// Move the cursor to the next section.
    pub fn select_next(&mut self) {
        if self.current_section_index + 1 < self.notes.sections.len() {
            self.current_section_index += 1;
        }
    }

    #[must_use]
    /// Plain-text rendition of the notes pane, for export.
    pub fn notes_text(&self) -> String {
        self.notes.plain_text()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
