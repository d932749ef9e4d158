//! Plain-text export of rendered notes.
//!
//! The document collaborator's contract is simple: take the pane's plain
//! text, wrap it to a fixed page width, and write the result as a
//! downloadable artifact. Wrapping happens at word boundaries with overlong
//! words split hard at the width.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Wrap `text` to `width` columns, write it to `path`, and return the path
/// of the written artifact.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export(text: &str, width: usize, path: &Path) -> io::Result<PathBuf> {
    fs::write(path, wrap(text, width))?;
    Ok(path.to_path_buf())
}

#[must_use]
/// Wrap each input line at word boundaries to at most `width` columns.
///
/// Blank lines survive as paragraph breaks. Words longer than the page
/// width are split at the width rather than overflowing.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            out.push('\n');
            continue;
        }
        wrap_line(&mut out, line, width);
    }

    out
}

fn wrap_line(out: &mut String, line: &str, width: usize) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > width {
            out.push_str(&current);
            out.push('\n');
            current.clear();
            current_len = 0;
        }

        if word_len > width {
            for ch in word.chars() {
                if current_len == width {
                    out.push_str(&current);
                    out.push('\n');
                    current.clear();
                    current_len = 0;
                }
                current.push(ch);
                current_len += 1;
            }
        } else {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
    }

    if !current.is_empty() {
        out.push_str(&current);
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
