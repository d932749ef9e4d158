//! Pure note formatting: raw backend text to typed display lines.
//!
//! The backend returns note text with optional heading markers (`#` at line
//! start), bullet markers (`- ` or `• `, indentation meaning nesting) and
//! plain paragraphs. Each line is classified exactly once, ahead of
//! rendering, so the view layer stays dumb and the transformation is a
//! total function testable without a terminal.

/// One classified line of formatted notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteLine {
    /// Collapsible topic heading.
    Heading {
        /// Heading text without the marker.
        text: String,
        /// Number of `#` characters in the marker (1 for top-level).
        level: usize,
    },
    /// Bullet point.
    Bullet {
        /// Bullet text without the marker.
        text: String,
        /// Whether leading whitespace preceded the marker.
        indented: bool,
    },
    /// Plain paragraph text.
    Text(String),
    /// Paragraph break from an empty line.
    Blank,
}

impl NoteLine {
    #[must_use]
    /// Plain-text rendition of the line, bullet glyphs restored.
    pub fn plain(&self) -> String {
        match self {
            Self::Heading { text, .. } => text.clone(),
            Self::Bullet { text, indented } => {
                if *indented {
                    format!("   • {text}")
                } else {
                    format!("• {text}")
                }
            }
            Self::Text(text) => text.clone(),
            Self::Blank => String::new(),
        }
    }
}

#[must_use]
/// Classify raw note text into display lines.
///
/// Total over all inputs: empty or absent input yields an empty vector, and
/// malformed or mixed markers degrade to plain text rather than failing.
/// Bullet detection runs before the plain-text fallback so a bullet line is
/// never classified twice. Ordering of input lines is preserved exactly.
pub fn format(raw: Option<&str>) -> Vec<NoteLine> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }

    raw.lines().map(classify).collect()
}

fn classify(line: &str) -> NoteLine {
    if let Some(heading) = parse_heading(line) {
        return heading;
    }

    let trimmed = line.trim_start();
    let indented = trimmed.len() < line.len();
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("• "))
    {
        return NoteLine::Bullet {
            text: rest.to_string(),
            indented,
        };
    }

    if line.trim().is_empty() {
        NoteLine::Blank
    } else {
        NoteLine::Text(line.to_string())
    }
}

/// Recognise an ATX-style heading anchored at line start.
///
/// The marker must be followed by a space; a bare run of hashes is ordinary
/// text, matching how the backend writes its topic lines.
fn parse_heading(line: &str) -> Option<NoteLine> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some(NoteLine::Heading {
        text: rest.trim().to_string(),
        level: hashes,
    })
}

#[cfg(test)]
#[path = "tests/format.rs"]
mod tests;
