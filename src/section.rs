//! Grouping formatted lines into collapsible sections.
//!
//! A section is the maximal run of lines that follow one heading, up to the
//! next heading or end of input. The original renderer built these groups by
//! mutating live elements and marking each processed heading to stay
//! idempotent; here the pass is a pure function over data, so re-rendering
//! the same input can never double-wrap anything.

use crate::format::NoteLine;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Collapsible grouping of the lines owned by one heading.
pub struct Section {
    /// Heading text shown on the toggle row.
    pub title: String,
    /// Nesting depth of the heading (1 for top-level).
    pub level: usize,
    /// Lines owned by this section, up to the next heading.
    pub body: Vec<NoteLine>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A fully partitioned document: preamble plus ordered sections.
pub struct NoteDocument {
    /// Lines before the first heading, always visible.
    pub preamble: Vec<NoteLine>,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl NoteDocument {
    #[must_use]
    /// Whether the document holds no content at all.
    pub fn is_empty(&self) -> bool {
        self.preamble.is_empty() && self.sections.is_empty()
    }

    #[must_use]
    /// Plain-text rendition of the whole document, for export and speech.
    ///
    /// Covers every section regardless of its current expansion state, so
    /// the exported artifact does not depend on transient UI state.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(&line.plain());
            out.push('\n');
        }
        for section in &self.sections {
            out.push_str(&section.title);
            out.push('\n');
            for line in &section.body {
                out.push_str(&line.plain());
                out.push('\n');
            }
        }
        out
    }
}

#[must_use]
/// Partition formatted lines into a preamble and collapsible sections.
///
/// Every heading yields exactly one section owning the run of lines up to
/// the next heading; a heading with no following content yields an empty,
/// still-togglable section. Input with no headings lands entirely in the
/// preamble.
pub fn sectionize(lines: Vec<NoteLine>) -> NoteDocument {
    let mut document = NoteDocument::default();

    for line in lines {
        match line {
            NoteLine::Heading { text, level } => {
                document.sections.push(Section {
                    title: text,
                    level,
                    body: Vec::new(),
                });
            }
            other => {
                if let Some(section) = document.sections.last_mut() {
                    section.body.push(other);
                } else {
                    document.preamble.push(other);
                }
            }
        }
    }

    document
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
