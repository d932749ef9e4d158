use super::{sectionize, NoteDocument, Section};
use crate::format::{format, NoteLine};

#[test]
fn test_worked_example_partitions_under_one_heading() {
    let lines = format(Some("# Topic\n- point one\n- point two\nmore text"));
    let document = sectionize(lines);

    assert!(document.preamble.is_empty());
    assert_eq!(
        document.sections,
        vec![Section {
            title: "Topic".to_string(),
            level: 1,
            body: vec![
                NoteLine::Bullet {
                    text: "point one".to_string(),
                    indented: false,
                },
                NoteLine::Bullet {
                    text: "point two".to_string(),
                    indented: false,
                },
                NoteLine::Text("more text".to_string()),
            ],
        }]
    );
}

#[test]
fn test_no_headings_means_everything_is_preamble() {
    let lines = format(Some("just text\n\nanother paragraph"));
    let document = sectionize(lines);

    assert!(document.sections.is_empty());
    assert_eq!(document.preamble.len(), 3);
}

#[test]
fn test_heading_without_content_yields_empty_section() {
    let lines = format(Some("# Empty\n# Also empty"));
    let document = sectionize(lines);

    assert_eq!(document.sections.len(), 2);
    assert!(document.sections[0].body.is_empty());
    assert!(document.sections[1].body.is_empty());
}

#[test]
fn test_content_runs_end_at_the_next_heading() {
    let lines = format(Some("# One\nalpha\n# Two\nbeta\ngamma"));
    let document = sectionize(lines);

    assert_eq!(document.sections.len(), 2);
    assert_eq!(
        document.sections[0].body,
        vec![NoteLine::Text("alpha".to_string())]
    );
    assert_eq!(
        document.sections[1].body,
        vec![
            NoteLine::Text("beta".to_string()),
            NoteLine::Text("gamma".to_string()),
        ]
    );
}

#[test]
fn test_preamble_precedes_first_heading() {
    let lines = format(Some("intro line\n# Topic\nbody"));
    let document = sectionize(lines);

    assert_eq!(
        document.preamble,
        vec![NoteLine::Text("intro line".to_string())]
    );
    assert_eq!(document.sections.len(), 1);
}

#[test]
fn test_subheadings_each_own_their_run() {
    let lines = format(Some("# Main\n• key\n## Sub\n• detail"));
    let document = sectionize(lines);

    assert_eq!(document.sections.len(), 2);
    assert_eq!(document.sections[0].level, 1);
    assert_eq!(document.sections[1].level, 2);
    assert_eq!(document.sections[1].body.len(), 1);
}

#[test]
fn test_repeat_sectionize_yields_equal_document() {
    let lines = format(Some("# A\none\n# B\ntwo"));
    let first = sectionize(lines.clone());
    let second = sectionize(lines);

    assert_eq!(first, second);
}

#[test]
fn test_empty_input_yields_empty_document() {
    let document = sectionize(Vec::new());

    assert!(document.is_empty());
    assert_eq!(document, NoteDocument::default());
}

#[test]
fn test_plain_text_covers_all_sections() {
    let lines = format(Some("# Topic\n- point\n# Other\ntext"));
    let document = sectionize(lines);
    let text = document.plain_text();

    assert!(text.contains("Topic"));
    assert!(text.contains("• point"));
    assert!(text.contains("Other"));
    assert!(text.contains("text"));
}
