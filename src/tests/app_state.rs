use super::AppState;

const NOTES: &str = "# Topic\n- point one\n- point two\nmore text\n# Other\nbody";

#[test]
fn test_replace_notes_renders_collapsed_sections() {
    let mut app = AppState::new();
    app.replace_notes(NOTES);

    assert_eq!(app.notes.sections.len(), 2);
    assert!(!app.is_expanded(0));
    assert!(!app.is_expanded(1));
}

#[test]
fn test_toggle_parity() {
    let mut app = AppState::new();
    app.replace_notes(NOTES);

    app.toggle_section(0);
    assert!(app.is_expanded(0), "odd toggles leave the section visible");

    app.toggle_section(0);
    assert!(!app.is_expanded(0), "even toggles return it to hidden");

    for _ in 0..5 {
        app.toggle_section(1);
    }
    assert!(app.is_expanded(1));
}

#[test]
fn test_toggle_out_of_range_is_ignored() {
    let mut app = AppState::new();
    app.replace_notes(NOTES);

    app.toggle_section(99);
    assert!(app.expanded.is_empty());
}

#[test]
fn test_expansion_state_does_not_survive_re_render() {
    let mut app = AppState::new();
    app.replace_notes(NOTES);
    app.toggle_section(0);
    app.toggle_section(1);

    app.replace_notes("# Fresh\ncontent");

    assert!(app.expanded.is_empty());
    assert_eq!(app.current_section_index, 0);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut app = AppState::new();
    app.replace_notes(NOTES);

    app.select_prev();
    assert_eq!(app.current_section_index, 0);

    app.select_next();
    app.select_next();
    app.select_next();
    assert_eq!(app.current_section_index, 1);
}

#[test]
fn test_replace_answer_stores_raw_text_for_speech() {
    let mut app = AppState::new();
    app.replace_answer("# Answer\n- short");

    assert_eq!(app.last_answer, "# Answer\n- short");
    assert_eq!(app.answer.len(), 2);
}

#[test]
fn test_answer_notice_leaves_stored_answer_alone() {
    let mut app = AppState::new();
    app.replace_answer("the real answer");

    app.set_answer_notice("No answer found.");

    assert_eq!(app.last_answer, "the real answer");
    assert_eq!(app.answer.len(), 1);
}

#[test]
fn test_notes_text_reflects_current_render() {
    let mut app = AppState::new();
    assert!(app.notes_text().is_empty());

    app.replace_notes(NOTES);
    let text = app.notes_text();

    assert!(text.contains("Topic"));
    assert!(text.contains("• point one"));
    assert!(text.contains("more text"));
}
