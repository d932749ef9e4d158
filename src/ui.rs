//! The UI renders the application state into something visible.
//!
//! The draw function lays out three panes: the notes list with collapsible
//! sections, the answer pane, and a help/input bar whose content depends on
//! the active view. The view layer only reads [`AppState`]; every toggle or
//! navigation happens through state methods in the event loop.

use crate::app_state::{AppState, View};
use crate::format::NoteLine;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders all panes from the current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_notes(f, app, chunks[0]);
    draw_answer(f, app, chunks[1]);
    draw_bottom_bar(f, app, chunks[2]);
}

/// Turn one formatted line into a display line, indented under its section.
fn note_line(line: &NoteLine) -> Line<'static> {
    match line {
        // Headings never appear inside section bodies, but the answer pane
        // renders formatted lines flat, so they are styled here too.
        NoteLine::Heading { text, .. } => Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        NoteLine::Bullet { text, indented } => {
            let pad = if *indented { "     " } else { "  " };
            Line::from(format!("{pad}• {text}"))
        }
        NoteLine::Text(text) => Line::from(text.clone()),
        NoteLine::Blank => Line::from(""),
    }
}

fn draw_notes(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    for line in &app.notes.preamble {
        items.push(ListItem::new(note_line(line)));
    }

    for (i, section) in app.notes.sections.iter().enumerate() {
        let glyph = if app.is_expanded(i) { "▾" } else { "▸" };
        let indent = "  ".repeat(section.level.saturating_sub(1));

        let style = if i == app.current_section_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{indent}{glyph} {}", section.title),
            style,
        ))));

        if app.is_expanded(i) {
            for line in &section.body {
                let mut rendered = note_line(line);
                rendered.spans.insert(0, Span::raw(format!("{indent}  ")));
                items.push(ListItem::new(rendered));
            }
        }
    }

    if items.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "No notes yet",
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let title = format!("Notes ({} sections)", app.notes.sections.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_answer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let lines: Vec<Line> = app.answer.iter().map(note_line).collect();

    let title = if app.speaking {
        "Answer (speaking)"
    } else {
        "Answer"
    };

    let answer = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(answer, area);
}

fn draw_bottom_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let (text, title) = match app.current_view {
        View::Question => (format!("{}█", app.question_buffer), "Ask (Tab: Mic)"),
        View::Command => (format!(":{}", app.command_buffer), "Command"),
        View::Notes => {
            let text = app.message.clone().unwrap_or_else(|| {
                "↑/↓: Sections | Enter: Expand/Collapse | a: Ask | s: Speak | :u Upload | :e Export | q: Quit"
                    .to_string()
            });
            (text, "Help")
        }
    };

    let bar = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(bar, area);
}
