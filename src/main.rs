//! noteum: a terminal client for an AI study-notes backend.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use noteum::speech::{SpeechInput, SpeechOutput};
use noteum::{app_state, backend, config, export, speech, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long the event loop waits for a key before redrawing, so the
/// speaking indicator clears when the synthesiser exits on its own.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "noteum")]
#[command(about = "Terminal client for an AI study-notes backend", long_about = None)]
struct Args {
    /// Document to upload with :u (PDF or image, per the backend)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Override the backend base URL from noteum.toml
    #[arg(long, value_name = "URL")]
    backend: Option<String>,

    /// Load configuration from this path instead of ./noteum.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Upload the document immediately on startup
    #[arg(long)]
    upload: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load(args.config.as_deref());

    // Override config with command line args
    if let Some(url) = args.backend {
        cfg.backend_url = url;
    }

    let client = backend::BackendClient::new(&cfg.backend_url).map_err(io::Error::other)?;
    let mut engine = speech::CommandEngine::new(
        cfg.speech_input_command.clone(),
        cfg.speech_output_command.clone(),
    );

    let mut app = app_state::AppState::new();
    app.message = Some(match args.file {
        Some(ref path) => format!(":u uploads {}", path.display()),
        None => ":u <file> uploads a document".to_string(),
    });

    run_tui(app, &cfg, &client, &mut engine, args.file, args.upload)
}

fn run_tui(
    mut app: app_state::AppState,
    cfg: &config::Config,
    client: &backend::BackendClient,
    engine: &mut speech::CommandEngine,
    file: Option<PathBuf>,
    upload_on_start: bool,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &mut app,
        cfg,
        client,
        engine,
        file,
        upload_on_start,
    );

    engine.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
    client: &backend::BackendClient,
    engine: &mut speech::CommandEngine,
    mut file: Option<PathBuf>,
    upload_on_start: bool,
) -> io::Result<()> {
    if upload_on_start {
        if let Some(path) = file.clone() {
            app.message = Some("Processing file...".to_string());
            terminal.draw(|f| ui::draw(f, app))?;
            do_upload(app, client, &path);
        }
    }

    loop {
        app.speaking = engine.is_speaking();
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app.current_view {
                app_state::View::Notes => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.select_prev(),
                    KeyCode::Down => app.select_next(),
                    KeyCode::Enter => {
                        app.toggle_section(app.current_section_index);
                    }
                    KeyCode::Char('a') => {
                        app.current_view = app_state::View::Question;
                        app.question_buffer.clear();
                        app.message = None;
                    }
                    KeyCode::Char('s') => toggle_speech(app, engine),
                    KeyCode::Char(':') => {
                        app.current_view = app_state::View::Command;
                        app.command_buffer.clear();
                        app.message = None;
                    }
                    _ => {}
                },
                app_state::View::Question => match key.code {
                    KeyCode::Enter => {
                        let question = app.question_buffer.trim().to_string();
                        app.current_view = app_state::View::Notes;
                        // Empty questions are a silent no-op, not an error.
                        if !question.is_empty() {
                            app.message = Some("Thinking...".to_string());
                            terminal.draw(|f| ui::draw(f, app))?;
                            do_ask(app, client, &question);
                        }
                        app.question_buffer.clear();
                    }
                    KeyCode::Tab => match engine.transcribe() {
                        Ok(transcript) => app.question_buffer = transcript,
                        Err(e) => app.message = Some(e.to_string()),
                    },
                    KeyCode::Backspace => {
                        app.question_buffer.pop();
                    }
                    KeyCode::Esc => {
                        app.current_view = app_state::View::Notes;
                        app.question_buffer.clear();
                    }
                    KeyCode::Char(c) => {
                        app.question_buffer.push(c);
                    }
                    _ => {}
                },
                app_state::View::Command => match key.code {
                    KeyCode::Char(c) => {
                        app.command_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.command_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let cmd = app.command_buffer.clone();
                        app.current_view = app_state::View::Notes;
                        app.command_buffer.clear();

                        let mut parts = cmd.split_whitespace();
                        match parts.next() {
                            Some("u") => {
                                if let Some(arg) = parts.next() {
                                    file = Some(PathBuf::from(arg));
                                }
                                if let Some(path) = file.clone() {
                                    app.message = Some("Processing file...".to_string());
                                    terminal.draw(|f| ui::draw(f, app))?;
                                    do_upload(app, client, &path);
                                } else {
                                    app.message = Some("Please select a file first!".to_string());
                                }
                            }
                            Some("e") => {
                                let target = parts
                                    .next()
                                    .map_or_else(|| cfg.export_path.clone(), str::to_string);
                                match export::export(
                                    &app.notes_text(),
                                    cfg.page_width,
                                    Path::new(&target),
                                ) {
                                    Ok(written) => {
                                        app.message =
                                            Some(format!("Exported to {}", written.display()));
                                    }
                                    Err(e) => app.message = Some(format!("Error exporting: {e}")),
                                }
                            }
                            Some("q") => return Ok(()),
                            Some(other) => {
                                app.message = Some(format!("Unknown command: {other}"));
                            }
                            None => {}
                        }
                    }
                    KeyCode::Esc => {
                        app.current_view = app_state::View::Notes;
                        app.command_buffer.clear();
                    }
                    _ => {}
                },
            }
        }
    }
}

/// Upload a document and replace the notes pane with the result.
///
/// Backend failures and missing `notes` fields both degrade to status
/// messages; nothing propagates past here.
fn do_upload(app: &mut app_state::AppState, client: &backend::BackendClient, path: &Path) {
    match client.upload(path) {
        Ok(response) => match response.notes {
            Some(notes) => {
                app.replace_notes(&notes);
                app.message = Some(format!(
                    "Notes ready ({} sections)",
                    app.notes.sections.len()
                ));
            }
            None => app.message = Some("No notes found.".to_string()),
        },
        Err(e) => app.message = Some(format!("Error processing file: {e}")),
    }
}

/// Submit a question and render the answer pane with the result.
fn do_ask(app: &mut app_state::AppState, client: &backend::BackendClient, question: &str) {
    match client.ask(question) {
        Ok(response) => match response.answer {
            Some(answer) => {
                app.replace_answer(&answer);
                app.message = None;
            }
            None => app.set_answer_notice("No answer found."),
        },
        Err(e) => {
            app.set_answer_notice("Error getting answer.");
            app.message = Some(e.to_string());
        }
    }
}

/// Start speaking the stored answer, or stop if already speaking.
fn toggle_speech(app: &mut app_state::AppState, engine: &mut speech::CommandEngine) {
    if engine.is_speaking() {
        engine.stop();
        app.speaking = false;
        return;
    }

    if app.last_answer.trim().is_empty() {
        app.message = Some("No response to speak yet.".to_string());
        return;
    }

    match engine.start(&app.last_answer) {
        Ok(()) => app.speaking = true,
        Err(e) => app.message = Some(e.to_string()),
    }
}
