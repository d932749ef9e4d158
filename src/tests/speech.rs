use super::{CommandEngine, SpeechInput, SpeechOutput};
use crate::error::AppError;

#[test]
fn test_unconfigured_engine_reports_speech_errors() {
    let mut engine = CommandEngine::new(Vec::new(), Vec::new());

    assert!(matches!(engine.transcribe(), Err(AppError::Speech(_))));
    assert!(matches!(engine.start("hello"), Err(AppError::Speech(_))));
}

#[test]
fn test_transcribe_returns_trimmed_stdout() {
    let mut engine = CommandEngine::new(
        vec!["echo".to_string(), "what is photosynthesis".to_string()],
        Vec::new(),
    );

    let transcript = engine.transcribe().unwrap();
    assert_eq!(transcript, "what is photosynthesis");
}

#[test]
fn test_output_toggle_stops_the_utterance() {
    // sleep stands in for a synthesiser: the text argument is its duration.
    let mut engine = CommandEngine::new(Vec::new(), vec!["sleep".to_string()]);

    assert!(!engine.is_speaking());

    engine.start("30").unwrap();
    assert!(engine.is_speaking());

    engine.stop();
    assert!(!engine.is_speaking());
}

#[test]
fn test_is_speaking_clears_once_the_engine_exits() {
    let mut engine = CommandEngine::new(Vec::new(), vec!["true".to_string()]);
    engine.start("spoken and done").unwrap();

    // The command exits on its own; polling must observe that without stop().
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while engine.is_speaking() {
        assert!(
            std::time::Instant::now() < deadline,
            "utterance never finished"
        );
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}

#[test]
fn test_stop_without_start_is_a_no_op() {
    let mut engine = CommandEngine::new(Vec::new(), Vec::new());

    engine.stop();
    assert!(!engine.is_speaking());
}
