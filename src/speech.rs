//! Speech input/output behind trait seams.
//!
//! The client only specifies the contract it expects from speech engines:
//! input produces a single transcript per activation, output speaks a text
//! and is toggled start/stop by a single control. [`CommandEngine`]
//! implements both by delegating to external commands from the config, so
//! any recogniser or synthesiser with a CLI can be plugged in.

use crate::error::{AppError, Result};
use std::process::{Child, Command, Stdio};

/// Produces a single transcript string per activation.
pub trait SpeechInput {
    /// Capture one utterance and return its transcript.
    ///
    /// # Errors
    ///
    /// Returns an error if no engine is configured or the engine fails.
    fn transcribe(&mut self) -> Result<String>;
}

/// Speaks text, toggled start/stop by a single control.
pub trait SpeechOutput {
    /// Begin speaking the given text, replacing any current utterance.
    ///
    /// # Errors
    ///
    /// Returns an error if no engine is configured or it cannot be spawned.
    fn start(&mut self, text: &str) -> Result<()>;

    /// Stop the current utterance if one is playing.
    fn stop(&mut self);

    /// Whether an utterance is currently playing.
    fn is_speaking(&mut self) -> bool;
}

/// Engine delegating both directions to configured external commands.
pub struct CommandEngine {
    input_command: Vec<String>,
    output_command: Vec<String>,
    child: Option<Child>,
}

impl CommandEngine {
    #[must_use]
    /// Build an engine from command vectors (program followed by arguments).
    ///
    /// An empty vector means that direction is unconfigured; activating it
    /// yields a speech error the UI shows as a status message.
    pub fn new(input_command: Vec<String>, output_command: Vec<String>) -> Self {
        Self {
            input_command,
            output_command,
            child: None,
        }
    }
}

impl SpeechInput for CommandEngine {
    fn transcribe(&mut self) -> Result<String> {
        let (program, args) = self
            .input_command
            .split_first()
            .ok_or_else(|| AppError::Speech("no speech input command configured".to_string()))?;

        let output = Command::new(program).args(args).output()?;
        if !output.status.success() {
            return Err(AppError::Speech(format!(
                "{program} exited with {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl SpeechOutput for CommandEngine {
    fn start(&mut self, text: &str) -> Result<()> {
        self.stop();

        let (program, args) = self
            .output_command
            .split_first()
            .ok_or_else(|| AppError::Speech("no speech output command configured".to_string()))?;

        let child = Command::new(program)
            .args(args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.child = Some(child);

        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        match self.child {
            Some(ref mut child) => match child.try_wait() {
                // Still running until it reports an exit status.
                Ok(None) => true,
                _ => {
                    self.child = None;
                    false
                }
            },
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/speech.rs"]
mod tests;
