//! Voice input on top of a platform speech-to-text engine.
//!
//! The adapter owns the engine and tracks listening state, the live
//! transcript and the last error. Engines push their callbacks back in
//! through [`VoiceInput::handle_event`].

use crate::config::VoiceConfig;
use crate::error::VoiceError;
use log::{debug, error};

/// A platform speech recognizer
pub trait SpeechEngine {
    /// Apply language and result settings before first use
    fn configure(&mut self, _settings: &VoiceConfig) {}

    fn start(&mut self) -> Result<(), VoiceError>;

    fn stop(&mut self);
}

/// Callbacks delivered by a running engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Best transcript of every recognized segment so far
    Result(Vec<String>),
    /// The engine stopped on its own
    End,
    /// The engine failed; carries the engine's reason code
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Unsupported,
    Idle,
    Listening,
    Error,
}

pub struct VoiceInput<E: SpeechEngine> {
    engine: Option<E>,
    listening: bool,
    text: String,
    error: Option<VoiceError>,
}

impl<E: SpeechEngine> VoiceInput<E> {
    /// Wrap the engine found at startup, or `None` when the platform has none
    pub fn new(engine: Option<E>, settings: &VoiceConfig) -> Self {
        match engine {
            Some(mut engine) => {
                engine.configure(settings);
                VoiceInput {
                    engine: Some(engine),
                    listening: false,
                    text: String::new(),
                    error: None,
                }
            }
            None => VoiceInput {
                engine: None,
                listening: false,
                text: String::new(),
                error: Some(VoiceError::Unsupported),
            },
        }
    }

    /// Whether voice affordances should be offered at all
    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn state(&self) -> VoiceState {
        if self.engine.is_none() {
            VoiceState::Unsupported
        } else if self.listening {
            VoiceState::Listening
        } else if self.error.is_some() {
            VoiceState::Error
        } else {
            VoiceState::Idle
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&VoiceError> {
        self.error.as_ref()
    }

    pub fn start(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if self.listening {
            return;
        }

        self.text.clear();
        self.error = None;
        match engine.start() {
            Ok(()) => {
                debug!("Speech recognition started");
                self.listening = true;
            }
            Err(e) => {
                error!("Error starting speech recognition: {:?}", e);
                self.error = Some(VoiceError::StartFailed(e.to_string()));
            }
        }
    }

    pub fn stop(&mut self) {
        if !self.listening {
            return;
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.stop();
        }
        self.listening = false;
    }

    /// Start when idle, stop when listening
    pub fn toggle(&mut self) {
        if self.listening {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Result(segments) => {
                self.text = segments.concat();
            }
            EngineEvent::End => {
                self.listening = false;
            }
            EngineEvent::Error(reason) => {
                error!("Speech recognition error: {}", reason);
                self.error = Some(VoiceError::Recognition(reason));
                self.listening = false;
            }
        }
    }

    pub fn reset_text(&mut self) {
        self.text.clear();
    }
}

impl<E: SpeechEngine> Drop for VoiceInput<E> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingEngine {
        starts: u32,
        stops: u32,
    }

    impl SpeechEngine for CountingEngine {
        fn start(&mut self) -> Result<(), VoiceError> {
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_toggle() {
        let mut voice = VoiceInput::new(Some(CountingEngine::default()), &VoiceConfig::default());
        voice.toggle();
        assert_eq!(voice.state(), VoiceState::Listening);
        voice.toggle();
        assert_eq!(voice.state(), VoiceState::Idle);

        let engine = voice.engine.as_ref().unwrap();
        assert_eq!(engine.starts, 1);
        assert_eq!(engine.stops, 1);
    }

    #[test]
    fn test_start_while_listening_does_not_restart() {
        let mut voice = VoiceInput::new(Some(CountingEngine::default()), &VoiceConfig::default());
        voice.start();
        voice.handle_event(EngineEvent::Result(vec!["pasta".to_string()]));
        voice.start();

        assert_eq!(voice.engine.as_ref().unwrap().starts, 1);
        assert_eq!(voice.text(), "pasta");
    }
}
