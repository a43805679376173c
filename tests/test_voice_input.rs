use recipe_finder::config::VoiceConfig;
use recipe_finder::{EngineEvent, SearchBar, SpeechEngine, VoiceError, VoiceInput, VoiceState};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every call the adapter makes into the engine
#[derive(Default)]
struct EngineLog {
    calls: Vec<String>,
    settings: Option<VoiceConfig>,
}

struct ScriptedEngine {
    log: Rc<RefCell<EngineLog>>,
    fail_start: bool,
}

impl ScriptedEngine {
    fn new(log: Rc<RefCell<EngineLog>>) -> Self {
        ScriptedEngine {
            log,
            fail_start: false,
        }
    }
}

impl SpeechEngine for ScriptedEngine {
    fn configure(&mut self, settings: &VoiceConfig) {
        self.log.borrow_mut().settings = Some(settings.clone());
    }

    fn start(&mut self) -> Result<(), VoiceError> {
        self.log.borrow_mut().calls.push("start".to_string());
        if self.fail_start {
            Err(VoiceError::StartFailed("microphone busy".to_string()))
        } else {
            Ok(())
        }
    }

    fn stop(&mut self) {
        self.log.borrow_mut().calls.push("stop".to_string());
    }
}

fn supported() -> (VoiceInput<ScriptedEngine>, Rc<RefCell<EngineLog>>) {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let voice = VoiceInput::new(Some(ScriptedEngine::new(log.clone())), &VoiceConfig::default());
    (voice, log)
}

#[test]
fn test_unsupported_platform() {
    let mut voice: VoiceInput<ScriptedEngine> = VoiceInput::new(None, &VoiceConfig::default());

    assert!(!voice.is_supported());
    assert_eq!(voice.state(), VoiceState::Unsupported);
    assert_eq!(voice.error(), Some(&VoiceError::Unsupported));

    voice.start();
    assert_eq!(voice.state(), VoiceState::Unsupported);
    assert!(!voice.is_listening());
    assert_eq!(voice.error(), Some(&VoiceError::Unsupported));
}

#[test]
fn test_engine_is_configured_once() {
    let (voice, log) = supported();
    assert!(voice.is_supported());
    assert_eq!(voice.state(), VoiceState::Idle);

    let settings = log.borrow().settings.clone().unwrap();
    assert_eq!(settings.language, "en-US");
    assert!(settings.continuous);
    assert!(settings.interim_results);
}

#[test]
fn test_stop_while_idle_is_noop() {
    let (mut voice, log) = supported();
    voice.stop();

    assert_eq!(voice.state(), VoiceState::Idle);
    assert!(log.borrow().calls.is_empty());
}

#[test]
fn test_start_clears_previous_text_and_error() {
    let (mut voice, _log) = supported();
    voice.start();
    voice.handle_event(EngineEvent::Result(vec!["old words".to_string()]));
    voice.handle_event(EngineEvent::Error("network".to_string()));
    assert_eq!(voice.state(), VoiceState::Error);
    assert_eq!(voice.text(), "old words");

    voice.start();
    assert_eq!(voice.state(), VoiceState::Listening);
    assert_eq!(voice.text(), "");
    assert!(voice.error().is_none());
}

#[test]
fn test_results_overwrite_transcript() {
    let (mut voice, _log) = supported();
    voice.start();

    voice.handle_event(EngineEvent::Result(vec!["chick".to_string()]));
    assert_eq!(voice.text(), "chick");
    voice.handle_event(EngineEvent::Result(vec![
        "chicken".to_string(),
        " and rice".to_string(),
    ]));
    assert_eq!(voice.text(), "chicken and rice");
}

#[test]
fn test_end_event_returns_to_idle() {
    let (mut voice, log) = supported();
    voice.start();
    voice.handle_event(EngineEvent::End);

    assert_eq!(voice.state(), VoiceState::Idle);
    // Already stopped by the engine, so stop() must not call into it again
    voice.stop();
    assert_eq!(log.borrow().calls, vec!["start"]);
}

#[test]
fn test_error_event_stops_listening() {
    let (mut voice, _log) = supported();
    voice.start();
    voice.handle_event(EngineEvent::Error("no-speech".to_string()));

    assert!(!voice.is_listening());
    assert_eq!(voice.state(), VoiceState::Error);
    assert_eq!(
        voice.error().map(|e| e.to_string()).as_deref(),
        Some("Error occurred in recognition: no-speech")
    );
}

#[test]
fn test_start_failure_reports_error() {
    let log = Rc::new(RefCell::new(EngineLog::default()));
    let engine = ScriptedEngine {
        log: log.clone(),
        fail_start: true,
    };
    let mut voice = VoiceInput::new(Some(engine), &VoiceConfig::default());
    voice.start();

    assert!(!voice.is_listening());
    assert_eq!(voice.state(), VoiceState::Error);
    assert_eq!(
        voice.error().map(|e| e.to_string()).as_deref(),
        Some("Error starting speech recognition.")
    );
}

#[test]
fn test_drop_stops_listening_engine() {
    let (mut voice, log) = supported();
    voice.start();
    drop(voice);

    assert_eq!(log.borrow().calls, vec!["start", "stop"]);
}

#[test]
fn test_transcript_fills_search_bar() {
    let (mut voice, _log) = supported();
    let mut bar = SearchBar::new();

    voice.toggle();
    voice.handle_event(EngineEvent::Result(vec!["maple salmon".to_string()]));
    bar.apply_transcript(voice.text());
    voice.toggle();

    assert_eq!(bar.submit().as_deref(), Some("maple salmon"));
    voice.reset_text();
    assert_eq!(voice.text(), "");
}
