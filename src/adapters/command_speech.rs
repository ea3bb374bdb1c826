//! Speech output through the host's speech command.
//!
//! On macOS this is `say`; elsewhere the first of `espeak-ng`, `espeak` or
//! `spd-say` found on `PATH`. When none is installed every call is a no-op.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::SpeechError;
use crate::i18n::Language;
use crate::traits::{SpeechOutput, Utterance};

/// Words per minute at rate 1.0
const BASE_WPM: f32 = 175.0;

/// Speech engines we know how to drive, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEngine {
    Say,
    EspeakNg,
    Espeak,
    SpdSay,
}

impl SpeechEngine {
    fn program(self) -> &'static str {
        match self {
            SpeechEngine::Say => "say",
            SpeechEngine::EspeakNg => "espeak-ng",
            SpeechEngine::Espeak => "espeak",
            SpeechEngine::SpdSay => "spd-say",
        }
    }

    fn candidates() -> &'static [SpeechEngine] {
        if cfg!(target_os = "macos") {
            &[SpeechEngine::Say]
        } else {
            &[SpeechEngine::EspeakNg, SpeechEngine::Espeak, SpeechEngine::SpdSay]
        }
    }

    /// Build the argument list for one utterance.
    pub fn args(self, utterance: &Utterance) -> Vec<String> {
        let wpm = (BASE_WPM * utterance.rate.clamp(0.5, 2.0)).round() as i32;
        let voice = voice_code(utterance.language);
        match self {
            SpeechEngine::Say => vec!["-r".into(), wpm.to_string(), utterance.text.clone()],
            SpeechEngine::EspeakNg | SpeechEngine::Espeak => vec![
                "-v".into(),
                voice.into(),
                "-s".into(),
                wpm.to_string(),
                utterance.text.clone(),
            ],
            SpeechEngine::SpdSay => {
                // spd-say takes a relative rate in -100..=100
                let relative = ((utterance.rate - 1.0) * 100.0).clamp(-100.0, 100.0) as i32;
                vec![
                    "-l".into(),
                    voice.into(),
                    "-r".into(),
                    relative.to_string(),
                    utterance.text.clone(),
                ]
            }
        }
    }
}

fn voice_code(language: Language) -> &'static str {
    match language {
        Language::En => "en",
        Language::Hi => "hi",
        Language::Mr => "mr",
    }
}

/// Speech output that shells out to a platform speech command.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    engine: Option<(SpeechEngine, PathBuf)>,
}

impl CommandSpeech {
    /// Probe `PATH` for a supported engine.
    pub fn detect() -> Self {
        let engine = std::env::var_os("PATH").and_then(|paths| {
            let dirs: Vec<PathBuf> = std::env::split_paths(&paths).collect();
            SpeechEngine::candidates()
                .iter()
                .find_map(|engine| find_in(&dirs, engine.program()).map(|p| (*engine, p)))
        });

        match &engine {
            Some((e, path)) => tracing::info!(engine = ?e, path = %path.display(), "Speech output available"),
            None => tracing::info!("No speech engine found, read-aloud disabled"),
        }

        Self { engine }
    }

    /// A speech output that never speaks.
    pub fn disabled() -> Self {
        Self { engine: None }
    }

    pub fn engine(&self) -> Option<SpeechEngine> {
        self.engine.as_ref().map(|(e, _)| *e)
    }

    /// Start the speech command for one utterance without waiting for it.
    pub fn try_speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let (engine, program) = self.engine.as_ref().ok_or(SpeechError::NoEngine)?;

        let mut child = Command::new(program)
            .args(engine.args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: engine.program().to_string(),
                source,
            })?;

        // Reap in the background so we never leave zombies behind
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

fn find_in(dirs: &[PathBuf], program: &str) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl SpeechOutput for CommandSpeech {
    fn speak(&self, utterance: &Utterance) {
        match self.try_speak(utterance) {
            Ok(()) | Err(SpeechError::NoEngine) => {}
            Err(e) => tracing::debug!(error = %e, "Speech command failed"),
        }
    }

    fn is_available(&self) -> bool {
        self.engine.is_some()
    }
}
