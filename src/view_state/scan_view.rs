//! Leaf scan screen state

use std::path::PathBuf;
use std::time::Duration;

use crate::models::crop::ScanResult;
use crate::widgets::InputBox;

/// Simulated analysis time.
pub const SCAN_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, PartialEq)]
pub enum ScanPhase {
    Idle,
    /// Typing the path of an image to "upload"
    ChoosingFile(InputBox),
    Scanning,
    Done(ScanResult),
}

#[derive(Debug, Clone)]
pub struct ScanView {
    pub phase: ScanPhase,
    /// Image the current result was produced from, if uploaded
    pub uploaded: Option<PathBuf>,
    /// The current result has been saved or queued
    pub saved: bool,
    /// Bumped on every scan start; stale completions carry an old value
    pub session: u64,
}

impl Default for ScanView {
    fn default() -> Self {
        Self {
            phase: ScanPhase::Idle,
            uploaded: None,
            saved: false,
            session: 0,
        }
    }
}

impl ScanView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning)
    }

    pub fn result(&self) -> Option<&ScanResult> {
        match &self.phase {
            ScanPhase::Done(result) => Some(result),
            _ => None,
        }
    }

    /// Begin a scan and return its session id.
    pub fn start(&mut self) -> u64 {
        self.session += 1;
        self.phase = ScanPhase::Scanning;
        self.saved = false;
        self.session
    }

    pub fn open_file_prompt(&mut self) {
        if !self.is_scanning() {
            self.phase = ScanPhase::ChoosingFile(InputBox::new());
        }
    }

    /// Finish a scan. Returns false for a stale session.
    pub fn finish(&mut self, session: u64, result: ScanResult) -> bool {
        if session != self.session || !self.is_scanning() {
            return false;
        }
        self.phase = ScanPhase::Done(result);
        true
    }

    /// "Scan again": back to the idle instructions.
    pub fn reset(&mut self) {
        self.session += 1;
        self.phase = ScanPhase::Idle;
        self.uploaded = None;
        self.saved = false;
    }
}
