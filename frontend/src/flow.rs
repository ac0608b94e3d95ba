//! Upload flow state machine.
//!
//! ```text
//!            submit (valid)            progress >= 100
//!   Idle ───────────────────▶ Uploading ────────────────┬──▶ Success
//!    ▲                                                  │        │
//!    │         reset ("Try Again")                      ▼        │
//!    └──────────────────────────────────────────────── Error     │
//!    ▲                                                           │
//!    └────────────── start_over ("Upload Another Model") ────────┘
//! ```
//!
//! [`UploadFlow`] holds every piece of page state. It never touches the
//! DOM or timers, so the whole lifecycle can be driven from tests.

use crate::config::PROGRESS_COMPLETE;
use crate::services::simulator::{UploadOutcome, UploadSource};
use crate::types::{
    AppError, AppResult, ModelMetadata, ModelType, SelectedFile, UploadSummary,
    MSG_FILES_REQUIRED, MSG_NAME_REQUIRED, MSG_UPLOAD_REJECTED,
};

/// Lifecycle phase of one upload attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    /// Simulated transfer running; `progress` is in `[0, 100)`.
    Uploading { progress: f64 },
    Success,
    Error,
}

impl UploadState {
    /// Short lowercase name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::Uploading { .. } => "uploading",
            UploadState::Success => "success",
            UploadState::Error => "error",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UploadState::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading { .. })
    }

    /// Current progress, only while uploading.
    pub fn progress(&self) -> Option<f64> {
        match self {
            UploadState::Uploading { progress } => Some(*progress),
            _ => None,
        }
    }
}

/// Result of applying one timer tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// No upload running; nothing changed.
    NotUploading,
    /// Progress moved to the given value (still below 100).
    Advanced(f64),
    /// Progress hit 100 and the upload ended. The timer must stop.
    Finished(UploadOutcome),
}

/// What the timer driving the upload should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    Continue,
    Stop,
}

impl Tick {
    /// Only an advancing upload keeps the timer alive.
    pub fn action(&self) -> TickAction {
        match self {
            Tick::Advanced(_) => TickAction::Continue,
            Tick::Finished(_) | Tick::NotUploading => TickAction::Stop,
        }
    }
}

/// All state of the upload page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadFlow {
    state: UploadState,
    metadata: ModelMetadata,
    files: Vec<SelectedFile>,
    messages: Vec<String>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Validation and upload messages, in the order they were raised.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    // -------------------------------------------------------------------------
    // Form input
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.metadata.name = name.into();
    }

    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.metadata.model_type = model_type;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.metadata.description = description.into();
    }

    /// Append files from a drop or the file picker, keeping their order.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.files.extend(files);
    }

    /// Remove the first file equal to `file`. Returns whether one was removed.
    pub fn remove_file(&mut self, file: &SelectedFile) -> bool {
        match self.files.iter().position(|f| f == file) {
            Some(index) => {
                self.files.remove(index);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Validate the form and start uploading.
    ///
    /// Messages are cleared first, then every failed check adds one.
    /// On success the state is `Uploading { progress: 0 }` and the caller
    /// is expected to start ticking.
    pub fn submit(&mut self) -> AppResult<UploadSummary> {
        if !self.state.is_idle() {
            return Err(self.invalid("submit"));
        }

        self.messages.clear();
        if self.metadata.name.is_empty() {
            self.messages.push(MSG_NAME_REQUIRED.to_string());
        }
        if self.files.is_empty() {
            self.messages.push(MSG_FILES_REQUIRED.to_string());
        }
        if !self.messages.is_empty() {
            return Err(AppError::Validation(self.messages.clone()));
        }

        self.state = UploadState::Uploading { progress: 0.0 };
        Ok(UploadSummary::new(&self.metadata, &self.files))
    }

    /// Advance the running upload by one step drawn from `source`.
    ///
    /// Once progress reaches 100 the outcome is drawn exactly once and the
    /// flow leaves `Uploading`; later ticks return [`Tick::NotUploading`].
    pub fn tick<S: UploadSource + ?Sized>(&mut self, source: &mut S) -> Tick {
        let UploadState::Uploading { progress } = self.state else {
            return Tick::NotUploading;
        };

        // max() also maps NaN to zero
        let next = progress + source.next_increment().max(0.0);
        if next < PROGRESS_COMPLETE {
            self.state = UploadState::Uploading { progress: next };
            return Tick::Advanced(next);
        }

        let outcome = source.outcome();
        match outcome {
            UploadOutcome::Accepted => self.state = UploadState::Success,
            UploadOutcome::Rejected => {
                self.state = UploadState::Error;
                self.messages.push(MSG_UPLOAD_REJECTED.to_string());
            }
        }
        Tick::Finished(outcome)
    }

    /// "Try Again": go back to the form, keeping metadata and files.
    pub fn reset(&mut self) -> AppResult<()> {
        if self.state != UploadState::Error {
            return Err(self.invalid("retry"));
        }
        self.state = UploadState::Idle;
        Ok(())
    }

    /// "Upload Another Model": clear everything after a success.
    pub fn start_over(&mut self) -> AppResult<()> {
        if self.state != UploadState::Success {
            return Err(self.invalid("start over"));
        }
        *self = Self::default();
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed increments, then a fixed outcome.
    struct Scripted {
        steps: VecDeque<f64>,
        outcome: UploadOutcome,
        outcome_calls: usize,
    }

    impl Scripted {
        fn new(steps: &[f64], outcome: UploadOutcome) -> Self {
            Self {
                steps: steps.iter().copied().collect(),
                outcome,
                outcome_calls: 0,
            }
        }
    }

    impl UploadSource for Scripted {
        fn next_increment(&mut self) -> f64 {
            self.steps.pop_front().unwrap_or(9.99)
        }

        fn outcome(&mut self) -> UploadOutcome {
            self.outcome_calls += 1;
            self.outcome
        }
    }

    fn ready_flow() -> UploadFlow {
        let mut flow = UploadFlow::new();
        flow.set_name("CoolModel");
        flow.add_files([SelectedFile::new("fileA.bin", 2048)]);
        flow
    }

    #[test]
    fn test_empty_form_reports_both_messages() {
        let mut flow = UploadFlow::new();

        let err = flow.submit().unwrap_err();

        assert_eq!(flow.state(), UploadState::Idle);
        assert_eq!(flow.messages(), [MSG_NAME_REQUIRED, MSG_FILES_REQUIRED]);
        assert_eq!(err, AppError::Validation(flow.messages().to_vec()));
    }

    #[test]
    fn test_missing_name_only() {
        let mut flow = UploadFlow::new();
        flow.add_files([SelectedFile::new("a", 1)]);

        assert!(flow.submit().is_err());
        assert_eq!(flow.state(), UploadState::Idle);
        assert_eq!(flow.messages(), [MSG_NAME_REQUIRED]);
    }

    #[test]
    fn test_missing_files_only() {
        let mut flow = UploadFlow::new();
        flow.set_name("CoolModel");

        assert!(flow.submit().is_err());
        assert_eq!(flow.messages(), [MSG_FILES_REQUIRED]);
    }

    #[test]
    fn test_resubmit_clears_previous_messages() {
        let mut flow = UploadFlow::new();
        assert!(flow.submit().is_err());
        assert!(flow.submit().is_err());
        assert_eq!(flow.messages().len(), 2);

        flow.set_name("CoolModel");
        flow.add_files([SelectedFile::new("a", 1)]);
        let summary = flow.submit().unwrap();

        assert!(flow.messages().is_empty());
        assert_eq!(flow.state(), UploadState::Uploading { progress: 0.0 });
        assert_eq!(summary.total_bytes, 1);
    }

    #[test]
    fn test_submit_rejected_while_uploading() {
        let mut flow = ready_flow();
        flow.submit().unwrap();

        let err = flow.submit().unwrap_err();
        assert_eq!(err, AppError::InvalidTransition { from: "uploading", action: "submit" });
        assert!(flow.state().is_uploading());
    }

    #[test]
    fn test_add_and_remove_files() {
        let mut flow = UploadFlow::new();
        let a = SelectedFile::new("a.bin", 10);
        let b = SelectedFile::new("b.bin", 20);
        flow.add_files([a.clone(), b.clone()]);
        flow.add_files([a.clone()]);
        assert_eq!(flow.files(), [a.clone(), b.clone(), a.clone()]);

        assert!(flow.remove_file(&a));
        assert_eq!(flow.files(), [b.clone(), a.clone()]);

        let missing = SelectedFile::new("a.bin", 11);
        assert!(!flow.remove_file(&missing));
        assert_eq!(flow.files().len(), 2);
    }

    #[test]
    fn test_ticks_until_success() {
        let mut flow = ready_flow();
        flow.submit().unwrap();
        let mut source = Scripted::new(&[30.0, 30.0, 30.0, 30.0], UploadOutcome::Accepted);

        assert_eq!(flow.tick(&mut source), Tick::Advanced(30.0));
        assert_eq!(flow.tick(&mut source), Tick::Advanced(60.0));
        assert_eq!(flow.tick(&mut source), Tick::Advanced(90.0));
        assert_eq!(flow.tick(&mut source), Tick::Finished(UploadOutcome::Accepted));

        assert_eq!(flow.state(), UploadState::Success);
        assert!(flow.messages().is_empty());
        assert_eq!(flow.tick(&mut source), Tick::NotUploading);
        assert_eq!(source.outcome_calls, 1);
    }

    #[test]
    fn test_tick_actions() {
        assert_eq!(Tick::Advanced(42.0).action(), TickAction::Continue);
        assert_eq!(Tick::Finished(UploadOutcome::Accepted).action(), TickAction::Stop);
        assert_eq!(Tick::Finished(UploadOutcome::Rejected).action(), TickAction::Stop);
        assert_eq!(Tick::NotUploading.action(), TickAction::Stop);
    }

    #[test]
    fn test_timer_stops_once_per_session() {
        let mut flow = ready_flow();
        flow.submit().unwrap();
        let mut source = Scripted::new(&[40.0, 40.0, 40.0], UploadOutcome::Rejected);

        // Drive ticks the way the page does until the first Stop
        let mut ticks = Vec::new();
        loop {
            let tick = flow.tick(&mut source);
            ticks.push(tick);
            if tick.action() == TickAction::Stop {
                break;
            }
        }

        assert_eq!(
            ticks,
            [
                Tick::Advanced(40.0),
                Tick::Advanced(80.0),
                Tick::Finished(UploadOutcome::Rejected),
            ]
        );
        assert_eq!(source.outcome_calls, 1);
        // A leaked timer firing again still asks to stop and changes nothing
        let snapshot = flow.clone();
        assert_eq!(flow.tick(&mut source).action(), TickAction::Stop);
        assert_eq!(flow, snapshot);
    }

    #[test]
    fn test_exactly_100_finishes() {
        let mut flow = ready_flow();
        flow.submit().unwrap();
        let mut source = Scripted::new(&[50.0, 50.0], UploadOutcome::Accepted);

        flow.tick(&mut source);
        assert_eq!(flow.tick(&mut source), Tick::Finished(UploadOutcome::Accepted));
    }

    #[test]
    fn test_rejection_then_retry_keeps_form() {
        let mut flow = ready_flow();
        flow.set_model_type(ModelType::Classification);
        flow.set_description("spam filter");
        flow.submit().unwrap();
        let mut source = Scripted::new(&[100.0], UploadOutcome::Rejected);

        assert_eq!(flow.tick(&mut source), Tick::Finished(UploadOutcome::Rejected));
        assert_eq!(flow.state(), UploadState::Error);
        assert_eq!(flow.messages(), [MSG_UPLOAD_REJECTED]);

        let metadata = flow.metadata().clone();
        let files = flow.files().to_vec();
        flow.reset().unwrap();

        assert_eq!(flow.state(), UploadState::Idle);
        assert_eq!(flow.metadata(), &metadata);
        assert_eq!(flow.files(), files.as_slice());
    }

    #[test]
    fn test_reset_only_from_error() {
        let mut flow = ready_flow();
        assert!(flow.reset().is_err());
        assert_eq!(flow.state(), UploadState::Idle);
    }

    #[test]
    fn test_start_over_clears_everything() {
        let mut flow = ready_flow();
        flow.submit().unwrap();
        flow.tick(&mut Scripted::new(&[100.0], UploadOutcome::Accepted));

        flow.start_over().unwrap();
        assert_eq!(flow, UploadFlow::new());
    }

    #[test]
    fn test_negative_increment_ignored() {
        let mut flow = ready_flow();
        flow.submit().unwrap();
        let mut source = Scripted::new(&[5.0, -3.0, f64::NAN], UploadOutcome::Accepted);

        assert_eq!(flow.tick(&mut source), Tick::Advanced(5.0));
        assert_eq!(flow.tick(&mut source), Tick::Advanced(5.0));
        assert_eq!(flow.tick(&mut source), Tick::Advanced(5.0));
    }
}
