use super::schema::WirePayload;
use super::state::PredictionMode;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TrackerState {
    /// Current payload equals the last successful submission.
    Clean,
    /// Payload differs, or nothing has been submitted since the last reset.
    Dirty,
}

/// Exact payload of the last successful submission and the mode it was sent
/// in.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSnapshot {
    pub mode: PredictionMode,
    pub payload: WirePayload,
}

/// Gates redundant remote calls by comparing each candidate payload to the
/// last one the service accepted.
///
/// The snapshot only changes in [`commit`](Self::commit) and
/// [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct ChangeTracker {
    snapshot: Option<SubmissionSnapshot>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    pub fn state(&self, mode: PredictionMode, payload: &WirePayload) -> TrackerState {
        match &self.snapshot {
            Some(snapshot) if snapshot.mode == mode && snapshot.payload == *payload => {
                TrackerState::Clean
            }
            _ => TrackerState::Dirty,
        }
    }

    pub fn should_submit(&self, mode: PredictionMode, payload: &WirePayload) -> bool {
        self.state(mode, payload) == TrackerState::Dirty
    }

    /// Record `payload` as successfully submitted, replacing any previous
    /// snapshot.
    pub fn commit(&mut self, mode: PredictionMode, payload: WirePayload) {
        self.snapshot = Some(SubmissionSnapshot { mode, payload });
    }

    /// Drop the snapshot so the next submission always reaches the service.
    pub fn reset(&mut self) {
        self.snapshot = None;
    }

    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.snapshot.as_ref()
    }
}
