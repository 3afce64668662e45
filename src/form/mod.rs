//! Editable form state and the session that drives submissions from it.

mod edit;

pub use edit::{FormEdit, parse_edit};

use crate::catalog::GarmentCatalog;
use crate::engine::{
    DerivedInsulation, ObservationDefaults, ObservationState, PredictionMode,
    PredictionOutcome, PredictionSynchronizer, SubmitStatus, SyncReport,
};
use crate::error::Result;
use crate::service::PredictionService;
use tracing::{debug, warn};

/// One user's form: current input, prediction mode and the synchronizer
/// that owns the last submission.
pub struct FormSession<S> {
    state: ObservationState,
    mode: PredictionMode,
    defaults: ObservationDefaults,
    sync: PredictionSynchronizer<S>,
}

impl<S: PredictionService> FormSession<S> {
    pub fn new(service: S, catalog: GarmentCatalog, defaults: ObservationDefaults) -> Self {
        Self {
            state: ObservationState::from_defaults(&defaults),
            mode: PredictionMode::default(),
            defaults,
            sync: PredictionSynchronizer::new(service, catalog),
        }
    }

    pub fn state(&self) -> &ObservationState {
        &self.state
    }

    pub fn mode(&self) -> PredictionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PredictionMode) {
        self.mode = mode;
    }

    pub fn catalog(&self) -> &GarmentCatalog {
        self.sync.catalog()
    }

    pub fn synchronizer(&self) -> &PredictionSynchronizer<S> {
        &self.sync
    }

    /// Insulation of the current selection, recomputed on every call.
    pub fn insulation(&self) -> DerivedInsulation {
        DerivedInsulation::from_selections(self.sync.catalog(), &self.state.garments)
    }

    /// Outcome currently on display, if any.
    pub fn displayed_outcome(&self) -> Option<&PredictionOutcome> {
        self.sync.last_outcome()
    }

    pub fn is_dirty(&self) -> bool {
        self.sync.should_submit(&self.state, self.mode)
    }

    /// Apply one edit event. Garments outside the catalog and non-finite
    /// temperatures are ignored.
    pub fn apply(&mut self, edit: FormEdit) {
        let state = &mut self.state;
        match edit {
            FormEdit::Garment { id, selected } => {
                if !self.sync.catalog().contains(id) {
                    debug!(%id, "ignoring garment outside the catalog");
                } else if selected {
                    state.garments.insert(id);
                } else {
                    state.garments.remove(&id);
                }
            }
            FormEdit::Temperature(value) if !value.is_finite() => {
                warn!(value, "ignoring non-finite temperature");
            }
            FormEdit::Temperature(value) => state.temperature = value,
            FormEdit::Sun(value) => state.sun = value,
            FormEdit::Headwind(value) => state.headwind = value,
            FormEdit::Snow(value) => state.snow = value,
            FormEdit::Rain(value) => state.rain = value,
            FormEdit::Fatigued(value) => state.fatigued = value,
            FormEdit::HeartRate(value) => state.heart_rate = value,
            FormEdit::Sensation(value) => state.sensation = value,
        }
    }

    /// Submit the current state and fold a fresh outcome back into it.
    pub async fn submit(&mut self) -> Result<SyncReport> {
        let report = self.sync.submit(&self.state, self.mode).await?;
        if report.status == SubmitStatus::Submitted {
            report.outcome.apply_to(&mut self.state, self.sync.catalog());
        }
        Ok(report)
    }

    /// Restore the defaults and forget the last submission.
    pub fn reset(&mut self) {
        self.state = ObservationState::from_defaults(&self.defaults);
        self.mode = PredictionMode::default();
        self.sync.reset();
    }
}
