use super::insulation::DerivedInsulation;
use super::recommend::recommend;
use super::schema::{self, SCHEMA_VERSION, WirePayload};
use super::state::{ObservationState, PredictionMode, Sensation};
use super::tracker::ChangeTracker;
use crate::catalog::{GarmentCatalog, GarmentId, Zone};
use crate::error::Result;
use crate::service::{ClothingTargets, PredictionService};
use strum::Display;
use tracing::{debug, info, warn};

/// Comfort prediction decoded from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortPrediction {
    /// Label exactly as the service returned it.
    pub label: String,
    /// Decoded label, `None` when it matched no known sensation.
    pub sensation: Option<Sensation>,
    pub model_accuracy: Option<f64>,
    pub probabilities: Option<Vec<f64>>,
}

/// Clothing recommendation: the service's target clo values and the
/// nearest catalog garment for each zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingRecommendation {
    pub targets: ClothingTargets,
    pub upper: Option<GarmentId>,
    pub lower: Option<GarmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Comfort(ComfortPrediction),
    Clothing(ClothingRecommendation),
}

impl PredictionOutcome {
    /// Fold the outcome back into editable form state.
    ///
    /// Comfort outcomes overwrite the sensation only for recognized labels.
    /// Clothing outcomes replace each zone's whole selection with the
    /// recommended garment; a zone without a recommendation is left alone.
    pub fn apply_to(&self, state: &mut ObservationState, catalog: &GarmentCatalog) {
        match self {
            Self::Comfort(prediction) => {
                state.sensation = schema::resolve_label(state.sensation, &prediction.label);
            }
            Self::Clothing(recommendation) => {
                for (zone, garment) in [
                    (Zone::Upper, recommendation.upper),
                    (Zone::Lower, recommendation.lower),
                ] {
                    if let Some(id) = garment {
                        state.replace_zone_selection(catalog, zone, id);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SubmitStatus {
    /// The service was called and returned this outcome.
    Submitted,
    /// Nothing changed since the last success; the prior outcome is returned.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub outcome: PredictionOutcome,
    pub status: SubmitStatus,
}

/// Orchestrates one submission at a time against a [`PredictionService`].
///
/// The change tracker and the last outcome are written only after a
/// successful call; a failed call leaves both exactly as they were.
pub struct PredictionSynchronizer<S> {
    service: S,
    catalog: GarmentCatalog,
    tracker: ChangeTracker,
    last_outcome: Option<PredictionOutcome>,
}

impl<S: PredictionService> PredictionSynchronizer<S> {
    pub fn new(service: S, catalog: GarmentCatalog) -> Self {
        Self {
            service,
            catalog,
            tracker: ChangeTracker::new(),
            last_outcome: None,
        }
    }

    pub fn catalog(&self) -> &GarmentCatalog {
        &self.catalog
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn last_outcome(&self) -> Option<&PredictionOutcome> {
        self.last_outcome.as_ref()
    }

    /// Payload `state` would produce in `mode`.
    pub fn payload_for(&self, state: &ObservationState, mode: PredictionMode) -> WirePayload {
        let insulation = if mode.uses_clothing() {
            DerivedInsulation::from_selections(&self.catalog, &state.garments)
        } else {
            DerivedInsulation::default()
        };
        WirePayload::build(state, insulation, &self.catalog, mode)
    }

    /// Whether `state` differs from the last successful submission.
    pub fn should_submit(&self, state: &ObservationState, mode: PredictionMode) -> bool {
        self.last_outcome.is_none()
            || self
                .tracker
                .should_submit(mode, &self.payload_for(state, mode))
    }

    /// Submit `state` unless it matches the last successful submission.
    ///
    /// The payload is captured before the call, so edits made to the
    /// caller's state afterwards only affect the next submission.
    pub async fn submit(
        &mut self,
        state: &ObservationState,
        mode: PredictionMode,
    ) -> Result<SyncReport> {
        let payload = self.payload_for(state, mode);

        if let Some(outcome) = &self.last_outcome
            && !self.tracker.should_submit(mode, &payload)
        {
            debug!(%mode, "payload unchanged since last submission, skipping remote call");
            return Ok(SyncReport {
                outcome: outcome.clone(),
                status: SubmitStatus::Unchanged,
            });
        }

        info!(
            service = self.service.name(),
            %mode,
            schema_version = SCHEMA_VERSION,
            "submitting prediction request"
        );
        let outcome = match mode {
            PredictionMode::Comfort => {
                let response = self.service.predict_feels(&payload).await?;
                let sensation = schema::from_prediction_label(&response.prediction);
                if sensation.is_none() {
                    warn!(label = %response.prediction, "service returned an unknown sensation label");
                }
                PredictionOutcome::Comfort(ComfortPrediction {
                    sensation,
                    model_accuracy: response.model_accuracy,
                    probabilities: response
                        .probabilities
                        .and_then(|rows| rows.into_iter().next()),
                    label: response.prediction,
                })
            }
            PredictionMode::Clothing => {
                let response = self.service.predict_clothing(&payload).await?;
                let targets = response.predictions;
                PredictionOutcome::Clothing(ClothingRecommendation {
                    targets,
                    upper: recommend(&self.catalog, targets.upr_clo, Zone::Upper),
                    lower: recommend(&self.catalog, targets.lwr_clo, Zone::Lower),
                })
            }
        };

        self.tracker.commit(mode, payload);
        self.last_outcome = Some(outcome.clone());

        Ok(SyncReport {
            outcome,
            status: SubmitStatus::Submitted,
        })
    }

    /// Forget the last submission and its outcome.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.last_outcome = None;
    }
}
