// ── Leaf components ─────────────────────────────────────────────────────────
pub mod insulation;
pub mod recommend;
pub mod schema;
pub mod state;
pub mod tracker;

// ── Orchestration ───────────────────────────────────────────────────────────
pub mod sync;

pub use insulation::{DerivedInsulation, aggregate};
pub use recommend::recommend;
pub use schema::{
    PredictRequest, SCHEMA_VERSION, WirePayload, from_prediction_label, resolve_label,
};
pub use state::{
    Intensity, ObservationDefaults, ObservationState, PredictionMode, Sensation,
};
pub use sync::{
    ClothingRecommendation, ComfortPrediction, PredictionOutcome, PredictionSynchronizer,
    SubmitStatus, SyncReport,
};
pub use tracker::{ChangeTracker, SubmissionSnapshot, TrackerState};
