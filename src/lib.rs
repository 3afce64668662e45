#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod service;

pub use catalog::{GarmentCatalog, GarmentEntry, GarmentId, Zone};
pub use config::Config;
pub use engine::{
    ObservationDefaults, ObservationState, PredictionMode, PredictionOutcome,
    PredictionSynchronizer, SyncReport,
};
pub use error::{Result, TempFeelError};
pub use form::{FormEdit, FormSession};
pub use service::{HttpPredictionService, PredictionService};
