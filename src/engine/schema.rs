//! Mapping between form state and the numeric record the prediction
//! service consumes. Every enum-to-number rule lives here.

use super::insulation::DerivedInsulation;
use super::state::{Intensity, ObservationState, PredictionMode, Sensation};
use crate::catalog::{GarmentCatalog, GarmentId};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Revision of the enum-to-wire mapping below. Bump when an ordinal or a
/// payload key changes.
pub const SCHEMA_VERSION: u32 = 2;

const SENSATIONS: [Sensation; 4] = [
    Sensation::Cold,
    Sensation::Cool,
    Sensation::Warm,
    Sensation::Hot,
];

impl Intensity {
    pub const fn wire_ordinal(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Light => 1,
            Self::Medium => 2,
            Self::Heavy => 3,
        }
    }

    /// Parse a raw form value. Unknown values fall back to `None` (ordinal 0).
    pub fn from_form_value(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "light" => Self::Light,
            "medium" | "moderate" => Self::Medium,
            "heavy" => Self::Heavy,
            other => {
                warn!(value = other, "unrecognized intensity, submitting as none");
                Self::None
            }
        }
    }
}

impl Sensation {
    pub const fn wire_ordinal(self) -> u8 {
        match self {
            Self::Cold => 0,
            Self::Cool => 1,
            Self::Warm => 2,
            Self::Hot => 3,
        }
    }

    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::Cold => "COLD",
            Self::Cool => "COOL",
            Self::Warm => "WARM",
            Self::Hot => "HOT",
        }
    }

    pub fn from_wire_ordinal(ordinal: u8) -> Option<Self> {
        SENSATIONS.get(usize::from(ordinal)).copied()
    }

    /// Parse a raw form value. Unknown values fall back to `Cold` (ordinal 0).
    pub fn from_form_value(raw: &str) -> Self {
        from_prediction_label(raw).unwrap_or_else(|| {
            warn!(value = raw, "unrecognized sensation, submitting as cold");
            Self::Cold
        })
    }
}

/// Case-insensitive match of a service label against the four sensations.
pub fn from_prediction_label(label: &str) -> Option<Sensation> {
    let label = label.trim();
    SENSATIONS
        .into_iter()
        .find(|sensation| sensation.wire_label().eq_ignore_ascii_case(label))
}

/// Sensation after applying `label`: the decoded value, or `prior` when the
/// label is not one of the known categories.
pub fn resolve_label(prior: Option<Sensation>, label: &str) -> Option<Sensation> {
    match from_prediction_label(label) {
        Some(sensation) => Some(sensation),
        None => {
            debug!(label, "prediction label not recognized, keeping prior sensation");
            prior
        }
    }
}

const fn flag(value: bool) -> u8 {
    if value { 1 } else { 0 }
}

/// The exact record sent in `{"instances": [...]}`.
///
/// Clothing fields are absent in clothing-recommendation mode and `feels` is
/// absent in comfort mode; each is what the service predicts in that mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WirePayload {
    #[serde(rename = "upperClo", skip_serializing_if = "Option::is_none")]
    pub upper_clo: Option<f64>,
    #[serde(rename = "lowerClo", skip_serializing_if = "Option::is_none")]
    pub lower_clo: Option<f64>,
    pub temp: f64,
    pub sun: u8,
    pub headwind: u8,
    pub snow: u8,
    pub rain: u8,
    pub fatigued: u8,
    pub hr: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels: Option<u8>,
    #[serde(flatten)]
    pub garments: BTreeMap<GarmentId, u8>,
}

impl WirePayload {
    /// Build the payload for `mode`. `insulation` is only read when the mode
    /// uses clothing inputs.
    pub fn build(
        state: &ObservationState,
        insulation: DerivedInsulation,
        catalog: &GarmentCatalog,
        mode: PredictionMode,
    ) -> Self {
        let (upper_clo, lower_clo, garments) = if mode.uses_clothing() {
            let garments = catalog
                .entries()
                .iter()
                .map(|entry| (entry.id, flag(state.is_selected(entry.id))))
                .collect();
            (
                Some(insulation.upper_clo),
                Some(insulation.lower_clo),
                garments,
            )
        } else {
            (None, None, BTreeMap::new())
        };

        Self {
            upper_clo,
            lower_clo,
            temp: state.temperature,
            sun: flag(state.sun),
            headwind: flag(state.headwind),
            snow: state.snow.wire_ordinal(),
            rain: state.rain.wire_ordinal(),
            fatigued: flag(state.fatigued),
            hr: state.heart_rate,
            feels: state
                .sensation
                .filter(|_| mode.uses_sensation())
                .map(Sensation::wire_ordinal),
            garments,
        }
    }
}

/// Request body wrapper the service expects.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub instances: [&'a WirePayload; 1],
}

impl<'a> PredictRequest<'a> {
    pub fn single(payload: &'a WirePayload) -> Self {
        Self {
            instances: [payload],
        }
    }
}
