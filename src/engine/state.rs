use crate::catalog::{GarmentCatalog, GarmentId, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::Display;

/// Snow or rain intensity as the form offers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "lowercase")]
pub enum Intensity {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

/// Self-reported or predicted thermal sensation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "lowercase")]
pub enum Sensation {
    Cold,
    #[default]
    Cool,
    Warm,
    Hot,
}

/// Which remote task a submission targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PredictionMode {
    /// Predict how the current clothing will feel.
    #[default]
    Comfort,
    /// Predict how much insulation is needed for a desired sensation.
    Clothing,
}

impl PredictionMode {
    /// Whether the payload for this mode carries clothing-derived fields.
    pub const fn uses_clothing(self) -> bool {
        matches!(self, Self::Comfort)
    }

    /// Whether the payload carries the sensation as an input. In comfort
    /// mode the sensation is what the service predicts.
    pub const fn uses_sensation(self) -> bool {
        matches!(self, Self::Clothing)
    }
}

/// Initial form values. The same value seeds a new session and every reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationDefaults {
    pub temperature: f64,
    pub sun: bool,
    pub headwind: bool,
    pub snow: Intensity,
    pub rain: Intensity,
    pub fatigued: bool,
    pub heart_rate: u16,
    pub sensation: Option<Sensation>,
    pub garments: Vec<GarmentId>,
}

pub const DEFAULT_TEMPERATURE: f64 = 20.0;
pub const DEFAULT_HEART_RATE: u16 = 75;
pub const DEFAULT_GARMENTS: [GarmentId; 2] = [GarmentId::TPoly, GarmentId::PThin];

impl Default for ObservationDefaults {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            sun: false,
            headwind: false,
            snow: Intensity::None,
            rain: Intensity::None,
            fatigued: false,
            heart_rate: DEFAULT_HEART_RATE,
            sensation: Some(Sensation::Cool),
            garments: DEFAULT_GARMENTS.to_vec(),
        }
    }
}

/// The user's current input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationState {
    pub garments: BTreeSet<GarmentId>,
    pub temperature: f64,
    pub sun: bool,
    pub headwind: bool,
    pub snow: Intensity,
    pub rain: Intensity,
    pub fatigued: bool,
    pub heart_rate: u16,
    pub sensation: Option<Sensation>,
}

impl ObservationState {
    pub fn from_defaults(defaults: &ObservationDefaults) -> Self {
        Self {
            garments: defaults.garments.iter().copied().collect(),
            temperature: defaults.temperature,
            sun: defaults.sun,
            headwind: defaults.headwind,
            snow: defaults.snow,
            rain: defaults.rain,
            fatigued: defaults.fatigued,
            heart_rate: defaults.heart_rate,
            sensation: defaults.sensation,
        }
    }

    pub fn is_selected(&self, id: GarmentId) -> bool {
        self.garments.contains(&id)
    }

    /// Replace every selection in `zone` with `id` alone.
    pub fn replace_zone_selection(&mut self, catalog: &GarmentCatalog, zone: Zone, id: GarmentId) {
        self.garments
            .retain(|g| catalog.get(*g).is_none_or(|entry| entry.zone != zone));
        self.garments.insert(id);
    }
}

impl Default for ObservationState {
    fn default() -> Self {
        Self::from_defaults(&ObservationDefaults::default())
    }
}
