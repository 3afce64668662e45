//! Garment catalog: the unit conversion table from discrete garments to
//! insulation (clo) values, partitioned into upper- and lower-body zones.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Body region a garment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    Upper,
    Lower,
}

/// Discrete garment identifiers, in the order the service expects them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GarmentId {
    TDress,
    TPoly,
    TCot,
    Sleeves,
    JLight,
    JFleece,
    JDown,
    Shorts,
    PThin,
    PThick,
    PFleece,
    PDown,
}

impl GarmentId {
    /// Zone and clo value of the garment in the standard table.
    pub const fn standard_entry(self) -> (Zone, f64) {
        match self {
            Self::TDress => (Zone::Upper, 0.05),
            Self::TPoly => (Zone::Upper, 0.08),
            Self::TCot => (Zone::Upper, 0.09),
            Self::Sleeves => (Zone::Upper, 0.20),
            Self::JLight => (Zone::Upper, 0.50),
            Self::JFleece => (Zone::Upper, 0.70),
            Self::JDown => (Zone::Upper, 0.90),
            Self::Shorts => (Zone::Lower, 0.06),
            Self::PThin => (Zone::Lower, 0.15),
            Self::PThick => (Zone::Lower, 0.24),
            Self::PFleece => (Zone::Lower, 0.80),
            Self::PDown => (Zone::Lower, 0.90),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarmentEntry {
    pub id: GarmentId,
    pub zone: Zone,
    pub insulation: f64,
}

impl GarmentEntry {
    pub const fn new(id: GarmentId, zone: Zone, insulation: f64) -> Self {
        Self {
            id,
            zone,
            insulation,
        }
    }
}

/// Ordered garment table. Enumeration order is the insertion order and is
/// what the recommender uses to break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentCatalog {
    entries: Vec<GarmentEntry>,
}

static STANDARD: LazyLock<GarmentCatalog> = LazyLock::new(|| GarmentCatalog {
    entries: GarmentId::iter()
        .map(|id| {
            let (zone, insulation) = id.standard_entry();
            GarmentEntry::new(id, zone, insulation)
        })
        .collect(),
});

impl GarmentCatalog {
    /// Build a catalog from explicit entries. Each id may appear once.
    pub fn new(entries: Vec<GarmentEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateGarment(entry.id));
            }
            if !entry.insulation.is_finite() || entry.insulation < 0.0 {
                return Err(CatalogError::InvalidInsulation {
                    id: entry.id,
                    value: entry.insulation,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The full twelve-garment table.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn get(&self, id: GarmentId) -> Option<&GarmentEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: GarmentId) -> bool {
        self.get(id).is_some()
    }

    pub fn entries(&self) -> &[GarmentEntry] {
        &self.entries
    }

    /// Entries of one zone, in catalog order.
    pub fn zone(&self, zone: Zone) -> impl Iterator<Item = &GarmentEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.zone == zone)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GarmentCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}
