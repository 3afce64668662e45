use crate::catalog::{GarmentCatalog, GarmentId, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sum of clo values for the selected garments that belong to `zone`.
///
/// Ids missing from the catalog contribute nothing.
pub fn aggregate(catalog: &GarmentCatalog, selections: &BTreeSet<GarmentId>, zone: Zone) -> f64 {
    selections
        .iter()
        .filter_map(|id| catalog.get(*id))
        .filter(|entry| entry.zone == zone)
        .fold(0.0, |total, entry| total + entry.insulation)
}

/// Per-zone insulation derived from the current garment selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedInsulation {
    pub upper_clo: f64,
    pub lower_clo: f64,
}

impl DerivedInsulation {
    pub fn from_selections(catalog: &GarmentCatalog, selections: &BTreeSet<GarmentId>) -> Self {
        Self {
            upper_clo: aggregate(catalog, selections, Zone::Upper),
            lower_clo: aggregate(catalog, selections, Zone::Lower),
        }
    }
}
