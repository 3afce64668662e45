use crate::catalog::{GarmentCatalog, GarmentId, Zone};
use tracing::debug;

/// Garment in `zone` whose clo value is closest to `target_clo`.
///
/// Candidates are scanned in catalog order and only a strictly smaller
/// distance replaces the current best, so ties resolve to the earliest entry.
/// Returns `None` when the zone has no garments.
pub fn recommend(catalog: &GarmentCatalog, target_clo: f64, zone: Zone) -> Option<GarmentId> {
    let mut best: Option<(GarmentId, f64)> = None;

    for entry in catalog.zone(zone) {
        let distance = (entry.insulation - target_clo).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance || distance.is_nan() => {}
            _ => best = Some((entry.id, distance)),
        }
    }

    if best.is_none() {
        debug!(%zone, "no garments in zone, nothing to recommend");
    }
    best.map(|(id, _)| id)
}
