use crate::catalog::{GarmentCatalog, GarmentId};
use crate::engine::{DerivedInsulation, PredictionOutcome, Sensation};
use std::fmt::Write;

pub fn render_catalog(catalog: &GarmentCatalog) -> String {
    let mut out = String::from("Garment     Zone   Clo\n");
    for entry in catalog.entries() {
        let _ = writeln!(
            out,
            "{:<11} {:<6} {:.2}",
            entry.id.as_ref(),
            entry.zone.to_string(),
            entry.insulation
        );
    }
    out
}

/// `COLD 10%, COOL 20%, ...`; columns beyond the known sensations are
/// labelled by class index.
fn render_probabilities(row: &[f64]) -> String {
    row.iter()
        .enumerate()
        .map(|(class, p)| {
            let label = u8::try_from(class)
                .ok()
                .and_then(Sensation::from_wire_ordinal)
                .map_or_else(|| format!("class {class}"), |s| s.wire_label().to_string());
            format!("{label} {:.0}%", p * 100.0)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_garment(
    catalog: &GarmentCatalog,
    label: &str,
    garment: Option<GarmentId>,
    target: f64,
) -> String {
    match garment.and_then(|id| catalog.get(id)) {
        Some(entry) => format!(
            "{label}: {} ({:.2} clo, target {target:.2})",
            entry.id, entry.insulation
        ),
        None => format!("{label}: no recommendation (target {target:.2})"),
    }
}

pub fn render_outcome(
    outcome: &PredictionOutcome,
    catalog: &GarmentCatalog,
    insulation: DerivedInsulation,
) -> String {
    match outcome {
        PredictionOutcome::Comfort(prediction) => {
            let mut lines = vec![format!(
                "Clothing: upper {:.2} clo, lower {:.2} clo",
                insulation.upper_clo, insulation.lower_clo
            )];
            match prediction.sensation {
                Some(sensation) => {
                    lines.push(format!("It will feel: {}", sensation.wire_label()));
                }
                None => lines.push(format!(
                    "Service answered {:?}, which is not a known sensation",
                    prediction.label
                )),
            }
            if let Some(accuracy) = prediction.model_accuracy {
                lines.push(format!("Model accuracy: {:.0}%", accuracy * 100.0));
            }
            if let Some(row) = prediction.probabilities.as_deref() {
                lines.push(format!("Probabilities: {}", render_probabilities(row)));
            }
            lines.join("\n")
        }
        PredictionOutcome::Clothing(recommendation) => [
            render_garment(
                catalog,
                "Upper",
                recommendation.upper,
                recommendation.targets.upr_clo,
            ),
            render_garment(
                catalog,
                "Lower",
                recommendation.lower,
                recommendation.targets.lwr_clo,
            ),
        ]
        .join("\n"),
    }
}
