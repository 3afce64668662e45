use crate::catalog::{GarmentCatalog, GarmentId};
use crate::cli::{Cli, Commands, ConditionArgs};
use crate::config::Config;
use crate::engine::{Intensity, PredictionMode, Sensation};
use crate::form::{FormEdit, FormSession};
use crate::service::HttpPredictionService;
use anyhow::{Context, Result};
use tracing::info;

use super::render::{render_catalog, render_outcome};

/// Edits for the condition flags that were actually given.
pub fn condition_edits(conditions: &ConditionArgs) -> Vec<FormEdit> {
    let mut edits = Vec::new();
    if let Some(temp) = conditions.temp {
        edits.push(FormEdit::Temperature(temp));
    }
    if let Some(hr) = conditions.hr {
        edits.push(FormEdit::HeartRate(hr));
    }
    if conditions.sun {
        edits.push(FormEdit::Sun(true));
    }
    if conditions.headwind {
        edits.push(FormEdit::Headwind(true));
    }
    if conditions.fatigued {
        edits.push(FormEdit::Fatigued(true));
    }
    if let Some(snow) = conditions.snow.as_deref() {
        edits.push(FormEdit::Snow(Intensity::from_form_value(snow)));
    }
    if let Some(rain) = conditions.rain.as_deref() {
        edits.push(FormEdit::Rain(Intensity::from_form_value(rain)));
    }
    edits
}

/// Edits that make `garments` the complete selection. An empty list keeps
/// the configured default outfit.
pub fn garment_edits(catalog: &GarmentCatalog, garments: &[String]) -> Result<Vec<FormEdit>> {
    if garments.is_empty() {
        return Ok(Vec::new());
    }

    let mut wanted = Vec::with_capacity(garments.len());
    for raw in garments {
        let id: GarmentId = raw
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown garment {raw:?}; run `tempfeel catalog`"))?;
        wanted.push(id);
    }

    Ok(catalog
        .entries()
        .iter()
        .map(|entry| FormEdit::Garment {
            id: entry.id,
            selected: wanted.contains(&entry.id),
        })
        .collect())
}

async fn run_prediction(
    config: &Config,
    mode: PredictionMode,
    edits: Vec<FormEdit>,
) -> Result<()> {
    let service = HttpPredictionService::new(&config.service);
    let mut form = FormSession::new(
        service,
        GarmentCatalog::standard().clone(),
        config.defaults.clone(),
    );
    form.set_mode(mode);
    for edit in edits {
        form.apply(edit);
    }

    info!(%mode, url = %config.service.base_url, "requesting prediction");
    let report = form
        .submit()
        .await
        .with_context(|| format!("{mode} prediction failed"))?;

    println!(
        "{}",
        render_outcome(&report.outcome, form.catalog(), form.insulation())
    );
    Ok(())
}

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(url) = cli.url {
        config.service.base_url = url;
        config.service.validate()?;
    }

    match cli.command {
        Commands::Catalog => {
            print!("{}", render_catalog(GarmentCatalog::standard()));
            Ok(())
        }
        Commands::Feels {
            conditions,
            garments,
        } => {
            let mut edits = condition_edits(&conditions);
            edits.extend(garment_edits(GarmentCatalog::standard(), &garments)?);
            run_prediction(&config, PredictionMode::Comfort, edits).await
        }
        Commands::Clothing { conditions, feels } => {
            let mut edits = condition_edits(&conditions);
            if let Some(feels) = feels.as_deref() {
                edits.push(FormEdit::Sensation(Some(Sensation::from_form_value(feels))));
            }
            run_prediction(&config, PredictionMode::Clothing, edits).await
        }
    }
}
