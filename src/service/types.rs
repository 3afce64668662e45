use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use tracing::warn;

/// Body of a comfort prediction response.
///
/// Only `prediction` is required. The optional fields are informational, so
/// a value of the wrong shape is dropped with a warning instead of failing
/// the whole response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeelsResponse {
    pub prediction: String,
    #[serde(default, deserialize_with = "lenient")]
    pub model_accuracy: Option<f64>,
    /// One row of class probabilities per submitted instance, indexed by
    /// sensation ordinal.
    #[serde(default, deserialize_with = "lenient_probabilities")]
    pub probabilities: Option<Vec<Vec<f64>>>,
}

/// A probability row as classifiers emit it: either a plain list or a map
/// keyed by class ordinal (`{"0": 0.1, "1": 0.7, ...}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum ProbabilityRow {
    Dense(Vec<f64>),
    ByClass(BTreeMap<String, f64>),
}

impl ProbabilityRow {
    fn into_dense(self) -> Option<Vec<f64>> {
        match self {
            Self::Dense(row) => Some(row),
            Self::ByClass(by_class) => {
                let mut indexed = by_class
                    .into_iter()
                    .map(|(class, p)| class.trim().parse::<usize>().ok().map(|i| (i, p)))
                    .collect::<Option<Vec<_>>>()?;
                indexed.sort_by_key(|(i, _)| *i);
                let contiguous = indexed.iter().enumerate().all(|(pos, (i, _))| pos == *i);
                contiguous.then(|| indexed.into_iter().map(|(_, p)| p).collect())
            }
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(error = %e, "ignoring malformed optional response field");
            None
        }
    }))
}

fn lenient_probabilities<'de, D>(deserializer: D) -> Result<Option<Vec<Vec<f64>>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<ProbabilityRow>> = lenient(deserializer)?;
    let Some(rows) = rows else {
        return Ok(None);
    };
    let dense = rows
        .into_iter()
        .map(ProbabilityRow::into_dense)
        .collect::<Option<Vec<_>>>();
    if dense.is_none() {
        warn!("ignoring probabilities with non-numeric or sparse class keys");
    }
    Ok(dense)
}

/// Body of a clothing recommendation response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClothingResponse {
    pub predictions: ClothingTargets,
}

/// Target insulation per zone, in clo.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClothingTargets {
    pub upr_clo: f64,
    pub lwr_clo: f64,
}
