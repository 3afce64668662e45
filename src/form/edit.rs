use crate::catalog::GarmentId;
use crate::engine::{Intensity, Sensation};
use tracing::warn;

/// A single discrete change coming from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormEdit {
    Garment { id: GarmentId, selected: bool },
    Temperature(f64),
    Sun(bool),
    Headwind(bool),
    Snow(Intensity),
    Rain(Intensity),
    Fatigued(bool),
    HeartRate(u16),
    Sensation(Option<Sensation>),
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Translate a `name=value` form event into an edit.
///
/// Categorical fields are fail-soft (unknown values become the zero
/// ordinal). Unknown field names and unparsable numbers or flags yield
/// `None` and are logged.
pub fn parse_edit(name: &str, value: &str) -> Option<FormEdit> {
    let edit = match name {
        "temp" => value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|temp| temp.is_finite())
            .map(FormEdit::Temperature),
        "hr" => value.trim().parse().ok().map(FormEdit::HeartRate),
        "sun" => parse_flag(value).map(FormEdit::Sun),
        "headwind" => parse_flag(value).map(FormEdit::Headwind),
        "fatigued" => parse_flag(value).map(FormEdit::Fatigued),
        "snow" => Some(FormEdit::Snow(Intensity::from_form_value(value))),
        "rain" => Some(FormEdit::Rain(Intensity::from_form_value(value))),
        "feels" if value.trim().is_empty() => Some(FormEdit::Sensation(None)),
        "feels" => Some(FormEdit::Sensation(Some(Sensation::from_form_value(value)))),
        other => match other.parse::<GarmentId>() {
            Ok(id) => parse_flag(value).map(|selected| FormEdit::Garment { id, selected }),
            Err(_) => {
                warn!(field = other, "ignoring edit to unknown form field");
                return None;
            }
        },
    };

    if edit.is_none() {
        warn!(field = name, value, "ignoring unparsable form value");
    }
    edit
}
