//! Control dispatch.
//!
//! Every UI control maps to one [`ControlChange`]. Applying a change with
//! [`on_control_change`] replaces exactly one field of the [`ViewState`]
//! and returns the new state; the caller then recomputes and redraws.

use std::str::FromStr;

use crate::error::ControlError;
use crate::state::{MetricType, TickMode, TimeUnit, ViewState};
use crate::view::parse_time_range;

/// A single control event
#[derive(Clone, Debug, PartialEq)]
pub enum ControlChange {
    ShowMale(bool),
    ShowFemale(bool),
    Metric(MetricType),
    /// Raw contents of the highlight box
    Highlight(String),
    TickMode(TickMode),
    /// Raw contents of the time-range box
    TimeRange(String),
    TimeUnit(TimeUnit),
    /// Drop any entered window and show the full range
    ResetTimeWindow,
}

impl ControlChange {
    /// Build a change from a control id and its string value.
    ///
    /// Control ids follow the form element names of the chart page
    /// (`toggleMale`, `dataType`, `timeRange`, ...).
    pub fn from_field(field: &str, value: &str) -> Result<Self, ControlError> {
        let invalid = || ControlError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        match field {
            "toggleMale" => parse_bool(value).map(ControlChange::ShowMale).ok_or_else(invalid),
            "toggleFemale" => parse_bool(value)
                .map(ControlChange::ShowFemale)
                .ok_or_else(invalid),
            "dataType" => MetricType::from_str(value.trim())
                .map(ControlChange::Metric)
                .map_err(|_| invalid()),
            "highlightMouse" => Ok(ControlChange::Highlight(value.to_string())),
            "tickMode" => TickMode::from_str(value.trim())
                .map(ControlChange::TickMode)
                .map_err(|_| invalid()),
            "timeRange" => Ok(ControlChange::TimeRange(value.to_string())),
            "timeMode" => TimeUnit::from_str(value.trim())
                .map(ControlChange::TimeUnit)
                .map_err(|_| invalid()),
            _ => Err(ControlError::UnknownField(field.to_string())),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "checked" => Some(true),
        "false" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Apply one control change, returning the new view state.
///
/// A time range that does not parse keeps the previous window; only the
/// raw text is updated so the input box reflects what was typed.
pub fn on_control_change(state: &ViewState, change: ControlChange) -> ViewState {
    tracing::debug!("Control change: {:?}", change);

    let mut next = state.clone();
    match change {
        ControlChange::ShowMale(on) => next.show_male = on,
        ControlChange::ShowFemale(on) => next.show_female = on,
        ControlChange::Metric(metric) => next.metric = metric,
        ControlChange::Highlight(text) => {
            let id = text.trim();
            next.highlight_id = (!id.is_empty()).then(|| id.to_string());
        }
        ControlChange::TickMode(mode) => next.tick_mode = mode,
        ControlChange::TimeRange(text) => {
            if let Some(window) = parse_time_range(&text) {
                next.time_window = Some(window);
            }
            next.time_range_text = text;
        }
        ControlChange::TimeUnit(unit) => next.time_unit = unit,
        ControlChange::ResetTimeWindow => {
            next.time_window = None;
            next.time_range_text.clear();
        }
    }
    next
}
