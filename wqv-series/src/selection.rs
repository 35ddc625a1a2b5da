//! Ephemeral selection state, rebuilt on every user interaction.

use chrono::NaiveDate;
use wqv_core::parameter::{Parameter, Statistic};

/// Rolling-mean overlay configuration.
///
/// Observations are not evenly spaced in time, so the two window kinds
/// behave differently on sparse stretches: a point-count window always
/// averages the same number of neighbors, a calendar window averages
/// whatever happens to fall inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollingWindow {
    /// Centered window of a fixed number of points (minimum one period).
    Points(usize),
    /// Trailing calendar window: a point at date `d` averages every point
    /// with date in `(d − days, d]`.
    Days(u32),
}

/// Everything the user has currently selected. Held only for the duration
/// of one rendering pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub water_body: String,
    pub parameter: Parameter,
    pub statistic: Statistic,
    /// Inclusive start of the date range.
    pub start: NaiveDate,
    /// Inclusive end of the date range.
    pub end: NaiveDate,
    /// Drop rows whose pixel count falls below `max(5, P25)` of the
    /// selection's count column.
    pub low_count_filter: bool,
    pub rolling: Option<RollingWindow>,
}

impl Selection {
    /// A selection covering the given range with all optional filters off.
    pub fn new(
        water_body: impl Into<String>,
        parameter: Parameter,
        statistic: Statistic,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Selection {
            water_body: water_body.into(),
            parameter,
            statistic,
            start,
            end,
            low_count_filter: false,
            rolling: None,
        }
    }
}
