//! Rolling-mean overlays for irregularly sampled series.

use crate::series::SeriesPoint;
use chrono::NaiveDate;
use serde::Serialize;

/// One point of a rolling-mean overlay, aligned to the scatter x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Centered rolling mean over a fixed number of points.
///
/// The window shrinks at the edges down to a single period, so the overlay
/// spans the same x-range as the scatter.
pub fn centered_mean(points: &[SeriesPoint], window: usize) -> Vec<RollingPoint> {
    let window = window.max(1);
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let lo = i.saturating_sub((window - 1) / 2);
            let hi = usize::min(points.len(), i + window / 2 + 1);
            RollingPoint {
                date: point.date,
                value: mean(&points[lo..hi]),
            }
        })
        .collect()
}

/// Trailing calendar-window rolling mean.
///
/// A point at date `d` averages every point with date in `(d − days, d]`,
/// whatever the sampling interval. Points sharing `d` get the same value.
pub fn trailing_mean_days(points: &[SeriesPoint], days: u32) -> Vec<RollingPoint> {
    let span = i64::from(days.max(1));
    let mut result = Vec::with_capacity(points.len());
    let mut start = 0usize;
    for (i, point) in points.iter().enumerate() {
        while (point.date - points[start].date).num_days() >= span {
            start += 1;
        }
        // Rows on the same date as the labeled point sit just past `i`.
        let mut end = i + 1;
        while end < points.len() && points[end].date == point.date {
            end += 1;
        }
        result.push(RollingPoint {
            date: point.date,
            value: mean(&points[start..end]),
        });
    }
    result
}

fn mean(points: &[SeriesPoint]) -> f64 {
    points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64
}
