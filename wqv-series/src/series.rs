//! The Series Builder: snapshot + selection → chartable series.

use crate::rolling::{self, RollingPoint};
use crate::selection::{RollingWindow, Selection};
use chrono::NaiveDate;
use serde::Serialize;
use wqv_core::error::{Result, WqError};
use wqv_core::observation::{Observation, ObservationTable, VALUE_SCALE};
use wqv_core::parameter::Statistic;

/// Floor for the low-count threshold: rows backed by fewer valid pixels
/// than this are never trusted, whatever the percentile says.
pub const MIN_PIXEL_COUNT: f64 = 5.0;

/// One chartable measurement, already scaled to physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub gid: u32,
    pub value: f64,
}

/// Summary statistics over the final point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub points: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// The built series: ordered points, optional rolling overlay, summary.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub points: Vec<SeriesPoint>,
    pub rolling: Option<Vec<RollingPoint>>,
    pub summary: SeriesSummary,
    /// The pixel-count threshold that was applied, when the filter was on.
    pub count_threshold: Option<f64>,
}

/// Build the filtered, scaled series for one selection.
///
/// Stages run in order: column resolution, water-body restriction, inclusive
/// date-range restriction, non-positive-value drop, optional low-count
/// filter, (date, gid) sort, ÷100 unit scaling. Any stage that empties the
/// row set fails with the user-visible [`WqError::EmptyResult`] naming that
/// stage — the chart never goes silently blank.
pub fn build_series(table: &ObservationTable, selection: &Selection) -> Result<Series> {
    let value_column = table
        .schema()
        .resolve(selection.parameter, selection.statistic)?;
    let count_column = if selection.low_count_filter {
        Some(table.schema().resolve(selection.parameter, Statistic::Count)?)
    } else {
        None
    };

    let mut rows: Vec<&Observation> = table
        .rows()
        .iter()
        .filter(|row| row.water_body == selection.water_body)
        .collect();
    if rows.is_empty() {
        return Err(WqError::EmptyResult {
            stage: "water body",
        });
    }

    rows.retain(|row| row.date >= selection.start && row.date <= selection.end);
    if rows.is_empty() {
        return Err(WqError::EmptyResult {
            stage: "date range",
        });
    }

    rows.retain(|row| matches!(row.value(value_column), Some(v) if v > 0.0));
    if rows.is_empty() {
        return Err(WqError::EmptyResult {
            stage: "positive value",
        });
    }

    let mut count_threshold = None;
    if let Some(count_column) = count_column {
        let mut counts: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.value(count_column))
            .collect();
        counts.sort_by(f64::total_cmp);
        let threshold = if counts.is_empty() {
            MIN_PIXEL_COUNT
        } else {
            percentile(&counts, 0.25).max(MIN_PIXEL_COUNT)
        };
        rows.retain(|row| matches!(row.value(count_column), Some(c) if c >= threshold));
        if rows.is_empty() {
            return Err(WqError::EmptyResult {
                stage: "pixel count",
            });
        }
        log::debug!(
            "pixel-count threshold {:.1}: {} rows kept",
            threshold,
            rows.len()
        );
        count_threshold = Some(threshold);
    }

    rows.sort_by_key(|row| (row.date, row.gid));

    let points: Vec<SeriesPoint> = rows
        .iter()
        .filter_map(|row| {
            row.value(value_column).map(|raw| SeriesPoint {
                date: row.date,
                gid: row.gid,
                value: raw / VALUE_SCALE,
            })
        })
        .collect();

    let rolling = selection.rolling.map(|window| match window {
        RollingWindow::Points(n) => rolling::centered_mean(&points, n),
        RollingWindow::Days(days) => rolling::trailing_mean_days(&points, days),
    });

    let summary = summarize(&points);
    Ok(Series {
        points,
        rolling,
        summary,
        count_threshold,
    })
}

fn summarize(points: &[SeriesPoint]) -> SeriesSummary {
    // build_series never gets here with an empty set; every emptying stage
    // has already returned EmptyResult.
    let values = points.iter().map(|p| p.value);
    SeriesSummary {
        points: points.len(),
        mean: values.clone().sum::<f64>() / points.len() as f64,
        min: values.clone().fold(f64::INFINITY, f64::min),
        max: values.fold(f64::NEG_INFINITY, f64::max),
        first_date: points[0].date,
        last_date: points[points.len() - 1].date,
    }
}

/// Percentile by linear interpolation between order statistics.
/// `sorted` must be ascending and non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wqv_core::parameter::Parameter;

    const SNAPSHOT: &str = "\
water_body,date,gid,chla_mean,chla_media,chla_count,turb_mean,turb_count
Açude Castanhão,2020-01-05,42,950.0,940.0,80,610.0,80
Açude Castanhão,2020-02-05,42,1025.0,1000.0,4,777.0,4
Açude Castanhão,2020-03-05,42,-5.0,880.0,90,512.0,90
Açude Castanhão,2020-04-05,42,830.0,820.0,30,498.0,30
Açude Castanhão,2020-05-05,42,910.0,905.0,20,505.0,20
Açude Orós,2020-02-10,7,700.0,690.0,100,400.0,100
";

    fn table() -> ObservationTable {
        ObservationTable::from_csv_str(SNAPSHOT).unwrap()
    }

    fn selection() -> Selection {
        Selection::new(
            "Açude Castanhão",
            Parameter::Chla,
            Statistic::Mean,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_values_scaled_by_one_hundred() {
        let series = build_series(&table(), &selection()).unwrap();
        assert_eq!(series.points[0].value, 9.5);
    }

    #[test]
    fn test_turbidity_scaled_like_chla() {
        // Both parameters share the ×100 storage convention; turbidity must
        // get the same ÷100 as chlorophyll-a.
        let mut sel = selection();
        sel.parameter = Parameter::Turbidity;
        let series = build_series(&table(), &sel).unwrap();
        assert_eq!(series.points[0].value, 6.10);
        assert!(series.points.iter().all(|p| p.value < 10.0));
    }

    #[test]
    fn test_water_body_exact_match_only() {
        let series = build_series(&table(), &selection()).unwrap();
        assert!(series.points.iter().all(|p| p.gid == 42));
    }

    #[test]
    fn test_date_range_inclusive_on_both_ends() {
        let mut sel = selection();
        sel.start = NaiveDate::from_ymd_opt(2020, 2, 5).unwrap();
        sel.end = NaiveDate::from_ymd_opt(2020, 4, 5).unwrap();
        let series = build_series(&table(), &sel).unwrap();
        let dates: Vec<NaiveDate> = series.points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2020, 2, 5).unwrap(),
                NaiveDate::from_ymd_opt(2020, 4, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn test_non_positive_values_dropped() {
        let series = build_series(&table(), &selection()).unwrap();
        // The 2020-03-05 row has a negative mean and must not survive.
        assert!(series.points.iter().all(|p| p.value > 0.0));
        assert_eq!(series.summary.points, 4);
    }

    #[test]
    fn test_median_resolves_through_legacy_alias() {
        // The fixture only carries the truncated `chla_media` column.
        let mut sel = selection();
        sel.statistic = Statistic::Median;
        let series = build_series(&table(), &sel).unwrap();
        assert_eq!(series.points[0].value, 9.4);
    }

    #[test]
    fn test_missing_column_is_column_not_found() {
        let mut sel = selection();
        sel.statistic = Statistic::Max;
        assert!(matches!(
            build_series(&table(), &sel),
            Err(WqError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_low_count_threshold_is_max_of_floor_and_p25() {
        let mut sel = selection();
        sel.low_count_filter = true;
        let series = build_series(&table(), &sel).unwrap();
        // Surviving counts are [80, 4, 30, 20] -> sorted [4, 20, 30, 80],
        // P25 by linear interpolation = 4 + 0.75 * 16 = 16.
        assert_eq!(series.count_threshold, Some(16.0));
        assert_eq!(series.summary.points, 3);
    }

    #[test]
    fn test_low_count_floor_applies() {
        let snapshot = "\
water_body,date,gid,chla_mean,chla_count
Lago,2020-01-01,1,100.0,1
Lago,2020-01-02,1,100.0,2
Lago,2020-01-03,1,100.0,3
Lago,2020-01-04,1,100.0,4
";
        let table = ObservationTable::from_csv_str(snapshot).unwrap();
        let mut sel = Selection::new(
            "Lago",
            Parameter::Chla,
            Statistic::Mean,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 31).unwrap(),
        );
        sel.low_count_filter = true;
        // P25 of [1,2,3,4] is 1.75, but the floor of 5 wins and empties
        // the set.
        match build_series(&table, &sel) {
            Err(WqError::EmptyResult { stage }) => assert_eq!(stage, "pixel count"),
            other => panic!("expected EmptyResult, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_date_range_names_its_stage() {
        let mut sel = selection();
        sel.start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        sel.end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
        match build_series(&table(), &sel) {
            Err(WqError::EmptyResult { stage }) => assert_eq!(stage, "date range"),
            other => panic!("expected EmptyResult, got {:?}", other),
        }
    }

    #[test]
    fn test_points_sorted_ascending_by_date() {
        let series = build_series(&table(), &selection()).unwrap();
        assert!(series
            .points
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn test_rolling_overlay_spans_the_series() {
        let mut sel = selection();
        sel.rolling = Some(RollingWindow::Days(45));
        let series = build_series(&table(), &sel).unwrap();
        let rolling = series.rolling.unwrap();
        assert_eq!(rolling.len(), series.points.len());
        // 2020-02-05 trails 2020-01-05 within 45 days: mean of 9.5 and 10.25.
        assert_eq!(rolling[1].value, 9.875);
    }

    #[test]
    fn test_summary_statistics() {
        let series = build_series(&table(), &selection()).unwrap();
        let summary = series.summary;
        assert_eq!(summary.points, 4);
        assert_eq!(summary.min, 8.3);
        assert_eq!(summary.max, 10.25);
        assert_eq!(
            summary.first_date,
            NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
        );
        assert_eq!(
            summary.last_date,
            NaiveDate::from_ymd_opt(2020, 5, 5).unwrap()
        );
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        assert_eq!(percentile(&[4.0, 20.0, 30.0, 80.0], 0.25), 16.0);
        assert_eq!(percentile(&[10.0], 0.25), 10.0);
        assert_eq!(percentile(&[1.0, 3.0], 0.5), 2.0);
    }
}
