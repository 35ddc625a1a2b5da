//! Snapshot queries: water-body listing and series printing.

use std::path::Path;
use wqv_core::observation::ObservationTable;
use wqv_core::parameter::{Parameter, Statistic};
use wqv_series::selection::{RollingWindow, Selection};
use wqv_series::series::build_series;
use wqv_utils::dates;

/// List the selectable water bodies of a snapshot, one per line.
pub fn run_water_bodies(snapshot: &str) -> anyhow::Result<()> {
    let table = ObservationTable::from_csv_path(Path::new(snapshot))?;
    log::info!("{} observations loaded", table.len());
    for name in table.water_bodies() {
        println!("{}", name);
    }
    Ok(())
}

/// Arguments of the `series` subcommand.
pub struct SeriesArgs {
    pub snapshot: String,
    pub water_body: String,
    pub parameter: String,
    pub statistic: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub low_count_filter: bool,
    pub rolling_days: Option<u32>,
    pub rolling_points: Option<usize>,
}

/// Build and print the filtered series for one selection.
///
/// User-visible conditions (empty result, missing column) are printed as
/// plain messages and exit cleanly; only loading faults propagate.
pub fn run_series(args: SeriesArgs) -> anyhow::Result<()> {
    let table = ObservationTable::from_csv_path(Path::new(&args.snapshot))?;
    let parameter = Parameter::parse(&args.parameter)
        .ok_or_else(|| anyhow::anyhow!("unknown parameter '{}'", args.parameter))?;
    let statistic = Statistic::parse(&args.statistic)
        .ok_or_else(|| anyhow::anyhow!("unknown statistic '{}'", args.statistic))?;
    let (snapshot_min, snapshot_max) = table
        .date_bounds()
        .ok_or_else(|| anyhow::anyhow!("snapshot contains no observations"))?;
    let start = match &args.start {
        Some(s) => dates::parse_date(s)?,
        None => snapshot_min,
    };
    let end = match &args.end {
        Some(s) => dates::parse_date(s)?,
        None => snapshot_max,
    };

    let mut selection = Selection::new(args.water_body, parameter, statistic, start, end);
    selection.low_count_filter = args.low_count_filter;
    selection.rolling = match (args.rolling_days, args.rolling_points) {
        (Some(days), _) => Some(RollingWindow::Days(days)),
        (None, Some(points)) => Some(RollingWindow::Points(points)),
        (None, None) => None,
    };

    match build_series(&table, &selection) {
        Ok(series) => {
            if let Some(threshold) = series.count_threshold {
                log::info!("pixel-count threshold: {:.1}", threshold);
            }
            let rolling = series.rolling.as_deref().unwrap_or(&[]);
            for (i, point) in series.points.iter().enumerate() {
                match rolling.get(i) {
                    Some(r) => println!(
                        "{}\t{}\t{:.2}\t{:.2}",
                        dates::format_date(&point.date),
                        point.gid,
                        point.value,
                        r.value
                    ),
                    None => println!(
                        "{}\t{}\t{:.2}",
                        dates::format_date(&point.date),
                        point.gid,
                        point.value
                    ),
                }
            }
            let s = series.summary;
            println!(
                "# {} points, mean {:.2}, min {:.2}, max {:.2} {} ({} to {})",
                s.points,
                s.mean,
                s.min,
                s.max,
                parameter.unit(),
                dates::format_date(&s.first_date),
                dates::format_date(&s.last_date),
            );
            Ok(())
        }
        Err(e) if e.is_user_condition() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
