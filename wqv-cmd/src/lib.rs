//! Command implementations for the water-quality viewer CLI.
//!
//! Everything here is synchronous and local: a snapshot CSV on one side,
//! the pre-rendered map tree on the other.

use clap::Subcommand;

pub mod mapcmd;
pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// List the water bodies present in a snapshot
    WaterBodies {
        /// Path to the observation snapshot CSV
        #[arg(short, long)]
        snapshot: String,
    },

    /// Print the filtered series for one selection
    Series {
        /// Path to the observation snapshot CSV
        #[arg(short, long)]
        snapshot: String,

        /// Water body name, exactly as stored in the snapshot
        #[arg(short, long)]
        water_body: String,

        /// Parameter: chla | turb
        #[arg(short, long, default_value = "chla")]
        parameter: String,

        /// Statistic: mean | median | max | min
        #[arg(long, default_value = "mean")]
        statistic: String,

        /// Inclusive start date (YYYY-MM-DD); snapshot minimum when omitted
        #[arg(long)]
        start: Option<String>,

        /// Inclusive end date (YYYY-MM-DD); snapshot maximum when omitted
        #[arg(long)]
        end: Option<String>,

        /// Drop rows below the max(5, P25) pixel-count threshold
        #[arg(long)]
        low_count_filter: bool,

        /// Overlay a trailing rolling mean over this many calendar days
        #[arg(long, conflicts_with = "rolling_points")]
        rolling_days: Option<u32>,

        /// Overlay a centered rolling mean over this many points
        #[arg(long)]
        rolling_points: Option<usize>,
    },

    /// Resolve and probe the map image for one observation
    Map {
        /// Root of the map image tree
        #[arg(short, long)]
        maps_root: String,

        /// Site/grid id of the clicked observation
        #[arg(short, long)]
        gid: u32,

        /// Observation date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Parameter: chla | turb
        #[arg(short, long, default_value = "chla")]
        parameter: String,

        /// daily | monthly | quarterly | annual | permanence90 | trophic | trophic-monthly
        #[arg(short, long, default_value = "daily")]
        level: String,
    },

    /// Scan the map tree and write the index embedded by the dashboard
    MapIndex {
        /// Root of the map image tree
        #[arg(short, long)]
        maps_root: String,

        /// Output file (one root-relative path per line)
        #[arg(short, long)]
        output: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::WaterBodies { snapshot } => query::run_water_bodies(&snapshot),
        Command::Series {
            snapshot,
            water_body,
            parameter,
            statistic,
            start,
            end,
            low_count_filter,
            rolling_days,
            rolling_points,
        } => query::run_series(query::SeriesArgs {
            snapshot,
            water_body,
            parameter,
            statistic,
            start,
            end,
            low_count_filter,
            rolling_days,
            rolling_points,
        }),
        Command::Map {
            maps_root,
            gid,
            date,
            parameter,
            level,
        } => mapcmd::run_map(&maps_root, gid, &date, &parameter, &level),
        Command::MapIndex { maps_root, output } => mapcmd::run_map_index(&maps_root, &output),
    }
}
