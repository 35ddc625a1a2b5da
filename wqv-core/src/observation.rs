//! Observation rows and the immutable snapshot table.

use crate::error::{Result, WqError};
use crate::schema::{ColumnId, Schema};
use chrono::NaiveDate;
use std::path::Path;
use wqv_utils::dates;

/// Raw snapshot values are stored pre-multiplied by this factor.
/// Divide by it to obtain physical units (µg/L or NTU) — uniformly for
/// both parameters.
pub const VALUE_SCALE: f64 = 100.0;

/// Water body selected by default when present in the snapshot.
pub const DEFAULT_WATER_BODY: &str = "Açude Castanhão";

/// One snapshot row: a (water body, date, site) cell with its statistic
/// values stored positionally per the snapshot [`Schema`].
#[derive(Debug, Clone)]
pub struct Observation {
    pub water_body: String,
    pub date: NaiveDate,
    pub gid: u32,
    values: Vec<Option<f64>>,
}

impl Observation {
    /// Raw (still ×100) value of a resolved column, if present.
    pub fn value(&self, column: ColumnId) -> Option<f64> {
        self.values.get(column.index()).copied().flatten()
    }
}

/// The full observation snapshot, loaded once at startup and immutable
/// thereafter. All filtering happens over borrowed rows; nothing here
/// mutates after construction.
#[derive(Debug)]
pub struct ObservationTable {
    schema: Schema,
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Load a snapshot from CSV text (the embedded-fixture path used by the
    /// WASM dashboard).
    pub fn from_csv_str(data: &str) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_bytes());
        Self::from_reader(reader)
    }

    /// Load a snapshot from a CSV file on disk (the CLI path).
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let schema = Schema::from_headers(reader.headers()?.iter())?;
        let width = schema.columns().len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |index: usize| record.get(index).unwrap_or("").trim();

            let water_body = field(schema.water_body_index());
            if water_body.is_empty() {
                // Rows without a water body are unusable for every view.
                continue;
            }
            let date_field = field(schema.date_index());
            let date = dates::parse_date(date_field)
                .map_err(|_| WqError::Date(date_field.to_string()))?;
            let gid_field = field(schema.gid_index());
            let gid: u32 = gid_field
                .parse()
                .map_err(|_| WqError::Snapshot(format!("invalid site id '{}'", gid_field)))?;

            let mut values = vec![None; width];
            for (index, slot) in values.iter_mut().enumerate() {
                if index == schema.water_body_index()
                    || index == schema.date_index()
                    || index == schema.gid_index()
                {
                    continue;
                }
                *slot = field(index).parse::<f64>().ok();
            }

            rows.push(Observation {
                water_body: water_body.to_string(),
                date,
                gid,
                values,
            });
        }
        log::info!("loaded snapshot: {} observations", rows.len());
        Ok(ObservationTable { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted, deduplicated list of selectable water bodies.
    pub fn water_bodies(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.water_body.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// The initially selected water body: [`DEFAULT_WATER_BODY`] when the
    /// snapshot contains it, otherwise the first name alphabetically.
    pub fn default_water_body(&self) -> Option<String> {
        let names = self.water_bodies();
        if names.iter().any(|n| n == DEFAULT_WATER_BODY) {
            return Some(DEFAULT_WATER_BODY.to_string());
        }
        names.into_iter().next()
    }

    /// Earliest and latest observation dates across the whole snapshot.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.date).min()?;
        let max = self.rows.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}
