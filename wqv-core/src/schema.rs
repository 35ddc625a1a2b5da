//! Snapshot schema and typed column resolution.
//!
//! Statistic columns are named `{prefix}_{suffix}` (e.g. `turb_max`). The
//! median statistic additionally has a legacy truncated alias (`chla_media`)
//! left over from a field-name truncation in older snapshots. Resolution
//! always tries the canonical name first and the alias second; a miss is the
//! typed [`WqError::ColumnNotFound`] condition, never a guessed name.

use crate::error::{Result, WqError};
use crate::parameter::{Parameter, Statistic};

/// Name of the water-body column in the snapshot header.
pub const WATER_BODY_COLUMN: &str = "water_body";
/// Name of the observation-date column in the snapshot header.
pub const DATE_COLUMN: &str = "date";
/// Name of the site/grid-id column in the snapshot header.
pub const GID_COLUMN: &str = "gid";

/// Index of a resolved column within a snapshot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The column layout of one loaded snapshot.
#[derive(Debug, Clone)]
pub struct Schema {
    names: Vec<String>,
    water_body: usize,
    date: usize,
    gid: usize,
}

impl Schema {
    /// Build a schema from a snapshot header row.
    ///
    /// The three identity columns must be present; statistic columns are
    /// resolved lazily so a snapshot missing, say, `turb_min` loads fine
    /// until that statistic is requested.
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();
        let position = |name: &str| -> Result<usize> {
            names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| WqError::Snapshot(format!("missing required column '{}'", name)))
        };
        let water_body = position(WATER_BODY_COLUMN)?;
        let date = position(DATE_COLUMN)?;
        let gid = position(GID_COLUMN)?;
        Ok(Schema {
            names,
            water_body,
            date,
            gid,
        })
    }

    /// Resolve the concrete column for a (parameter, statistic) pair.
    ///
    /// Tries `{prefix}_{suffix}`, then the legacy alias when the statistic
    /// has one.
    pub fn resolve(&self, parameter: Parameter, statistic: Statistic) -> Result<ColumnId> {
        let prefix = parameter.column_prefix();
        let mut candidates = vec![format!("{}_{}", prefix, statistic.column_suffix())];
        if let Some(legacy) = statistic.legacy_suffix() {
            candidates.push(format!("{}_{}", prefix, legacy));
        }
        for candidate in &candidates {
            if let Some(pos) = self.names.iter().position(|n| n == candidate) {
                return Ok(ColumnId(pos));
            }
        }
        Err(WqError::ColumnNotFound {
            parameter: parameter.label().to_string(),
            statistic: statistic.label().to_string(),
            tried: candidates.join(", "),
        })
    }

    /// Name of a resolved column.
    pub fn column_name(&self, column: ColumnId) -> &str {
        &self.names[column.0]
    }

    /// All column names, in snapshot order.
    pub fn columns(&self) -> &[String] {
        &self.names
    }

    pub fn water_body_index(&self) -> usize {
        self.water_body
    }

    pub fn date_index(&self) -> usize {
        self.date
    }

    pub fn gid_index(&self) -> usize {
        self.gid
    }
}
