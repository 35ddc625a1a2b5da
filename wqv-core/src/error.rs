/// Error types for the water-quality viewer crates
use thiserror::Error;

/// Main error type for viewer operations.
///
/// The first five variants are user-visible conditions rather than faults:
/// they are always rendered as plain messages and never terminate the
/// process.
#[derive(Error, Debug)]
pub enum WqError {
    /// Requested statistic column absent from the snapshot schema
    #[error("no data column for {parameter} {statistic} (tried: {tried})")]
    ColumnNotFound {
        parameter: String,
        statistic: String,
        tried: String,
    },

    /// A filter stage removed every remaining row
    #[error("no data for this combination (empty after {stage} filter)")]
    EmptyResult { stage: &'static str },

    /// The resolved map image does not exist on disk or in the index
    #[error("map not found: {path}")]
    MapNotFound { path: String },

    /// The requested map product is not produced for this parameter
    #[error("{level} maps are not available for {parameter}")]
    MapUnavailable { parameter: String, level: String },

    /// No chart point has been clicked yet
    #[error("click a point on the chart to see its map")]
    NoSelection,

    /// The snapshot file is structurally invalid
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// Failed to parse CSV data
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Date parsing failed
    #[error("failed to parse date: {0}")]
    Date(String),

    /// Walking the map image tree failed
    #[error("map tree scan failed: {0}")]
    Scan(String),

    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WqError {
    /// Whether this error is a user-visible condition (shown as a message)
    /// as opposed to a loading/configuration fault.
    pub fn is_user_condition(&self) -> bool {
        matches!(
            self,
            WqError::ColumnNotFound { .. }
                | WqError::EmptyResult { .. }
                | WqError::MapNotFound { .. }
                | WqError::MapUnavailable { .. }
                | WqError::NoSelection
        )
    }
}

/// Type alias for Results using WqError
pub type Result<T> = std::result::Result<T, WqError>;
