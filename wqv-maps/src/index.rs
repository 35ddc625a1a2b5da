//! In-memory index of the map tree, for consumers without a filesystem.
//!
//! The WASM dashboard cannot list directories, so the CLI scans the tree
//! once ([`crate::tree::MapTree::scan_index`]) and emits a newline-separated
//! listing of relative paths. `MapIndex` resolves requests against that
//! listing with the same semantics as the filesystem probe.

use crate::grammar::{map_key, MapKey, MapRequest};
use wqv_core::error::{Result, WqError};

/// Sorted listing of every map image below the maps root, with `/`
/// separators relative to that root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapIndex {
    files: Vec<String>,
}

impl MapIndex {
    /// Parse a newline-separated listing (the embedded-fixture format).
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_lines(data: &str) -> Self {
        Self::from_paths(
            data.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Build an index from relative paths, sorting and deduplicating.
    pub fn from_paths(mut paths: Vec<String>) -> Self {
        paths.sort();
        paths.dedup();
        MapIndex { files: paths }
    }

    /// Serialize back to the one-path-per-line format.
    pub fn to_lines(&self) -> String {
        let mut out = self.files.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolve a request to a relative path within the indexed tree.
    ///
    /// Exact keys are a membership test. Prefix keys take the
    /// lexicographically first file directly inside the key's directory
    /// whose name starts with the prefix, matching the sorted directory
    /// scan of the filesystem resolver.
    pub fn resolve(&self, request: &MapRequest) -> Result<String> {
        let key = map_key(request)?;
        match &key {
            MapKey::Exact(path) => {
                if self.files.binary_search(path).is_ok() {
                    Ok(path.clone())
                } else {
                    Err(WqError::MapNotFound { path: path.clone() })
                }
            }
            MapKey::Prefix { dir, prefix } => {
                let full = format!("{}/{}", dir, prefix);
                let start = self.files.partition_point(|f| f.as_str() < full.as_str());
                self.files[start..]
                    .iter()
                    .take_while(|f| f.starts_with(&full))
                    .find(|f| !f[dir.len() + 1..].contains('/'))
                    .cloned()
                    .ok_or_else(|| WqError::MapNotFound {
                        path: key.display_path(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::AggregationLevel;
    use chrono::NaiveDate;
    use wqv_core::parameter::Parameter;

    fn index() -> MapIndex {
        MapIndex::from_lines(
            "42/Chla/Monthly/Mean/2020_06_composite.png\n\
             42/Chla/Monthly/Mean/2020_06_final.png\n\
             42/Chla/Monthly/Mean/2020_08_composite.png\n\
             42/Chla/Monthly/Mean/nested/2020_07_composite.png\n\
             42/Turbidity/Annual/Mean/2020_Mean.png\n",
        )
    }

    fn request(level: AggregationLevel, parameter: Parameter, day: (i32, u32, u32)) -> MapRequest {
        MapRequest {
            gid: 42,
            date: NaiveDate::from_ymd_opt(day.0, day.1, day.2).unwrap(),
            parameter,
            level,
        }
    }

    #[test]
    fn test_exact_hit_and_miss() {
        let index = index();
        let hit = request(AggregationLevel::Annual, Parameter::Turbidity, (2020, 6, 15));
        assert_eq!(
            index.resolve(&hit).unwrap(),
            "42/Turbidity/Annual/Mean/2020_Mean.png"
        );

        let miss = request(AggregationLevel::Annual, Parameter::Turbidity, (2021, 6, 15));
        match index.resolve(&miss) {
            Err(WqError::MapNotFound { path }) => {
                assert_eq!(path, "42/Turbidity/Annual/Mean/2021_Mean.png")
            }
            other => panic!("expected MapNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_prefix_takes_first_sorted_match() {
        let index = index();
        let req = request(AggregationLevel::Monthly, Parameter::Chla, (2020, 6, 15));
        assert_eq!(
            index.resolve(&req).unwrap(),
            "42/Chla/Monthly/Mean/2020_06_composite.png"
        );
    }

    #[test]
    fn test_prefix_ignores_files_in_subdirectories() {
        let index = index();
        // The only 2020_07 file sits one level deeper and must not match.
        let req = request(AggregationLevel::Monthly, Parameter::Chla, (2020, 7, 15));
        match index.resolve(&req) {
            Err(WqError::MapNotFound { path }) => {
                assert_eq!(path, "42/Chla/Monthly/Mean/2020_07*")
            }
            other => panic!("expected MapNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_lines() {
        let index = index();
        assert_eq!(MapIndex::from_lines(&index.to_lines()), index);
    }
}
