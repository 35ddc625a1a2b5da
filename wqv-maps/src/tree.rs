//! Read-only filesystem probing of the map image tree.

use crate::grammar::{map_key, MapKey, MapRequest};
use crate::index::MapIndex;
use std::fs;
use std::path::{Path, PathBuf};
use wqv_core::error::{Result, WqError};

/// The on-disk map tree, rooted at the maps folder.
///
/// Only reads: existence checks and directory listings, never writes.
#[derive(Debug, Clone)]
pub struct MapTree {
    root: PathBuf,
}

impl MapTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MapTree { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a request to a root-relative path, probing the filesystem.
    ///
    /// Prefix keys list their directory, sort the names, and take the first
    /// one with the prefix, so resolution does not depend on the OS
    /// directory iteration order. A missing directory is a plain
    /// [`WqError::MapNotFound`], not a fault.
    pub fn resolve(&self, request: &MapRequest) -> Result<String> {
        let key = map_key(request)?;
        match &key {
            MapKey::Exact(rel) => {
                if self.root.join(rel).is_file() {
                    Ok(rel.clone())
                } else {
                    Err(WqError::MapNotFound { path: rel.clone() })
                }
            }
            MapKey::Prefix { dir, prefix } => {
                let mut names: Vec<String> = match fs::read_dir(self.root.join(dir)) {
                    Ok(entries) => entries
                        .filter_map(|entry| entry.ok())
                        .filter_map(|entry| entry.file_name().into_string().ok())
                        .collect(),
                    Err(_) => Vec::new(),
                };
                names.sort();
                names
                    .into_iter()
                    .find(|name| name.starts_with(prefix))
                    .map(|name| format!("{}/{}", dir, name))
                    .ok_or_else(|| WqError::MapNotFound {
                        path: key.display_path(),
                    })
            }
        }
    }

    /// Walk the tree and collect every map image as a root-relative path,
    /// sorted. This is what the CLI serializes for the dashboard's
    /// [`MapIndex`].
    pub fn scan_index(&self) -> Result<MapIndex> {
        let pattern = self.root.join("**").join("*.png");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| WqError::Scan(format!("non-UTF-8 maps root: {:?}", self.root)))?;
        let mut paths = Vec::new();
        for entry in glob::glob(pattern).map_err(|e| WqError::Scan(e.to_string()))? {
            let path = entry.map_err(|e| WqError::Scan(e.to_string()))?;
            if !path.is_file() {
                continue;
            }
            let rel = path
                .strip_prefix(&self.root)
                .map_err(|e| WqError::Scan(e.to_string()))?;
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            paths.push(rel.join("/"));
        }
        log::info!("scanned {} map images under {:?}", paths.len(), self.root);
        Ok(MapIndex::from_paths(paths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::AggregationLevel;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicU32, Ordering};
    use wqv_core::parameter::Parameter;

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// A throwaway tree under the system temp dir, removed on drop.
    struct ScratchTree {
        tree: MapTree,
    }

    impl ScratchTree {
        fn create(files: &[&str]) -> Self {
            let root = std::env::temp_dir().join(format!(
                "wqv-maps-test-{}-{}",
                std::process::id(),
                DIR_SEQ.fetch_add(1, Ordering::SeqCst)
            ));
            for rel in files {
                let path = root.join(rel);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, b"png").unwrap();
            }
            fs::create_dir_all(&root).unwrap();
            ScratchTree {
                tree: MapTree::new(root),
            }
        }
    }

    impl Drop for ScratchTree {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(self.tree.root());
        }
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
    fn test_exact_resolution_and_not_found_path() {
        let scratch = ScratchTree::create(&["42/Turbidity/Annual/Mean/2020_Mean.png"]);
        let hit = request(AggregationLevel::Annual, Parameter::Turbidity, (2020, 6, 15));
        assert_eq!(
            scratch.tree.resolve(&hit).unwrap(),
            "42/Turbidity/Annual/Mean/2020_Mean.png"
        );

        let miss = request(AggregationLevel::Annual, Parameter::Turbidity, (2019, 6, 15));
        match scratch.tree.resolve(&miss) {
            Err(WqError::MapNotFound { path }) => {
                assert_eq!(path, "42/Turbidity/Annual/Mean/2019_Mean.png")
            }
            other => panic!("expected MapNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_monthly_scan_picks_first_sorted_match() {
        let scratch = ScratchTree::create(&[
            "42/Chla/Monthly/Mean/2020_06_late.png",
            "42/Chla/Monthly/Mean/2020_06_early.png",
            "42/Chla/Monthly/Mean/2020_05_other.png",
        ]);
        let req = request(AggregationLevel::Monthly, Parameter::Chla, (2020, 6, 1));
        assert_eq!(
            scratch.tree.resolve(&req).unwrap(),
            "42/Chla/Monthly/Mean/2020_06_early.png"
        );
    }

    #[test]
    fn test_monthly_without_match_reports_prefix() {
        let scratch = ScratchTree::create(&["42/Chla/Monthly/Mean/2020_06_x.png"]);
        let req = request(AggregationLevel::Monthly, Parameter::Chla, (2020, 7, 1));
        match scratch.tree.resolve(&req) {
            Err(WqError::MapNotFound { path }) => {
                assert_eq!(path, "42/Chla/Monthly/Mean/2020_07*")
            }
            other => panic!("expected MapNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_directory_is_not_found_not_a_fault() {
        let scratch = ScratchTree::create(&[]);
        let req = request(AggregationLevel::Monthly, Parameter::Chla, (2020, 6, 1));
        assert!(matches!(
            scratch.tree.resolve(&req),
            Err(WqError::MapNotFound { .. })
        ));
    }

    #[test]
    fn test_scan_index_agrees_with_tree_resolution() {
        let files = [
            "42/Chla/Daily/20200615_Chla_Daily.png",
            "42/Chla/Monthly/Mean/2020_06_composite.png",
            "42/Chla/Quarterly/Mean/2020_2Quarter_Mean.png",
            "42/Chla/Annual/Mean/2020_Mean.png",
            "42/Chla/Annual/Permanence_90/2020_Permanence90.png",
            "42/Chla/2018_2024/Permanence_90/IET_2018_2024.png",
            "42/Chla/Monthly/Mean/IET/2020_06_IET.png",
        ];
        let scratch = ScratchTree::create(&files);
        let index = scratch.tree.scan_index().unwrap();
        assert_eq!(index.len(), files.len());

        for level in AggregationLevel::ALL {
            let req = request(level, Parameter::Chla, (2020, 6, 15));
            let from_tree = scratch.tree.resolve(&req).unwrap();
            let from_index = index.resolve(&req).unwrap();
            assert_eq!(from_tree, from_index, "level {:?}", level);
        }
    }
}
