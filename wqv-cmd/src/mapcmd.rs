//! Map resolution commands: single-image probing and tree indexing.

use std::fs;
use std::path::Path;
use wqv_core::parameter::Parameter;
use wqv_maps::grammar::MapRequest;
use wqv_maps::level::AggregationLevel;
use wqv_maps::tree::MapTree;
use wqv_utils::dates;

/// Resolve the map image for one observation and print its path, or the
/// user-visible condition when it is missing or not produced.
pub fn run_map(
    maps_root: &str,
    gid: u32,
    date: &str,
    parameter: &str,
    level: &str,
) -> anyhow::Result<()> {
    let parameter = Parameter::parse(parameter)
        .ok_or_else(|| anyhow::anyhow!("unknown parameter '{}'", parameter))?;
    let level = AggregationLevel::parse(level)
        .ok_or_else(|| anyhow::anyhow!("unknown aggregation level '{}'", level))?;
    let date = dates::parse_date(date)?;

    let tree = MapTree::new(maps_root);
    let request = MapRequest {
        gid,
        date,
        parameter,
        level,
    };
    match tree.resolve(&request) {
        Ok(rel) => {
            println!("{}", tree.root().join(rel).display());
            Ok(())
        }
        Err(e) if e.is_user_condition() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Scan the map tree and write the newline-separated index consumed by the
/// dashboard build.
pub fn run_map_index(maps_root: &str, output: &str) -> anyhow::Result<()> {
    let tree = MapTree::new(maps_root);
    let index = tree.scan_index()?;
    fs::write(Path::new(output), index.to_lines())?;
    println!("indexed {} map images into {}", index.len(), output);
    Ok(())
}
