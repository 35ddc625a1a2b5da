//! Series building for the water-quality viewer.
//!
//! This crate turns the immutable observation snapshot plus one ephemeral
//! [`Selection`](selection::Selection) into the ordered series the chart
//! renders: filtered, unit-scaled points, an optional rolling-mean overlay,
//! and summary statistics.

pub mod rolling;
pub mod selection;
pub mod series;
