//! Map-image path resolution for the water-quality viewer.
//!
//! Pre-rendered map products live in a directory tree keyed by site id,
//! parameter folder, and aggregation level. This crate maps a clicked
//! observation (site id + date) plus the active parameter and aggregation
//! level to the expected image path, and reports whether the image exists.
//!
//! Resolution is split in two layers so the same grammar serves both the
//! native CLI and the WASM dashboard:
//! - [`grammar`] builds the relative path (or listing prefix) purely;
//! - [`tree`] probes the real filesystem, [`index`] probes an embedded
//!   listing of the same tree.

pub mod grammar;
pub mod index;
pub mod level;
#[cfg(feature = "fs")]
pub mod tree;
