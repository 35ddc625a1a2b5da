//! Shared Dioxus components and D3.js bridge for the water-quality viewer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js scatter chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, chart container, map panel)

pub mod components;
pub mod js_bridge;
pub mod state;
