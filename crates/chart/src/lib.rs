//! lineview's charting library.
//!
//! Lays labeled time-series out as an interactive multi-series line
//! chart and writes it as a self-contained SVG page for the browser.
//! Scales, series colors, line paths, hover regions, and transition
//! geometry are all computed here; the page carries only a small static
//! script that wires pointer events to the tooltip elements.

#![warn(missing_docs)]

pub(crate) mod format;
pub(crate) mod path;
pub(crate) mod svg;

pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod html;
pub mod partition;
pub mod render;
pub mod scale;
pub mod scene;
