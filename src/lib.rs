//! # colorstrip
//!
//! Value-to-color maps for scientific scalar data, and a cached gradient
//! strip renderer to show them.
//!
//! ## Key Features
//!
//! - **Three construction strategies**: a multicolor spectrum, a two-color
//!   gradient through black and a single-color gradient to black
//! - **Grid-range construction**: bounds taken from a full scan of a 3-D
//!   scalar grid
//! - **Piecewise-linear sampling** with clamping at both ends
//! - **Cached strip rendering**: rasterized once per size and map instance
//!
//! ## Architecture
//!
//! - **Engine** (`colormaps`, `grid`): builds and queries color maps
//! - **Renderer** (`render`): draws a map as a labelled gradient strip
//! - **Panel** (`panel`): the strip plus two range entries sharing one map

pub mod colormaps;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod logging;
pub mod panel;
pub mod render;

pub use colormaps::{ColorMap, ColorMapKind, ColorMapStyle, ControlPoint, Rgb, SpectrumParams};
pub use config::Config;
pub use error::{ColorStripError, Result};
pub use grid::ScalarGrid;
pub use logging::{
    generate_id, init_tracing, log_error, log_grid_scan_stats, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use panel::{BoundEdge, ColorMapPanel, SceneView};
pub use render::{DrawSurface, GradientStrip, HostWidget, RasterSurface};
