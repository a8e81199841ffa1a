//! Color map construction and sampling.
//!
//! Three strategies build a map over `[min, max]`: a multicolor spectrum, a
//! two-color gradient through black and a single-color gradient to black.
//! Each strategy can also take its bounds from a scalar grid.

pub mod colormap;
pub mod gradient;
pub mod spectrum;
pub mod style;

pub use colormap::{lerp_color, ColorMap, ControlPoint, Rgb};
pub use gradient::normalize_color;
pub use style::{ColorMapKind, ColorMapStyle, SpectrumParams, MAX_SPECTRUM_POINTS};
