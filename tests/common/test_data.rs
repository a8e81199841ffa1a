//! Test data generation utilities.
//!
//! Scalar grids with known value ranges, in memory and as grid files.

#![allow(dead_code)]

use colorstrip::grid::GridFile;
use colorstrip::ScalarGrid;
use ndarray::Array3;
use std::path::Path;

/// A grid whose scalar field spans exactly `[min, max]`.
///
/// Values rise linearly along the flattened index, so the first cell holds
/// `min` and the last cell holds `max`.
pub fn linear_grid(dims: (usize, usize, usize), min: f64, max: f64) -> ScalarGrid {
    let count = dims.0 * dims.1 * dims.2;
    let step = if count > 1 {
        (max - min) / (count - 1) as f64
    } else {
        0.0
    };
    let values = Array3::from_shape_fn(dims, |(i, j, k)| {
        let index = (i * dims.1 + j) * dims.2 + k;
        if index + 1 == count {
            max
        } else {
            min + step * index as f64
        }
    });
    ScalarGrid::from_scalars(values)
}

/// A radial density-like field: highest at the grid centre
pub fn radial_grid(n: usize) -> ScalarGrid {
    let centre = (n as f64 - 1.0) / 2.0;
    let values = Array3::from_shape_fn((n, n, n), |(i, j, k)| {
        let d2 = (i as f64 - centre).powi(2)
            + (j as f64 - centre).powi(2)
            + (k as f64 - centre).powi(2);
        (-d2 / 4.0).exp()
    });
    ScalarGrid::from_scalars(values)
}

/// Write a grid file with the given dimensions and values
pub fn write_grid_file(path: &Path, dims: [usize; 3], values: Vec<f64>) -> std::io::Result<()> {
    let file = GridFile { dims, values };
    let json = serde_json::to_string(&file)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_grid_range() {
        let grid = linear_grid((3, 4, 5), -2.5, 7.0);
        assert_eq!(grid.value_range(), (-2.5, 7.0));
    }

    #[test]
    fn test_radial_grid_peak() {
        let grid = radial_grid(5);
        let (_, max) = grid.value_range();
        assert_eq!(grid.scalar(2, 2, 2), Some(max));
    }
}
