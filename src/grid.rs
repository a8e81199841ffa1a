//! Three-dimensional scalar grids.
//!
//! A grid is a rectangular block of `N[0] x N[1] x N[2]` cells. Each cell
//! carries a small vector of channels: the cell position in channels 0..3
//! and the scalar field in channel [`SCALAR_CHANNEL`]. Color maps built from
//! a grid only look at the scalar channel.

use ndarray::{Array3, Array4, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{ColorStripError, Result};
use crate::logging::log_grid_scan_stats;

/// Index of the scalar field inside a cell
pub const SCALAR_CHANNEL: usize = 4;

/// Minimum number of channels per cell
pub const MIN_CHANNELS: usize = SCALAR_CHANNEL + 1;

/// A 3-D grid of cells stored as `[N0, N1, N2, channels]`
#[derive(Debug, Clone)]
pub struct ScalarGrid {
    cells: Array4<f64>,
}

impl ScalarGrid {
    /// Wrap a full cell array. The last axis must hold at least
    /// [`MIN_CHANNELS`] channels.
    pub fn new(cells: Array4<f64>) -> Result<Self> {
        let channels = cells.shape()[3];
        if channels < MIN_CHANNELS {
            return Err(ColorStripError::InvalidGrid {
                message: format!(
                    "cells carry {} channels, at least {} are required",
                    channels, MIN_CHANNELS
                ),
            });
        }
        Ok(Self { cells })
    }

    /// Build a grid from scalar values only; positions are set to the cell
    /// indices.
    pub fn from_scalars(values: Array3<f64>) -> Self {
        let (n0, n1, n2) = values.dim();
        let mut cells = Array4::<f64>::zeros((n0, n1, n2, MIN_CHANNELS));
        for ((i, j, k), &v) in values.indexed_iter() {
            cells[[i, j, k, 0]] = i as f64;
            cells[[i, j, k, 1]] = j as f64;
            cells[[i, j, k, 2]] = k as f64;
            cells[[i, j, k, SCALAR_CHANNEL]] = v;
        }
        Self { cells }
    }

    /// Build a grid from dimensions and a flat, row-major list of scalars
    pub fn from_flat(dims: [usize; 3], values: Vec<f64>) -> Result<Self> {
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| ColorStripError::InvalidGrid {
                message: format!("dims {:?} overflow the cell count", dims),
            })?;
        if values.len() != expected {
            return Err(ColorStripError::InvalidGrid {
                message: format!(
                    "dims {:?} need {} values, got {}",
                    dims,
                    expected,
                    values.len()
                ),
            });
        }
        let values = Array3::from_shape_vec((dims[0], dims[1], dims[2]), values).map_err(|e| {
            ColorStripError::InvalidGrid {
                message: e.to_string(),
            }
        })?;
        Ok(Self::from_scalars(values))
    }

    /// Grid dimensions `N[0], N[1], N[2]`
    pub fn dims(&self) -> [usize; 3] {
        let shape = self.cells.shape();
        [shape[0], shape[1], shape[2]]
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        let [n0, n1, n2] = self.dims();
        n0 * n1 * n2
    }

    /// Scalar value of cell `(i, j, k)`, if in bounds
    pub fn scalar(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        self.cells.get([i, j, k, SCALAR_CHANNEL]).copied()
    }

    /// View of the scalar field
    pub fn scalars(&self) -> ArrayView3<'_, f64> {
        self.cells.index_axis(Axis(3), SCALAR_CHANNEL)
    }

    /// Minimum and maximum of the scalar field over every cell.
    ///
    /// Non-finite samples are skipped. A grid without finite samples
    /// reports `(0.0, 0.0)`.
    pub fn value_range(&self) -> (f64, f64) {
        let mut range: Option<(f64, f64)> = None;

        for &v in self.scalars().iter() {
            if !v.is_finite() {
                continue;
            }
            range = Some(match range {
                None => (v, v),
                Some((min, max)) => (min.min(v), max.max(v)),
            });
        }

        let (min, max) = range.unwrap_or((0.0, 0.0));
        log_grid_scan_stats(self.dims(), self.cell_count(), min, max);
        (min, max)
    }
}

/// On-disk grid description used by the command-line tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    /// Grid dimensions
    pub dims: [usize; 3],
    /// Scalars in row-major `(i, j, k)` order
    pub values: Vec<f64>,
}

impl GridFile {
    /// Load a grid description from a JSON file
    pub fn load(path: &std::path::Path) -> Result<ScalarGrid> {
        let content = std::fs::read_to_string(path)?;
        let file: GridFile = serde_json::from_str(&content)?;
        ScalarGrid::from_flat(file.dims, file.values)
    }
}
