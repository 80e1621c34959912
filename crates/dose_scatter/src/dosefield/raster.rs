//! Raster storage for scalar dose values.
//!
//! Stores one sample per cell of a [`DoseGrid`], row-major. A raster is
//! written once by a dose model and normalized once; it is read-only after
//! that.
use glam::DVec2;

use super::grid::DoseGrid;

/// A dose raster: one floating-point value per grid cell.
#[derive(Clone, Debug)]
pub struct DoseRaster {
    pub grid: DoseGrid,
    pub data: Vec<f64>,
}

impl DoseRaster {
    /// Creates a zero-filled raster over the given grid.
    pub fn new(grid: DoseGrid) -> Self {
        let len = grid.cell_count();
        Self {
            grid,
            data: vec![0.0; len],
        }
    }

    /// Raster size as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.grid.width, self.grid.height)
    }

    /// Value at the given cell indices, `0.0` outside the raster.
    pub fn get(&self, ix: isize, iy: isize) -> f64 {
        let (w, h) = self.size();
        if ix < 0 || iy < 0 || ix >= w as isize || iy >= h as isize {
            return 0.0;
        }
        self.data[(iy as usize) * w + (ix as usize)]
    }

    /// Sets the value at the given cell indices; out-of-bounds writes are ignored.
    pub fn set(&mut self, ix: isize, iy: isize, value: f64) {
        let (w, h) = self.size();
        if ix < 0 || iy < 0 || ix >= w as isize || iy >= h as isize {
            return;
        }
        self.data[(iy as usize) * w + (ix as usize)] = value;
    }

    /// Samples the raster at a world position, rounding to the nearest cell.
    pub fn sample_domain(&self, p: DVec2) -> f64 {
        let (ix, iy) = self.grid.world_to_index(p);
        self.get(ix, iy)
    }

    /// Maximum value over all cells.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Rescales the raster so its maximum equals `peak`.
    ///
    /// Returns `false` without touching the data when the current maximum is
    /// not positive or `peak` is not finite.
    pub fn normalize_to(&mut self, peak: f64) -> bool {
        let max = self.max();
        if !(max > 0.0) || !peak.is_finite() {
            return false;
        }
        let scale = peak / max;
        for v in &mut self.data {
            *v *= scale;
        }
        true
    }
}
