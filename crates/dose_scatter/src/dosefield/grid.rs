//! Uniform grid utilities for spatial dose evaluation.
//!
//! This module defines [`DoseGrid`], which partitions a rectangular 2D domain
//! into square cells. Dose models and tissue masks are evaluated once per
//! cell center; the grid is immutable after construction.
use glam::DVec2;

/// A uniform 2D grid of square cells over a world-space domain.
#[derive(Clone, Debug)]
pub struct DoseGrid {
    /// World-space origin (lower-left corner), in cm.
    pub origin: DVec2,
    /// Cell size in cm.
    pub cell_size: f64,
    /// Number of cells along X.
    pub width: usize,
    /// Number of cells along Y.
    pub height: usize,
}

impl DoseGrid {
    /// Creates a grid covering `extent` around `center` with the given cell size.
    ///
    /// The grid always has at least one cell per axis.
    pub fn from_extent(extent: DVec2, center: DVec2, cell_size: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell_size must be > 0");
        let width = (extent.x / cell_size).ceil().max(1.0) as usize;
        let height = (extent.y / cell_size).ceil().max(1.0) as usize;
        Self {
            origin: center - extent * 0.5,
            cell_size,
            width,
            height,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Converts a world position to grid cell indices.
    pub fn world_to_index(&self, p: DVec2) -> (isize, isize) {
        let px = (p.x - self.origin.x) / self.cell_size;
        let py = (p.y - self.origin.y) / self.cell_size;
        (px.floor() as isize, py.floor() as isize)
    }

    /// Converts grid cell indices back to the world position of the cell center.
    pub fn index_to_world(&self, ix: isize, iy: isize) -> DVec2 {
        DVec2::new(
            self.origin.x + (ix as f64 + 0.5) * self.cell_size,
            self.origin.y + (iy as f64 + 0.5) * self.cell_size,
        )
    }

    /// Cell-center X coordinates, ascending.
    pub fn xs(&self) -> Vec<f64> {
        (0..self.width)
            .map(|i| self.origin.x + (i as f64 + 0.5) * self.cell_size)
            .collect()
    }

    /// Cell-center Y coordinates, ascending.
    pub fn ys(&self) -> Vec<f64> {
        (0..self.height)
            .map(|i| self.origin.y + (i as f64 + 0.5) * self.cell_size)
            .collect()
    }

    /// Iterates all cell centers in row-major order (Y outer, X inner).
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        (0..self.height).flat_map(move |iy| {
            (0..self.width).map(move |ix| self.index_to_world(ix as isize, iy as isize))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> DoseGrid {
        DoseGrid::from_extent(DVec2::new(4.0, 3.0), DVec2::ZERO, 1.0)
    }

    #[test]
    fn from_extent_computes_dimensions() {
        let grid = sample_grid();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.origin, DVec2::new(-2.0, -1.5));
    }

    #[test]
    fn from_extent_never_produces_an_empty_grid() {
        let grid = DoseGrid::from_extent(DVec2::new(0.3, 0.3), DVec2::ZERO, 1.0);
        assert_eq!((grid.width, grid.height), (1, 1));
    }

    #[test]
    fn index_world_roundtrip() {
        let grid = sample_grid();
        for iy in 0..grid.height as isize {
            for ix in 0..grid.width as isize {
                let p = grid.index_to_world(ix, iy);
                assert_eq!(grid.world_to_index(p), (ix, iy));
            }
        }
    }

    #[test]
    fn coordinate_sequences_are_cell_centers() {
        let grid = sample_grid();
        let xs = grid.xs();
        let ys = grid.ys();
        assert_eq!(xs.len(), grid.width);
        assert_eq!(ys.len(), grid.height);
        assert_eq!(xs[0], -1.5);
        assert_eq!(ys[0], -1.0);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - grid.cell_size).abs() < 1e-12);
        }
    }

    #[test]
    fn positions_cover_every_cell() {
        let grid = sample_grid();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), grid.cell_count());
        assert_eq!(positions[0], grid.index_to_world(0, 0));
        assert_eq!(
            positions[grid.cell_count() - 1],
            grid.index_to_world(grid.width as isize - 1, grid.height as isize - 1)
        );
    }
}
