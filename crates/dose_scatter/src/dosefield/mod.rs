//! Spatial dose-field primitives: grids, rasters, and phantom tissue masks.
//!
//! This module groups the immutable 2D evaluation domain ([`DoseGrid`]), the
//! per-cell scalar storage dose models write into ([`DoseRaster`]), and the
//! concentric-disc anatomy that partitions the domain into tissues
//! ([`Phantom`], [`TissueMasks`]).
pub mod grid;
pub mod phantom;
pub mod raster;

pub use grid::DoseGrid;
pub use phantom::{Phantom, Tissue, TissueMasks};
pub use raster::DoseRaster;
