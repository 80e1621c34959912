//! Concentric-disc phantom anatomy and tissue masks.
//!
//! The phantom is a body disc with a centered tumor disc and an outer skin
//! annulus. Masks are derived once per grid and never mutated; the three masks
//! are elementwise mutually exclusive and their union covers exactly the body
//! region.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dosefield::grid::DoseGrid;
use crate::error::{Error, Result};

/// Tissue classes of the phantom.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tissue {
    Tumor,
    Skin,
    Normal,
}

/// Concentric-disc phantom geometry. All lengths are in cm.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Phantom {
    center: DVec2,
    body_radius: f64,
    tumor_radius: f64,
    skin_thickness: f64,
}

impl Phantom {
    /// Creates a phantom, validating the radii.
    ///
    /// The tumor disc must fit strictly inside the inner body region left by
    /// the skin annulus.
    pub fn new(
        center: DVec2,
        body_radius: f64,
        tumor_radius: f64,
        skin_thickness: f64,
    ) -> Result<Self> {
        if !(body_radius > 0.0 && body_radius.is_finite()) {
            return Err(Error::InvalidConfig("body_radius must be > 0".into()));
        }
        if !(skin_thickness > 0.0 && skin_thickness < body_radius) {
            return Err(Error::InvalidConfig(
                "skin_thickness must be > 0 and smaller than body_radius".into(),
            ));
        }
        if !(tumor_radius > 0.0 && tumor_radius < body_radius - skin_thickness) {
            return Err(Error::InvalidConfig(
                "tumor_radius must be > 0 and fit inside the inner body region".into(),
            ));
        }
        Ok(Self {
            center,
            body_radius,
            tumor_radius,
            skin_thickness,
        })
    }

    /// A 10 cm water-equivalent body with a 2 cm tumor and 0.5 cm skin,
    /// centered at the origin.
    pub fn water_disc() -> Self {
        Self {
            center: DVec2::ZERO,
            body_radius: 10.0,
            tumor_radius: 2.0,
            skin_thickness: 0.5,
        }
    }

    /// World-space center of the phantom.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Outer body radius in cm.
    pub fn body_radius(&self) -> f64 {
        self.body_radius
    }

    /// Tumor disc radius in cm.
    pub fn tumor_radius(&self) -> f64 {
        self.tumor_radius
    }

    /// Skin annulus thickness in cm.
    pub fn skin_thickness(&self) -> f64 {
        self.skin_thickness
    }

    /// Classifies a world position, `None` outside the body disc.
    ///
    /// Inside the body exactly one tissue applies: the tumor disc wins, then
    /// the skin annulus, otherwise normal tissue.
    pub fn classify(&self, p: DVec2) -> Option<Tissue> {
        let r = (p - self.center).length();
        if r > self.body_radius {
            return None;
        }
        if r <= self.tumor_radius {
            Some(Tissue::Tumor)
        } else if r >= self.body_radius - self.skin_thickness {
            Some(Tissue::Skin)
        } else {
            Some(Tissue::Normal)
        }
    }

    /// Depth of `p` below the body surface along a parallel beam direction.
    ///
    /// `direction` must be a unit vector. For each ray the entry point is
    /// where it crosses the body disc; the returned depth is negative upstream
    /// of that point. Returns `None` for rays that miss the body entirely.
    pub fn depth_along(&self, p: DVec2, direction: DVec2) -> Option<f64> {
        let rel = p - self.center;
        let s = rel.dot(direction);
        let l = rel.perp_dot(direction);
        let half_chord_sq = self.body_radius * self.body_radius - l * l;
        if half_chord_sq < 0.0 {
            return None;
        }
        Some(s + half_chord_sq.sqrt())
    }

    /// Derives the three boolean tissue masks for a grid.
    pub fn masks(&self, grid: &DoseGrid) -> TissueMasks {
        let len = grid.cell_count();
        let mut tumor = vec![false; len];
        let mut skin = vec![false; len];
        let mut normal = vec![false; len];

        for iy in 0..grid.height {
            for ix in 0..grid.width {
                let p = grid.index_to_world(ix as isize, iy as isize);
                let idx = iy * grid.width + ix;
                match self.classify(p) {
                    Some(Tissue::Tumor) => tumor[idx] = true,
                    Some(Tissue::Skin) => skin[idx] = true,
                    Some(Tissue::Normal) => normal[idx] = true,
                    None => {}
                }
            }
        }

        TissueMasks {
            grid: grid.clone(),
            tumor,
            skin,
            normal,
        }
    }
}

/// Boolean tissue masks derived from a [`Phantom`] over a [`DoseGrid`].
#[derive(Clone, Debug)]
pub struct TissueMasks {
    pub grid: DoseGrid,
    pub tumor: Vec<bool>,
    pub skin: Vec<bool>,
    pub normal: Vec<bool>,
}

impl TissueMasks {
    /// The tissue at a row-major cell index, if the cell lies in the body.
    pub fn tissue_at(&self, idx: usize) -> Option<Tissue> {
        if self.tumor.get(idx).copied().unwrap_or(false) {
            Some(Tissue::Tumor)
        } else if self.skin.get(idx).copied().unwrap_or(false) {
            Some(Tissue::Skin)
        } else if self.normal.get(idx).copied().unwrap_or(false) {
            Some(Tissue::Normal)
        } else {
            None
        }
    }

    /// Number of cells covered by any tissue (the body region).
    pub fn body_cells(&self) -> usize {
        (0..self.tumor.len())
            .filter(|&i| self.tumor[i] || self.skin[i] || self.normal[i])
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_degenerate_geometry() {
        assert!(Phantom::new(DVec2::ZERO, 0.0, 1.0, 0.5).is_err());
        assert!(Phantom::new(DVec2::ZERO, 10.0, 2.0, 0.0).is_err());
        assert!(Phantom::new(DVec2::ZERO, 10.0, 2.0, 10.0).is_err());
        // Tumor touching the skin annulus is rejected.
        assert!(Phantom::new(DVec2::ZERO, 10.0, 9.5, 0.5).is_err());
        assert!(Phantom::new(DVec2::ZERO, 10.0, 2.0, 0.5).is_ok());
    }

    #[test]
    fn classify_partitions_the_body() {
        let phantom = Phantom::water_disc();
        assert_eq!(phantom.classify(DVec2::ZERO), Some(Tissue::Tumor));
        assert_eq!(phantom.classify(DVec2::new(1.9, 0.0)), Some(Tissue::Tumor));
        assert_eq!(phantom.classify(DVec2::new(5.0, 0.0)), Some(Tissue::Normal));
        assert_eq!(phantom.classify(DVec2::new(9.8, 0.0)), Some(Tissue::Skin));
        assert_eq!(phantom.classify(DVec2::new(10.5, 0.0)), None);
    }

    #[test]
    fn depth_along_measures_from_the_entry_surface() {
        let phantom = Phantom::water_disc();

        // Central ray along +X: entry at x = -10.
        let depth = phantom.depth_along(DVec2::ZERO, DVec2::X).unwrap();
        assert!((depth - 10.0).abs() < 1e-12);
        let entry = phantom.depth_along(DVec2::new(-10.0, 0.0), DVec2::X).unwrap();
        assert!(entry.abs() < 1e-12);

        // Upstream of the entry point the depth is negative.
        let upstream = phantom.depth_along(DVec2::new(-12.0, 0.0), DVec2::X).unwrap();
        assert!((upstream + 2.0).abs() < 1e-12);

        // Off-axis rays enter later, so the same x is shallower.
        let off_axis = phantom.depth_along(DVec2::new(0.0, 6.0), DVec2::X).unwrap();
        assert!(off_axis < 10.0);

        // Rays missing the body disc have no depth.
        assert!(phantom.depth_along(DVec2::new(0.0, 11.0), DVec2::X).is_none());
    }

    #[test]
    fn masks_are_exclusive_and_cover_the_body() {
        let phantom = Phantom::water_disc();
        let grid = DoseGrid::from_extent(DVec2::new(24.0, 24.0), DVec2::ZERO, 0.5);
        let masks = phantom.masks(&grid);

        let mut inside = 0;
        for (idx, p) in grid.positions().enumerate() {
            let flags =
                masks.tumor[idx] as usize + masks.skin[idx] as usize + masks.normal[idx] as usize;
            match phantom.classify(p) {
                Some(tissue) => {
                    assert_eq!(flags, 1, "body cell {idx} must have exactly one tissue");
                    assert_eq!(masks.tissue_at(idx), Some(tissue));
                    inside += 1;
                }
                None => {
                    assert_eq!(flags, 0, "outside cell {idx} must be unmasked");
                    assert_eq!(masks.tissue_at(idx), None);
                }
            }
        }
        assert_eq!(masks.body_cells(), inside);
        assert!(inside > 0);
    }
}
