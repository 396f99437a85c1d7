//! `MeshPoint`: a vertex of the mesh.
//!
//! Points are owned by the point array of a
//! [`MeshKernel`](crate::topology::kernel::MeshKernel) and referenced from
//! facets by index only, so compaction may move them freely.

use serde::{Deserialize, Serialize};

/// A 3D coordinate plus a validity marker.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshPoint {
    pub coords: [f64; 3],
    valid: bool,
}

impl MeshPoint {
    /// Creates a valid point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: [x, y, z],
            valid: true,
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coords[0]
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coords[1]
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Returns `false` once the point has been marked for removal.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the point for removal by the next compaction.
    #[inline]
    pub fn set_invalid(&mut self) {
        self.valid = false;
    }

    /// Clears a previous [`set_invalid`](Self::set_invalid).
    #[inline]
    pub fn validate(&mut self) {
        self.valid = true;
    }
}

impl From<[f64; 3]> for MeshPoint {
    fn from(coords: [f64; 3]) -> Self {
        Self {
            coords,
            valid: true,
        }
    }
}
