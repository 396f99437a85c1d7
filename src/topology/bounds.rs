//! Axis-aligned bounding box of the mesh points.

use serde::{Deserialize, Serialize};

use crate::topology::point::MeshPoint;

/// An axis-aligned box. A freshly created box is *void*: it contains
/// nothing until a point is added.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundBox3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for BoundBox3 {
    fn default() -> Self {
        Self::void()
    }
}

impl BoundBox3 {
    /// The empty box (`min > max` on every axis).
    pub const fn void() -> Self {
        Self {
            min: [f64::MAX; 3],
            max: [f64::MIN; 3],
        }
    }

    /// Box spanning the given points; void for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a MeshPoint>,
    {
        let mut bb = Self::void();
        for p in points {
            bb.add(p.coords);
        }
        bb
    }

    pub fn set_void(&mut self) {
        *self = Self::void();
    }

    pub fn is_void(&self) -> bool {
        (0..3).any(|k| self.min[k] > self.max[k])
    }

    /// Grows the box to include `p`.
    pub fn add(&mut self, p: [f64; 3]) {
        for k in 0..3 {
            self.min[k] = self.min[k].min(p[k]);
            self.max[k] = self.max[k].max(p[k]);
        }
    }

    pub fn contains(&self, p: [f64; 3]) -> bool {
        (0..3).all(|k| self.min[k] <= p[k] && p[k] <= self.max[k])
    }

    /// Edge lengths; zero for a void box.
    pub fn extent(&self) -> [f64; 3] {
        if self.is_void() {
            return [0.0; 3];
        }
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}
