//! `MeshFacet`: a triangle of the indexed mesh.
//!
//! A facet stores topology only, no geometry:
//! - corners `points[0..3]`, whose order defines the winding;
//! - edge *i* runs from corner *i* to corner *(i+1) mod 3*;
//! - `neighbours[i]` is the facet across edge *i*, or [`NO_NEIGHBOUR`] for
//!   an open edge.

use serde::{Deserialize, Serialize};

use crate::topology::flags::FacetFlags;
use crate::topology::{FacetIndex, NO_NEIGHBOUR, PointIndex};

/// A triangle facet: three corner indices, three neighbour indices and a
/// flag byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshFacet {
    pub points: [PointIndex; 3],
    pub neighbours: [FacetIndex; 3],
    pub flags: FacetFlags,
}

impl Default for MeshFacet {
    fn default() -> Self {
        Self {
            points: [0; 3],
            neighbours: [NO_NEIGHBOUR; 3],
            flags: FacetFlags::empty(),
        }
    }
}

impl MeshFacet {
    /// A facet with the given corners and no neighbours.
    #[inline]
    pub fn new(p0: PointIndex, p1: PointIndex, p2: PointIndex) -> Self {
        Self {
            points: [p0, p1, p2],
            ..Self::default()
        }
    }

    /// A facet with the given corners and neighbours.
    #[inline]
    pub fn with_neighbours(points: [PointIndex; 3], neighbours: [FacetIndex; 3]) -> Self {
        Self {
            points,
            neighbours,
            flags: FacetFlags::empty(),
        }
    }

    #[inline]
    pub fn is_flag(&self, flag: FacetFlags) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: FacetFlags) {
        self.flags.insert(flag);
    }

    #[inline]
    pub fn reset_flag(&mut self, flag: FacetFlags) {
        self.flags.remove(flag);
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_flag(FacetFlags::INVALID)
    }

    /// Marks the facet for removal by the next compaction.
    #[inline]
    pub fn set_invalid(&mut self) {
        self.set_flag(FacetFlags::INVALID);
    }

    #[inline]
    pub fn validate(&mut self) {
        self.reset_flag(FacetFlags::INVALID);
    }

    /// Inverts the winding.
    ///
    /// Swapping corners 1 and 2 reverses every edge; edge 0 and edge 2 trade
    /// places, so their neighbour slots are swapped as well. Edge 1 keeps its
    /// slot. Flipping twice restores the facet exactly.
    #[inline]
    pub fn flip_normal(&mut self) {
        self.points.swap(1, 2);
        self.neighbours.swap(0, 2);
    }

    /// Corner indices of edge `side`, in winding order.
    #[inline]
    pub fn edge(&self, side: usize) -> (PointIndex, PointIndex) {
        (self.points[side], self.points[(side + 1) % 3])
    }

    /// Returns `true` if edge `side` is open.
    #[inline]
    pub fn is_border(&self, side: usize) -> bool {
        self.neighbours[side] == NO_NEIGHBOUR
    }

    /// Edge slot that links to `neighbour`, if any.
    pub fn side_of_neighbour(&self, neighbour: FacetIndex) -> Option<usize> {
        if neighbour == NO_NEIGHBOUR {
            return None;
        }
        self.neighbours.iter().position(|&n| n == neighbour)
    }

    /// Returns `true` if the two facets are consistently oriented, that is if
    /// no edge they share is traversed in the same direction by both.
    ///
    /// Facets without a common edge count as consistent.
    pub fn has_same_orientation(&self, other: &MeshFacet) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if self.points[i] == other.points[j]
                    && (self.points[(i + 1) % 3] == other.points[(j + 1) % 3]
                        || self.points[(i + 2) % 3] == other.points[(j + 2) % 3])
                {
                    return false;
                }
            }
        }
        true
    }
}
