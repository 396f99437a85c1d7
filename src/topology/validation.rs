//! Structural checks for [`MeshKernel`].
//!
//! These checks back [`MeshKernel::try_new`] and the
//! [`DebugInvariants`] implementation. They verify index ranges and the
//! "valid facets use valid points" precondition of compaction; they do not
//! look at geometry or orientation.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshTopoError;
use crate::topology::facet::MeshFacet;
use crate::topology::kernel::MeshKernel;
use crate::topology::{FacetIndex, NO_NEIGHBOUR};

/// Checks one facet against the array sizes of `kernel`.
pub fn validate_facet(
    kernel: &MeshKernel,
    index: FacetIndex,
    facet: &MeshFacet,
) -> Result<(), MeshTopoError> {
    let n_points = kernel.count_points();
    let n_facets = kernel.count_facets();
    for (corner, &p) in facet.points.iter().enumerate() {
        if p as usize >= n_points {
            return Err(MeshTopoError::PointIndexOutOfRange {
                facet: index,
                corner,
                point: p,
                len: n_points,
            });
        }
        if facet.is_valid() && !kernel.point(p).is_valid() {
            return Err(MeshTopoError::InvalidPointReference { facet: index, point: p });
        }
    }
    for (side, &n) in facet.neighbours.iter().enumerate() {
        if n == NO_NEIGHBOUR {
            continue;
        }
        if n as usize >= n_facets {
            return Err(MeshTopoError::NeighbourIndexOutOfRange {
                facet: index,
                side,
                neighbour: n,
                len: n_facets,
            });
        }
        if n == index {
            return Err(MeshTopoError::SelfNeighbour { facet: index, side });
        }
    }
    Ok(())
}

impl DebugInvariants for MeshKernel {
    fn debug_assert_invariants(&self) {
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] mesh kernel: {e}");
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        self.facets()
            .iter()
            .enumerate()
            .try_for_each(|(i, f)| validate_facet(self, i as FacetIndex, f))
    }

    #[cfg(feature = "rayon")]
    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        // first error by facet index, independent of scheduling
        let first = self
            .facets()
            .par_iter()
            .enumerate()
            .filter_map(|(i, f)| validate_facet(self, i as FacetIndex, f).err().map(|e| (i, e)))
            .min_by_key(|(i, _)| *i);
        match first {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }
}
