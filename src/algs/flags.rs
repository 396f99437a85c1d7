//! Bulk flag helpers over a [`MeshKernel`].
//!
//! Used by the traversal-based algorithms to paint facets with scratch bits.
//! Indices are trusted; an out-of-range index panics.

use crate::topology::{FacetFlags, FacetIndex, MeshKernel};

/// Sets and clears facet flags in bulk.
pub struct FlagAlgorithm<'a> {
    mesh: &'a mut MeshKernel,
}

impl<'a> FlagAlgorithm<'a> {
    pub fn new(mesh: &'a mut MeshKernel) -> Self {
        Self { mesh }
    }

    /// Clears `flag` on every facet.
    pub fn reset_facet_flag(&mut self, flag: FacetFlags) {
        self.mesh.reset_facet_flag(flag);
    }

    /// Sets `flag` on the facets in `indices`.
    pub fn set_facets_flag(&mut self, indices: &[FacetIndex], flag: FacetFlags) {
        for &i in indices {
            self.mesh.facets[i as usize].set_flag(flag);
        }
    }

    /// Clears `flag` on the facets in `indices`.
    pub fn reset_facets_flag(&mut self, indices: &[FacetIndex], flag: FacetFlags) {
        for &i in indices {
            self.mesh.facets[i as usize].reset_flag(flag);
        }
    }

    /// Number of facets where `flag` is set (`set == true`) or clear.
    pub fn count_facet_flag(&self, flag: FacetFlags, set: bool) -> usize {
        self.mesh
            .facets()
            .iter()
            .filter(|f| f.is_flag(flag) == set)
            .count()
    }

    /// Ascending indices of all facets with `flag` set.
    pub fn facets_with_flag(&self, flag: FacetFlags) -> Vec<FacetIndex> {
        self.mesh
            .facets()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_flag(flag))
            .map(|(i, _)| i as FacetIndex)
            .collect()
    }
}
