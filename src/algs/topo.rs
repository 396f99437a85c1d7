//! Whole-mesh topology mutations: normal harmonization and cleanup.

use crate::algs::compact::{CompactionReport, remove_invalids};
use crate::algs::orientation::{OrientationEvaluator, OrientationOptions};
use crate::topology::{FacetIndex, MeshKernel};

/// Mutating front end over a [`MeshKernel`].
///
/// Facets invalidated through [`invalidate_facets`](Self::invalidate_facets)
/// or [`delete_facets`](Self::delete_facets) are removed by
/// [`cleanup`](Self::cleanup), or when the `TopoAlgorithm` is dropped if no
/// cleanup ran since.
pub struct TopoAlgorithm<'a> {
    mesh: &'a mut MeshKernel,
    needs_cleanup: bool,
}

impl<'a> TopoAlgorithm<'a> {
    pub fn new(mesh: &'a mut MeshKernel) -> Self {
        Self {
            mesh,
            needs_cleanup: false,
        }
    }

    pub fn mesh(&self) -> &MeshKernel {
        self.mesh
    }

    /// Flips every facet reported by the orientation evaluator and returns
    /// how many were flipped.
    ///
    /// The `VISIT` and `TMP0` flags are left as the evaluator set them.
    pub fn harmonize_normals(&mut self) -> usize {
        self.harmonize_normals_with(OrientationOptions::default())
    }

    pub fn harmonize_normals_with(&mut self, options: OrientationOptions) -> usize {
        let indices = OrientationEvaluator::with_options(self.mesh, options).indices();
        self.flip_normals(&indices);
        log::debug!("harmonize_normals: flipped {} facets", indices.len());
        indices.len()
    }

    /// Flips the winding of the given facets.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn flip_normals(&mut self, indices: &[FacetIndex]) {
        for &i in indices {
            self.mesh.facet_mut(i).flip_normal();
        }
    }

    /// Marks facets invalid; they stay in place until the next cleanup.
    pub fn invalidate_facets(&mut self, indices: &[FacetIndex]) {
        for &i in indices {
            self.mesh.facet_mut(i).set_invalid();
        }
        self.needs_cleanup |= !indices.is_empty();
    }

    /// Marks facets invalid together with the points no valid facet uses any
    /// more. Returns the number of points marked.
    pub fn delete_facets(&mut self, indices: &[FacetIndex]) -> usize {
        self.invalidate_facets(indices);
        let orphans = self.mesh.invalidate_unreferenced_points();
        self.needs_cleanup |= orphans > 0;
        orphans
    }

    pub fn needs_cleanup(&self) -> bool {
        self.needs_cleanup
    }

    /// Removes all invalid elements from the mesh.
    pub fn cleanup(&mut self) -> CompactionReport {
        self.needs_cleanup = false;
        remove_invalids(self.mesh)
    }
}

impl Drop for TopoAlgorithm<'_> {
    fn drop(&mut self) {
        if self.needs_cleanup {
            self.cleanup();
        }
    }
}
