//! `MeshKernel`: the point and facet store.
//!
//! The kernel owns two flat arrays and a bounding box. It carries no
//! algorithms beyond bookkeeping; region growing, orientation evaluation and
//! compaction live in [`crate::algs`] and work on the kernel through its
//! public and crate-internal accessors.
//!
//! # Preconditions
//! Construction through [`MeshKernel::new`] is trusted: every corner index
//! must address a point and every neighbour index must address a facet or be
//! [`NO_NEIGHBOUR`]. Debug builds check this on construction; release builds
//! do not. Use [`MeshKernel::try_new`] for input from untrusted sources.
//!
//! The bounding box is computed on construction and after
//! [`add_facets`](MeshKernel::add_facets). Removing elements does not shrink
//! it; call [`recalc_bound_box`](MeshKernel::recalc_bound_box) if needed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::algs::compact::{CompactionReport, remove_invalids};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshTopoError;
use crate::topology::bounds::BoundBox3;
use crate::topology::facet::MeshFacet;
use crate::topology::flags::FacetFlags;
use crate::topology::point::MeshPoint;
use crate::topology::{FacetIndex, NO_NEIGHBOUR, PointIndex};

/// Point array, facet array and bounding box of one mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshKernel {
    pub(crate) points: Vec<MeshPoint>,
    pub(crate) facets: Vec<MeshFacet>,
    bound_box: BoundBox3,
    valid: bool,
}

impl Default for MeshKernel {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            facets: Vec::new(),
            bound_box: BoundBox3::void(),
            valid: true,
        }
    }
}

impl MeshKernel {
    /// Creates a kernel from prebuilt arrays without validating them.
    pub fn new(points: Vec<MeshPoint>, facets: Vec<MeshFacet>) -> Self {
        let bound_box = BoundBox3::from_points(&points);
        let kernel = Self {
            points,
            facets,
            bound_box,
            valid: true,
        };
        crate::debug_invariants!(kernel);
        kernel
    }

    /// Creates a kernel and checks every index reference.
    pub fn try_new(points: Vec<MeshPoint>, facets: Vec<MeshFacet>) -> Result<Self, MeshTopoError> {
        let kernel = Self {
            bound_box: BoundBox3::from_points(&points),
            points,
            facets,
            valid: true,
        };
        kernel.validate_invariants()?;
        Ok(kernel)
    }

    #[inline]
    pub fn points(&self) -> &[MeshPoint] {
        &self.points
    }

    #[inline]
    pub fn facets(&self) -> &[MeshFacet] {
        &self.facets
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn point(&self, index: PointIndex) -> &MeshPoint {
        &self.points[index as usize]
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn facet(&self, index: FacetIndex) -> &MeshFacet {
        &self.facets[index as usize]
    }

    /// Mutable access for collaborators, e.g. to mark a point invalid.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn point_mut(&mut self, index: PointIndex) -> &mut MeshPoint {
        &mut self.points[index as usize]
    }

    /// Mutable access for collaborators, e.g. to set flags or mark the facet
    /// invalid. Callers that rewrite indices must keep them in range.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn facet_mut(&mut self, index: FacetIndex) -> &mut MeshFacet {
        &mut self.facets[index as usize]
    }

    /// Checked facet lookup.
    pub fn try_facet(&self, index: FacetIndex) -> Result<&MeshFacet, MeshTopoError> {
        self.facets
            .get(index as usize)
            .ok_or(MeshTopoError::FacetIndexOutOfRange {
                index,
                len: self.facets.len(),
            })
    }

    #[inline]
    pub fn count_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn count_facets(&self) -> usize {
        self.facets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Copies of the facets at `indices`, in the given order.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn facets_at(&self, indices: &[FacetIndex]) -> Vec<MeshFacet> {
        indices.iter().map(|&i| self.facets[i as usize]).collect()
    }

    #[inline]
    pub fn bound_box(&self) -> &BoundBox3 {
        &self.bound_box
    }

    pub fn recalc_bound_box(&mut self) {
        self.bound_box = BoundBox3::from_points(&self.points);
    }

    /// Overall validity of the data structure as last set by the owner.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Clears `flag` on every facet.
    pub fn reset_facet_flag(&mut self, flag: FacetFlags) {
        for f in &mut self.facets {
            f.reset_flag(flag);
        }
    }

    /// Appends points and facets. Facet indices are absolute, i.e. they refer
    /// to the arrays after the append. The bounding box is recalculated.
    pub fn add_facets(&mut self, points: Vec<MeshPoint>, facets: Vec<MeshFacet>) {
        for p in &points {
            self.bound_box.add(p.coords);
        }
        self.points.extend(points);
        self.facets.extend(facets);
        crate::debug_invariants!(*self);
    }

    /// Drops all elements and voids the bounding box.
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.facets = Vec::new();
        self.bound_box.set_void();
    }

    /// Recomputes every neighbour slot from shared edges.
    ///
    /// An edge used by exactly two facets links them; edges used once are
    /// open, and edges used three or more times (non-manifold) are left open
    /// on all incident facets.
    pub fn rebuild_neighbours(&mut self) {
        let mut edges: HashMap<(PointIndex, PointIndex), Vec<(FacetIndex, usize)>> =
            HashMap::with_capacity(self.facets.len() * 3 / 2);
        for (fi, f) in self.facets.iter().enumerate() {
            for side in 0..3 {
                let (a, b) = f.edge(side);
                let key = if a < b { (a, b) } else { (b, a) };
                edges.entry(key).or_default().push((fi as FacetIndex, side));
            }
        }

        for f in &mut self.facets {
            f.neighbours = [NO_NEIGHBOUR; 3];
        }
        let mut non_manifold = 0usize;
        for incident in edges.values() {
            match incident.as_slice() {
                [(f0, s0), (f1, s1)] => {
                    self.facets[*f0 as usize].neighbours[*s0] = *f1;
                    self.facets[*f1 as usize].neighbours[*s1] = *f0;
                }
                [_] => {}
                _ => non_manifold += 1,
            }
        }
        if non_manifold > 0 {
            log::debug!("rebuild_neighbours: {non_manifold} non-manifold edges left open");
        }
    }

    /// Marks every point that no valid facet references as invalid.
    ///
    /// Returns the number of points newly marked.
    pub fn invalidate_unreferenced_points(&mut self) -> usize {
        let mut used = vec![false; self.points.len()];
        for f in self.facets.iter().filter(|f| f.is_valid()) {
            for &p in &f.points {
                used[p as usize] = true;
            }
        }
        let mut marked = 0;
        for (p, used) in self.points.iter_mut().zip(used) {
            if !used && p.is_valid() {
                p.set_invalid();
                marked += 1;
            }
        }
        marked
    }

    /// Removes all invalid points and facets; see [`remove_invalids`].
    pub fn remove_invalids(&mut self) -> CompactionReport {
        remove_invalids(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::fixtures::{tetrahedron, tetrahedron_facets, tetrahedron_points};

    #[test]
    fn new_computes_bound_box() {
        let k = tetrahedron();
        assert_eq!(k.bound_box().min, [0.0, 0.0, 0.0]);
        assert_eq!(k.bound_box().max, [1.0, 1.0, 1.0]);
        assert_eq!(k.count_points(), 4);
        assert_eq!(k.count_facets(), 4);
        assert!(k.is_valid());
    }

    #[test]
    fn try_new_rejects_bad_point() {
        let mut facets = tetrahedron_facets();
        facets[2].points[1] = 9;
        let err = MeshKernel::try_new(tetrahedron_points(), facets).unwrap_err();
        assert_eq!(
            err,
            MeshTopoError::PointIndexOutOfRange {
                facet: 2,
                corner: 1,
                point: 9,
                len: 4
            }
        );
    }

    #[test]
    fn try_new_rejects_bad_neighbour() {
        let mut facets = tetrahedron_facets();
        facets[0].neighbours[2] = 4;
        let err = MeshKernel::try_new(tetrahedron_points(), facets).unwrap_err();
        assert!(matches!(
            err,
            MeshTopoError::NeighbourIndexOutOfRange { facet: 0, side: 2, neighbour: 4, .. }
        ));
    }

    #[test]
    fn rebuild_neighbours_matches_hand_written_adjacency() {
        let expected = tetrahedron_facets();
        let mut stripped = expected.clone();
        for f in &mut stripped {
            f.neighbours = [NO_NEIGHBOUR; 3];
        }
        let mut k = MeshKernel::new(tetrahedron_points(), stripped);
        k.rebuild_neighbours();
        for (got, want) in k.facets().iter().zip(&expected) {
            assert_eq!(got.neighbours, want.neighbours);
        }
    }

    #[test]
    fn rebuild_neighbours_leaves_non_manifold_edges_open() {
        // three triangles hinged on edge (0, 1)
        let points = (0..5).map(|i| MeshPoint::new(i as f64, 0.0, 0.0)).collect();
        let facets = vec![
            MeshFacet::new(0, 1, 2),
            MeshFacet::new(1, 0, 3),
            MeshFacet::new(0, 1, 4),
        ];
        let mut k = MeshKernel::new(points, facets);
        k.rebuild_neighbours();
        assert!(k.facets().iter().all(|f| f.neighbours == [NO_NEIGHBOUR; 3]));
    }

    #[test]
    fn reset_facet_flag_only_touches_that_flag() {
        let mut k = tetrahedron();
        k.facet_mut(1).set_flag(FacetFlags::VISIT | FacetFlags::SEGMENT);
        k.reset_facet_flag(FacetFlags::VISIT);
        assert!(k.facet(1).is_flag(FacetFlags::SEGMENT));
        assert!(!k.facet(1).is_flag(FacetFlags::VISIT));
    }

    #[test]
    fn add_facets_grows_bound_box() {
        let mut k = tetrahedron();
        k.add_facets(vec![MeshPoint::new(2.0, 0.0, 0.0)], vec![MeshFacet::new(1, 4, 2)]);
        assert_eq!(k.count_facets(), 5);
        assert_eq!(k.bound_box().max[0], 2.0);
    }

    #[test]
    fn unreferenced_points_are_invalidated() {
        let mut k = tetrahedron();
        k.add_facets(vec![MeshPoint::new(5.0, 5.0, 5.0)], Vec::new());
        k.facet_mut(0).set_invalid();
        k.facet_mut(1).set_invalid();
        // point 0 is still used by facet 3, point 4 by nobody
        assert_eq!(k.invalidate_unreferenced_points(), 1);
        assert!(!k.point(4).is_valid());
        assert!(k.point(0).is_valid());
    }

    #[test]
    fn clear_voids_everything() {
        let mut k = tetrahedron();
        k.clear();
        assert!(k.is_empty());
        assert_eq!(k.count_points(), 0);
        assert!(k.bound_box().is_void());
    }

    #[test]
    fn facets_at_copies_in_order() {
        let k = tetrahedron();
        let sel = k.facets_at(&[3, 1]);
        assert_eq!(sel, vec![*k.facet(3), *k.facet(1)]);
        assert!(k.try_facet(4).is_err());
    }
}
