//! Region growing over the facet adjacency graph.
//!
//! [`visit_neighbour_facets`] is the one graph walker of the crate. It does
//! a breadth-first walk across shared edges and hands every newly reached
//! facet to a [`FacetVisitor`]; what "visiting" means is up to the visitor.
//!
//! # Flags
//! The walk never enters a facet that already carries
//! [`FacetFlags::VISIT`], and marks every facet it enters. Callers reset
//! `VISIT` (mesh-wide or on a subset) before a walk to choose which part of
//! the mesh is reachable.

use std::mem;
use std::ops::ControlFlow;

use crate::topology::{FacetFlags, FacetIndex, MeshFacet, MeshKernel, NO_NEIGHBOUR};

/// Callback of the region-growing walk.
pub trait FacetVisitor {
    /// Called once for every facet the walk enters, except the start facet.
    ///
    /// `from` is the already visited facet across the shared edge, `level`
    /// the ring number (graph distance from the start facet, starting at 1).
    /// Returning `Break` keeps the walk from expanding beyond `facet`; the
    /// rest of the frontier is still processed.
    fn visit(
        &mut self,
        facet: &mut MeshFacet,
        from: &MeshFacet,
        index: FacetIndex,
        level: u32,
    ) -> ControlFlow<()>;

    /// Gate checked before an unvisited neighbour is entered across edge
    /// `side` of `from`. A refused facet is neither marked nor counted and
    /// may be reached later through another edge.
    fn allow_visit(
        &mut self,
        _facet: &MeshFacet,
        _from: &MeshFacet,
        _index: FacetIndex,
        _level: u32,
        _side: usize,
    ) -> bool {
        true
    }
}

impl<F> FacetVisitor for F
where
    F: FnMut(&mut MeshFacet, &MeshFacet, FacetIndex, u32) -> ControlFlow<()>,
{
    fn visit(
        &mut self,
        facet: &mut MeshFacet,
        from: &MeshFacet,
        index: FacetIndex,
        level: u32,
    ) -> ControlFlow<()> {
        self(facet, from, index, level)
    }
}

/// Walks breadth-first from `start` and returns the number of visited
/// facets, not counting `start`.
///
/// `start` is marked [`FacetFlags::VISIT`] but not passed to the visitor.
/// Neighbour indices past the end of the facet array are skipped.
///
/// # Panics
/// Panics if `start` is out of range.
pub fn visit_neighbour_facets<V>(mesh: &mut MeshKernel, visitor: &mut V, start: FacetIndex) -> usize
where
    V: FacetVisitor + ?Sized,
{
    let facets = &mut mesh.facets;
    let count = facets.len();
    facets[start as usize].set_flag(FacetFlags::VISIT);

    let mut visited = 0usize;
    let mut level = 0u32;
    let mut current = vec![start];
    let mut next = Vec::new();

    while !current.is_empty() {
        level += 1;
        for &cur in &current {
            let from = facets[cur as usize];
            for side in 0..3 {
                let j = from.neighbours[side];
                if j == NO_NEIGHBOUR {
                    continue;
                }
                if j as usize >= count {
                    log::warn!("facet {cur}: neighbour {j} across edge {side} is out of range");
                    continue;
                }
                let facet = &mut facets[j as usize];
                if facet.is_flag(FacetFlags::VISIT) {
                    continue;
                }
                if !visitor.allow_visit(facet, &from, j, level, side) {
                    continue;
                }
                facet.set_flag(FacetFlags::VISIT);
                visited += 1;
                if visitor.visit(facet, &from, j, level).is_continue() {
                    next.push(j);
                }
            }
        }
        current.clear();
        mem::swap(&mut current, &mut next);
    }
    visited
}

/// Collects every facet within `max_level` rings of the start facet.
#[derive(Debug, Default)]
pub struct RingCollector {
    max_level: u32,
    pub indices: Vec<FacetIndex>,
}

impl RingCollector {
    pub fn new(max_level: u32) -> Self {
        Self {
            max_level,
            indices: Vec::new(),
        }
    }
}

impl FacetVisitor for RingCollector {
    fn visit(
        &mut self,
        _facet: &mut MeshFacet,
        _from: &MeshFacet,
        index: FacetIndex,
        _level: u32,
    ) -> ControlFlow<()> {
        self.indices.push(index);
        ControlFlow::Continue(())
    }

    fn allow_visit(
        &mut self,
        _facet: &MeshFacet,
        _from: &MeshFacet,
        _index: FacetIndex,
        level: u32,
        _side: usize,
    ) -> bool {
        level <= self.max_level
    }
}
