//! Compaction: physical removal of invalid points and facets.
//!
//! Removing element *i* shifts every later element down by the number of
//! removed elements before it. For both arrays a table of these
//! *decrements* (an exclusive running count of invalid elements) is built
//! first; every surviving reference `r` then becomes `r - decrement[r]`.
//! Links to removed facets become open edges. The survivors keep their
//! relative order and replace the old arrays in one step at the end.

use crate::topology::{FacetFlags, MeshFacet, MeshKernel, MeshPoint, NO_NEIGHBOUR};

/// What a compaction pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactionReport {
    pub removed_points: usize,
    pub removed_facets: usize,
    /// Neighbour slots of surviving facets that pointed at a removed facet.
    pub opened_edges: usize,
}

impl CompactionReport {
    pub fn is_noop(&self) -> bool {
        self.removed_points == 0 && self.removed_facets == 0
    }
}

/// Exclusive prefix count of `true` entries.
fn decrements(invalid: impl IntoIterator<Item = bool>) -> Vec<u32> {
    let mut dec = 0u32;
    invalid
        .into_iter()
        .map(|is_invalid| {
            let cur = dec;
            if is_invalid {
                dec += 1;
            }
            cur
        })
        .collect()
}

/// Removes every invalid point and facet and renumbers all references.
///
/// Preconditions: valid facets reference valid points only, and all indices
/// are in range. Afterwards no invalid element is left, every index is in
/// range, and the scratch flags (`VISIT`, `TMP0`, `TMP1`) are clear on all
/// facets. The bounding box is left unchanged.
///
/// # Panics
/// Panics if a surviving facet holds an out-of-range index. In debug builds,
/// also if a valid facet uses an invalid point.
pub fn remove_invalids(mesh: &mut MeshKernel) -> CompactionReport {
    let point_dec = decrements(mesh.points.iter().map(|p| !p.is_valid()));
    let facet_dec = decrements(mesh.facets.iter().map(|f| !f.is_valid()));

    let mut opened_edges = 0usize;
    let mut facets: Vec<MeshFacet> = Vec::with_capacity(mesh.facets.len());
    for (fi, f) in mesh.facets.iter().enumerate().filter(|(_, f)| f.is_valid()) {
        let mut out = *f;
        for corner in 0..3 {
            let p = f.points[corner] as usize;
            debug_assert!(
                mesh.points[p].is_valid(),
                "valid facet {fi} references invalid point {p}"
            );
            out.points[corner] -= point_dec[p];
        }
        for side in 0..3 {
            let n = f.neighbours[side];
            if n == NO_NEIGHBOUR {
                continue;
            }
            if mesh.facets[n as usize].is_valid() {
                out.neighbours[side] = n - facet_dec[n as usize];
            } else {
                out.neighbours[side] = NO_NEIGHBOUR;
                opened_edges += 1;
            }
        }
        out.reset_flag(FacetFlags::SCRATCH);
        facets.push(out);
    }

    let points: Vec<MeshPoint> = mesh.points.iter().filter(|p| p.is_valid()).copied().collect();

    let report = CompactionReport {
        removed_points: mesh.points.len() - points.len(),
        removed_facets: mesh.facets.len() - facets.len(),
        opened_edges,
    };
    log::debug!(
        "compaction: removed {} points and {} facets, opened {} edges",
        report.removed_points,
        report.removed_facets,
        report.opened_edges
    );

    mesh.points = points;
    mesh.facets = facets;
    report
}
