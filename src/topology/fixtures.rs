//! Small meshes shared by unit tests.

use crate::topology::facet::MeshFacet;
use crate::topology::kernel::MeshKernel;
use crate::topology::point::MeshPoint;
use crate::topology::{FacetIndex, NO_NEIGHBOUR};

pub fn tetrahedron_points() -> Vec<MeshPoint> {
    vec![
        MeshPoint::new(0.0, 0.0, 0.0),
        MeshPoint::new(1.0, 0.0, 0.0),
        MeshPoint::new(0.0, 1.0, 0.0),
        MeshPoint::new(0.0, 0.0, 1.0),
    ]
}

/// Outward-oriented faces with their neighbour slots filled in by hand.
pub fn tetrahedron_facets() -> Vec<MeshFacet> {
    vec![
        MeshFacet::with_neighbours([0, 2, 1], [3, 2, 1]),
        MeshFacet::with_neighbours([0, 1, 3], [0, 2, 3]),
        MeshFacet::with_neighbours([1, 2, 3], [0, 3, 1]),
        MeshFacet::with_neighbours([0, 3, 2], [1, 2, 0]),
    ]
}

pub fn tetrahedron() -> MeshKernel {
    MeshKernel::new(tetrahedron_points(), tetrahedron_facets())
}

/// Tetrahedron with facet `flipped` wound the other way.
pub fn tetrahedron_with_flip(flipped: FacetIndex) -> MeshKernel {
    let mut k = tetrahedron();
    k.facet_mut(flipped).flip_normal();
    k
}

/// A strip of `n` consistently oriented triangles over a zig-zag of points.
///
/// Facet `i` uses points `i, i+1, i+2` and shares an edge with `i-1` and
/// `i+1`.
pub fn strip(n: usize) -> MeshKernel {
    let points = (0..n + 2)
        .map(|i| MeshPoint::new((i / 2) as f64, (i % 2) as f64, 0.0))
        .collect();
    let facets = (0..n as u32)
        .map(|i| {
            if i % 2 == 0 {
                MeshFacet::new(i, i + 1, i + 2)
            } else {
                MeshFacet::new(i + 1, i, i + 2)
            }
        })
        .collect();
    let mut k = MeshKernel::new(points, facets);
    k.rebuild_neighbours();
    k
}

/// Two triangles with no shared edge.
pub fn two_islands() -> MeshKernel {
    let points = (0..6)
        .map(|i| MeshPoint::new(i as f64, (i % 3) as f64, 0.0))
        .collect();
    let facets = vec![
        MeshFacet::with_neighbours([0, 1, 2], [NO_NEIGHBOUR; 3]),
        MeshFacet::with_neighbours([3, 4, 5], [NO_NEIGHBOUR; 3]),
    ];
    MeshKernel::new(points, facets)
}
