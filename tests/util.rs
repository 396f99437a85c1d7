#![allow(dead_code)]
use mesh_topo::topology::{FacetIndex, MeshFacet, MeshKernel, MeshPoint, NO_NEIGHBOUR};

/// Closed, outward-oriented tetrahedron with neighbours from `rebuild_neighbours`.
pub fn tetrahedron() -> MeshKernel {
    let points = vec![
        MeshPoint::new(0.0, 0.0, 0.0),
        MeshPoint::new(1.0, 0.0, 0.0),
        MeshPoint::new(0.0, 1.0, 0.0),
        MeshPoint::new(0.0, 0.0, 1.0),
    ];
    let facets = vec![
        MeshFacet::new(0, 2, 1),
        MeshFacet::new(0, 1, 3),
        MeshFacet::new(1, 2, 3),
        MeshFacet::new(0, 3, 2),
    ];
    let mut k = MeshKernel::new(points, facets);
    k.rebuild_neighbours();
    k
}

/// `nx * ny` quads in the z = 0 plane, each split into two counter-clockwise
/// triangles. Quad `(i, j)` yields facets `2 * (j * nx + i)` and the one after.
pub fn grid(nx: u32, ny: u32) -> MeshKernel {
    let mut points = Vec::with_capacity(((nx + 1) * (ny + 1)) as usize);
    for j in 0..=ny {
        for i in 0..=nx {
            points.push(MeshPoint::new(f64::from(i), f64::from(j), 0.0));
        }
    }
    let id = |i: u32, j: u32| j * (nx + 1) + i;
    let mut facets = Vec::with_capacity((2 * nx * ny) as usize);
    for j in 0..ny {
        for i in 0..nx {
            let (a, b, c, d) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            facets.push(MeshFacet::new(a, b, c));
            facets.push(MeshFacet::new(a, c, d));
        }
    }
    let mut k = MeshKernel::new(points, facets);
    k.rebuild_neighbours();
    k
}

pub fn flip(mesh: &mut MeshKernel, indices: &[FacetIndex]) {
    for &i in indices {
        mesh.facet_mut(i).flip_normal();
    }
}

/// Every linked pair is consistent and every link is symmetric.
pub fn assert_consistent(mesh: &MeshKernel) {
    for (i, f) in mesh.facets().iter().enumerate() {
        for &n in f.neighbours.iter().filter(|&&n| n != NO_NEIGHBOUR) {
            let g = mesh.facet(n);
            assert!(
                f.has_same_orientation(g),
                "facets {i} and {n} disagree: {:?} vs {:?}",
                f.points,
                g.points
            );
            assert!(g.neighbours.contains(&(i as FacetIndex)), "link {i} -> {n} is one-sided");
        }
    }
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
