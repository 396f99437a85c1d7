mod util;
use util::*;

use mesh_topo::algs::orientation::{OrientationEvaluator, OrientationOptions};
use mesh_topo::topology::{FacetFlags, MeshFacet, MeshKernel};

/// Appends `b` after `a`, renumbering its point references, and relinks.
fn disjoint_union(a: &MeshKernel, b: &MeshKernel) -> MeshKernel {
    let offset = a.count_points() as u32;
    let mut points = a.points().to_vec();
    points.extend_from_slice(b.points());
    let mut facets = a.facets().to_vec();
    facets.extend(b.facets().iter().map(|f| {
        MeshFacet::new(f.points[0] + offset, f.points[1] + offset, f.points[2] + offset)
    }));
    let mut k = MeshKernel::new(points, facets);
    k.rebuild_neighbours();
    k
}

#[test]
fn consistent_grid_needs_nothing() {
    let mut k = grid(4, 3);
    let mut eval = OrientationEvaluator::new(&mut k);
    assert!(eval.evaluate());
    assert!(eval.indices().is_empty());
}

#[test]
fn scattered_flips_are_found() {
    let mut k = grid(4, 4);
    flip(&mut k, &[5, 12, 30]);
    let mut eval = OrientationEvaluator::new(&mut k);
    assert!(!eval.evaluate());
    assert_eq!(eval.indices(), vec![5, 12, 30]);
}

#[test]
fn minority_seed_side_is_inverted() {
    // 24 of 32 facets flipped, the seed among the 8 that are not
    let mut k = grid(4, 4);
    let flipped: Vec<u32> = (8..32).collect();
    flip(&mut k, &flipped);
    let indices = OrientationEvaluator::new(&mut k).indices();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
}

#[test]
fn components_are_judged_separately() {
    let a = {
        let mut g = grid(2, 2);
        flip(&mut g, &[5]);
        g
    };
    let b = {
        let mut g = grid(2, 2);
        flip(&mut g, &[0, 1, 2, 3, 4]);
        g
    };
    let mut k = disjoint_union(&a, &b);
    let mut eval = OrientationEvaluator::new(&mut k);
    assert!(!eval.is_component_uniform(0));
    assert!(!eval.is_component_uniform(8));
    assert_eq!(eval.indices(), vec![5, 13, 14, 15]);
}

#[test]
fn zero_ratio_never_inverts() {
    let mut k = grid(4, 4);
    let flipped: Vec<u32> = (8..32).collect();
    flip(&mut k, &flipped);
    let options = OrientationOptions {
        minority_ratio: 0.0,
        ..OrientationOptions::default()
    };
    let indices = OrientationEvaluator::with_options(&mut k, options).indices();
    assert_eq!(indices, flipped);
}

#[test]
fn caller_flags_are_left_alone() {
    let mut k = grid(2, 2);
    flip(&mut k, &[3]);
    k.facet_mut(0).set_flag(FacetFlags::SELECTED);
    k.facet_mut(3).set_flag(FacetFlags::MARKED | FacetFlags::REV);
    OrientationEvaluator::new(&mut k).indices();
    assert!(k.facet(0).is_flag(FacetFlags::SELECTED));
    assert!(k.facet(3).is_flag(FacetFlags::MARKED | FacetFlags::REV));
    assert!(k.facets().iter().all(|f| f.is_flag(FacetFlags::VISIT)));
}

#[test]
fn empty_mesh_has_nothing_to_flip() {
    let mut k = MeshKernel::default();
    let mut eval = OrientationEvaluator::new(&mut k);
    assert!(eval.evaluate());
    assert!(eval.indices().is_empty());
}
