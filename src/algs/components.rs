//! Connected components of the facet adjacency graph.

use std::ops::ControlFlow;

use crate::algs::traversal::visit_neighbour_facets;
use crate::topology::{FacetFlags, FacetIndex, MeshFacet, MeshKernel};

/// Partitions the facets into edge-connected components.
///
/// Components are ordered by their smallest facet index and each one is
/// sorted ascending. Resets and then sets [`FacetFlags::VISIT`] on every
/// facet.
pub fn connected_components(mesh: &mut MeshKernel) -> Vec<Vec<FacetIndex>> {
    mesh.reset_facet_flag(FacetFlags::VISIT);
    let mut components = Vec::new();
    let mut scan = 0usize;
    while let Some(offset) = mesh.facets()[scan..]
        .iter()
        .position(|f| !f.is_flag(FacetFlags::VISIT))
    {
        let seed = (scan + offset) as FacetIndex;
        let mut component = vec![seed];
        visit_neighbour_facets(
            mesh,
            &mut |_: &mut MeshFacet, _: &MeshFacet, i: FacetIndex, _: u32| {
                component.push(i);
                ControlFlow::Continue(())
            },
            seed,
        );
        component.sort_unstable();
        components.push(component);
        scan += offset + 1;
    }
    log::debug!(
        "connected_components: {} facets in {} components",
        mesh.count_facets(),
        components.len()
    );
    components
}

/// Number of edge-connected components.
pub fn count_components(mesh: &mut MeshKernel) -> usize {
    connected_components(mesh).len()
}
