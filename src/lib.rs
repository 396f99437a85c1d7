#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-topo
//!
//! mesh-topo is a topology kernel for indexed triangle meshes. It stores points and facets
//! with explicit edge adjacency and provides the algorithms that keep that structure coherent:
//! region growing over the facet graph, detection of inconsistently oriented facets, normal
//! harmonization and compaction of deleted elements.
//!
//! ## Features
//! - [`MeshKernel`](topology::MeshKernel) store with per-facet flag bytes and a bounding box
//! - Breadth-first facet traversal driven by the [`FacetVisitor`](algs::FacetVisitor) trait
//! - [`OrientationEvaluator`](algs::OrientationEvaluator) with majority vote and false-positive correction
//! - [`TopoAlgorithm`](algs::TopoAlgorithm) for flipping, invalidating and compacting facets
//! - Structural checks through [`DebugInvariants`], on in debug builds or with `strict-invariants`
//!
//! ## Usage
//! Add `mesh-topo` as a dependency in your `Cargo.toml` and enable features as needed:
//!
//! ```toml
//! [dependencies]
//! mesh-topo = "0.3"
//! # Optional features:
//! # features = ["rayon", "strict-invariants"]
//! ```
//!
//! ## Flags
//! Facet flags double as scratch memory for the algorithms. `VISIT`, `TMP0` and `TMP1` are
//! overwritten by traversal, orientation and compaction; `SEGMENT`, `MARKED`, `SELECTED` and
//! `REV` belong to the caller and are never touched.
//!
//! ## Indices
//! All cross references are `u32` indices. Removing elements renumbers every survivor, so
//! indices held outside the kernel are stale after a compaction.

pub mod algs;
pub mod debug_invariants;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::compact::CompactionReport;
    pub use crate::algs::flags::FlagAlgorithm;
    pub use crate::algs::orientation::{OrientationEvaluator, OrientationOptions};
    pub use crate::algs::topo::TopoAlgorithm;
    pub use crate::algs::traversal::{FacetVisitor, RingCollector, visit_neighbour_facets};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshTopoError;
    pub use crate::topology::{
        BoundBox3, FacetFlags, FacetIndex, MeshFacet, MeshKernel, MeshPoint, NO_NEIGHBOUR,
        PointIndex,
    };
}
