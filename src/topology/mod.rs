//! Mesh data: points, facets, flags and the kernel that owns them.
//!
//! Elements refer to each other by plain `u32` indices into the kernel's
//! arrays. This keeps the store compact and lets compaction renumber every
//! reference in one coordinated pass.

pub mod bounds;
pub mod facet;
pub mod flags;
pub mod kernel;
pub mod point;
pub mod validation;

pub use bounds::BoundBox3;
pub use facet::MeshFacet;
pub use flags::FacetFlags;
pub use kernel::MeshKernel;
pub use point::MeshPoint;

/// Index into the point array of a [`MeshKernel`].
pub type PointIndex = u32;
/// Index into the facet array of a [`MeshKernel`].
pub type FacetIndex = u32;

/// Neighbour slot value for an open (boundary) edge.
pub const NO_NEIGHBOUR: FacetIndex = FacetIndex::MAX;

#[cfg(test)]
pub(crate) mod fixtures;
