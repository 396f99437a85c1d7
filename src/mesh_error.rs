//! MeshTopoError: unified error type for mesh-topo public APIs
//!
//! The hot paths of this crate (traversal, flips, compaction) work on
//! trusted indices and do not return errors. This type is produced by the
//! checked entry points, chiefly [`MeshKernel::try_new`] and
//! [`DebugInvariants::validate_invariants`].
//!
//! [`MeshKernel::try_new`]: crate::topology::kernel::MeshKernel::try_new
//! [`DebugInvariants::validate_invariants`]: crate::debug_invariants::DebugInvariants::validate_invariants

use thiserror::Error;

use crate::topology::{FacetIndex, PointIndex};

/// Unified error type for mesh-topo operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshTopoError {
    /// A facet corner refers past the end of the point array.
    #[error("facet {facet}: corner {corner} references point {point}, but only {len} points exist")]
    PointIndexOutOfRange {
        facet: FacetIndex,
        corner: usize,
        point: PointIndex,
        len: usize,
    },
    /// A non-sentinel neighbour slot refers past the end of the facet array.
    #[error("facet {facet}: neighbour slot {side} references facet {neighbour}, but only {len} facets exist")]
    NeighbourIndexOutOfRange {
        facet: FacetIndex,
        side: usize,
        neighbour: FacetIndex,
        len: usize,
    },
    /// A facet index handed to an accessor is out of range.
    #[error("facet index {index} out of range (len = {len})")]
    FacetIndexOutOfRange { index: FacetIndex, len: usize },
    /// A valid facet uses a point that is marked invalid.
    #[error("valid facet {facet} references invalid point {point}")]
    InvalidPointReference { facet: FacetIndex, point: PointIndex },
    /// A facet lists itself as its own neighbour.
    #[error("facet {facet} is its own neighbour across edge {side}")]
    SelfNeighbour { facet: FacetIndex, side: usize },
}
