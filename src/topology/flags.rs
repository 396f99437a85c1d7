//! Per-facet status bits.
//!
//! Two groups share the byte:
//! - transient scratch bits (`VISIT`, `TMP0`, `TMP1`) that algorithms reset
//!   before they rely on them;
//! - semantic bits (`SEGMENT`, `MARKED`, `SELECTED`, `REV`) owned by callers.
//!   Nothing in this crate sets or clears them.
//!
//! `INVALID` marks an element for removal by the next compaction.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Status flags of a [`MeshFacet`](crate::topology::facet::MeshFacet).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct FacetFlags: u8 {
        /// Facet is scheduled for removal.
        const INVALID = 1;
        /// Facet was reached by the current traversal.
        const VISIT = 2;
        /// Facet belongs to a caller-defined segment.
        const SEGMENT = 4;
        /// Caller-defined mark.
        const MARKED = 8;
        /// Facet is part of the caller's selection.
        const SELECTED = 16;
        /// Caller-defined "reversed" mark.
        const REV = 32;
        /// Algorithm scratch bit.
        const TMP0 = 64;
        /// Algorithm scratch bit.
        const TMP1 = 128;
    }
}

impl FacetFlags {
    /// All bits that algorithms may use as scratch space.
    pub const SCRATCH: FacetFlags = FacetFlags::VISIT
        .union(FacetFlags::TMP0)
        .union(FacetFlags::TMP1);

    /// Bits reserved for external owners.
    pub const RESERVED: FacetFlags = FacetFlags::SEGMENT
        .union(FacetFlags::MARKED)
        .union(FacetFlags::SELECTED)
        .union(FacetFlags::REV);
}
