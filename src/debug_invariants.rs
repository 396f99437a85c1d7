use crate::mesh_error::MeshTopoError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshTopoError>;
}

/// Run [`DebugInvariants::debug_assert_invariants`] on a value in debug
/// builds or with the `strict-invariants` feature; a no-op otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($s:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants(&$s);
    };
}
