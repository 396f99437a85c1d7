//! Re-export public algorithms.

pub mod compact;
pub mod components;
pub mod flags;
pub mod orientation;
pub mod topo;
pub mod traversal;

pub use compact::{CompactionReport, remove_invalids};
pub use components::{connected_components, count_components};
pub use flags::FlagAlgorithm;
pub use orientation::{OrientationEvaluator, OrientationOptions};
pub use topo::TopoAlgorithm;
pub use traversal::{FacetVisitor, RingCollector, visit_neighbour_facets};
