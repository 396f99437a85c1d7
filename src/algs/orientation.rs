//! Orientation consistency of adjacent facets.
//!
//! Two adjacent facets are consistently oriented when they traverse their
//! shared edge in opposite directions. [`OrientationEvaluator::indices`]
//! finds a set of facets whose flipping makes every connected component
//! consistent:
//!
//! 1. Each component is grown from its lowest unvisited facet. Facets are
//!    classified relative to the seed by comparing each one with the facet
//!    it was reached from; a facet is "wrong" when it is inconsistent with a
//!    "right" predecessor or consistent with a "wrong" one (`TMP0` carries
//!    the "wrong" mark along the walk).
//! 2. If fewer than 40% of a component agree with the seed, the seed side is
//!    taken to be the wrong one and the two groups are swapped.
//! 3. Defects in the neighbour structure can make the walk misplace the
//!    border between the groups. Every wrong facet that has a consistent,
//!    right neighbour marks such a false positive; the wrong facets reachable
//!    from there with consistent orientation are dropped again. The loop ends
//!    when no false positive is left or the same one is reported twice.
//!
//! The result is a heuristic. Non-manifold or non-orientable input may keep
//! some wrong facets after the loop has stopped.

use std::mem;
use std::ops::ControlFlow;

use itertools::{EitherOrBoth, Itertools};

use crate::algs::flags::FlagAlgorithm;
use crate::algs::traversal::{FacetVisitor, visit_neighbour_facets};
use crate::topology::{FacetFlags, FacetIndex, MeshFacet, MeshKernel, NO_NEIGHBOUR};

/// Tuning knobs of [`OrientationEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationOptions {
    /// A component whose seed-agreeing share is below this ratio of its
    /// size is inverted.
    pub minority_ratio: f32,
    /// Run the false-positive correction loop after region growing.
    pub correct_false_positives: bool,
}

impl Default for OrientationOptions {
    fn default() -> Self {
        Self {
            minority_ratio: 0.4,
            correct_false_positives: true,
        }
    }
}

/// Stops at the first facet that is inconsistent with its predecessor.
#[derive(Debug, Default)]
pub struct OrientationVisitor {
    nonuniform: bool,
}

impl OrientationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once an inconsistent pair was seen.
    pub fn has_nonuniform_orientation(&self) -> bool {
        self.nonuniform
    }
}

impl FacetVisitor for OrientationVisitor {
    fn visit(
        &mut self,
        facet: &mut MeshFacet,
        from: &MeshFacet,
        _index: FacetIndex,
        _level: u32,
    ) -> ControlFlow<()> {
        if from.has_same_orientation(facet) {
            ControlFlow::Continue(())
        } else {
            self.nonuniform = true;
            ControlFlow::Break(())
        }
    }
}

/// Splits a component into facets oriented against the seed (`indices`)
/// and facets oriented like it (`complement`).
///
/// Requires `TMP0` to be clear on the component before the walk.
#[derive(Debug, Default)]
pub struct OrientationCollector {
    pub indices: Vec<FacetIndex>,
    pub complement: Vec<FacetIndex>,
}

impl FacetVisitor for OrientationCollector {
    fn visit(
        &mut self,
        facet: &mut MeshFacet,
        from: &MeshFacet,
        index: FacetIndex,
        _level: u32,
    ) -> ControlFlow<()> {
        let from_wrong = from.is_flag(FacetFlags::TMP0);
        // a flip across the edge toggles the classification of the predecessor
        let wrong = if facet.has_same_orientation(from) {
            from_wrong
        } else {
            !from_wrong
        };
        if wrong {
            facet.set_flag(FacetFlags::TMP0);
            self.indices.push(index);
        } else {
            self.complement.push(index);
        }
        ControlFlow::Continue(())
    }
}

/// Collects visited facets that are consistent with their predecessor.
#[derive(Debug, Default)]
pub struct SameOrientationCollector {
    pub indices: Vec<FacetIndex>,
}

impl FacetVisitor for SameOrientationCollector {
    fn visit(
        &mut self,
        facet: &mut MeshFacet,
        from: &MeshFacet,
        index: FacetIndex,
        _level: u32,
    ) -> ControlFlow<()> {
        if facet.has_same_orientation(from) {
            self.indices.push(index);
        }
        ControlFlow::Continue(())
    }
}

/// Finds facets with inconsistent orientation.
///
/// The evaluator uses the `VISIT` and `TMP0` scratch flags of the mesh and
/// leaves them set; nothing else is modified.
pub struct OrientationEvaluator<'a> {
    mesh: &'a mut MeshKernel,
    options: OrientationOptions,
}

impl<'a> OrientationEvaluator<'a> {
    pub fn new(mesh: &'a mut MeshKernel) -> Self {
        Self::with_options(mesh, OrientationOptions::default())
    }

    pub fn with_options(mesh: &'a mut MeshKernel, options: OrientationOptions) -> Self {
        Self { mesh, options }
    }

    /// `true` if no pair of adjacent facets is inconsistently oriented.
    ///
    /// A plain scan over all neighbour links; no flags are used.
    pub fn evaluate(&self) -> bool {
        let facets = self.mesh.facets();
        facets.iter().all(|f| {
            f.neighbours
                .iter()
                .filter(|&&n| n != NO_NEIGHBOUR && (n as usize) < facets.len())
                .all(|&n| f.has_same_orientation(&facets[n as usize]))
        })
    }

    /// `true` if the component of `seed` has uniform orientation.
    ///
    /// Resets `VISIT` mesh-wide before the walk.
    pub fn is_component_uniform(&mut self, seed: FacetIndex) -> bool {
        self.mesh.reset_facet_flag(FacetFlags::VISIT);
        let mut visitor = OrientationVisitor::new();
        visit_neighbour_facets(self.mesh, &mut visitor, seed);
        !visitor.has_nonuniform_orientation()
    }

    /// Ascending indices of the facets to flip.
    pub fn indices(&mut self) -> Vec<FacetIndex> {
        if self.mesh.is_empty() {
            return Vec::new();
        }

        {
            let mut flags = FlagAlgorithm::new(self.mesh);
            flags.reset_facet_flag(FacetFlags::VISIT);
            flags.reset_facet_flag(FacetFlags::TMP0);
        }

        let mut collector = OrientationCollector::default();
        let mut scan = 0usize;
        let mut start = Some(0 as FacetIndex);
        let mut components = 0usize;

        while let Some(seed) = start {
            let wrong_before = collector.indices.len();
            collector.complement.clear();
            collector.complement.push(seed);
            let visited = visit_neighbour_facets(self.mesh, &mut collector, seed) + 1;
            components += 1;

            let threshold = self.options.minority_ratio * visited as f32;
            if (collector.complement.len() as f32) < threshold {
                collector.indices.truncate(wrong_before);
                let complement = mem::take(&mut collector.complement);
                collector.indices.extend_from_slice(&complement);
                collector.complement = complement;
            }
            log::debug!(
                "orientation: component {components} from seed {seed}: {visited} facets, {} to flip",
                collector.indices.len() - wrong_before
            );

            // everything before the last seed is already visited
            start = self.mesh.facets()[scan..]
                .iter()
                .position(|f| !f.is_flag(FacetFlags::VISIT))
                .map(|offset| {
                    scan += offset;
                    scan as FacetIndex
                });
        }

        let mut indices = collector.indices;
        if self.options.correct_false_positives {
            indices = self.remove_false_positives(indices);
        }
        indices.sort_unstable();
        indices
    }

    fn remove_false_positives(&mut self, mut indices: Vec<FacetIndex>) -> Vec<FacetIndex> {
        self.mark_suspects(&indices);
        let mut seed = self.find_false_positive(&indices);
        while let Some(current) = seed {
            log::trace!("orientation: false positive next to facet {current}");
            FlagAlgorithm::new(self.mesh).reset_facets_flag(&indices, FacetFlags::VISIT);
            let mut same = SameOrientationCollector::default();
            visit_neighbour_facets(self.mesh, &mut same, current);

            indices.sort_unstable();
            same.indices.sort_unstable();
            indices = indices
                .into_iter()
                .merge_join_by(same.indices, |a, b| a.cmp(b))
                .filter_map(|e| match e {
                    EitherOrBoth::Left(i) => Some(i),
                    _ => None,
                })
                .collect();

            self.mark_suspects(&indices);
            seed = self.find_false_positive(&indices);
            if seed == Some(current) {
                log::warn!(
                    "orientation: false positive next to facet {current} persists; {} facets may be flipped needlessly",
                    indices.len()
                );
                break;
            }
        }
        indices
    }

    fn mark_suspects(&mut self, indices: &[FacetIndex]) {
        let mut flags = FlagAlgorithm::new(self.mesh);
        flags.reset_facet_flag(FacetFlags::TMP0);
        flags.set_facets_flag(indices, FacetFlags::TMP0);
    }

    /// First non-suspect neighbour of a suspect that shares its orientation.
    fn find_false_positive(&self, indices: &[FacetIndex]) -> Option<FacetIndex> {
        let facets = self.mesh.facets();
        for &i in indices {
            let f = &facets[i as usize];
            if !f.is_flag(FacetFlags::TMP0) {
                continue;
            }
            for &n in &f.neighbours {
                if n == NO_NEIGHBOUR || n as usize >= facets.len() {
                    continue;
                }
                let nb = &facets[n as usize];
                if !nb.is_flag(FacetFlags::TMP0) && f.has_same_orientation(nb) {
                    return Some(n);
                }
            }
        }
        None
    }
}
