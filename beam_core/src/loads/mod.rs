//! Loads applied to a beam
//!
//! # Overview
//!
//! - [`LoadInstance`] - A magnitude at a position (point force or point moment)
//! - [`LoadSegment`] - Piecewise-linear distributed force or moment
//! - [`LoadAssembly`] - Everything applied to one beam, grouped by kind
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{LoadAssembly, LoadInstance};
//!
//! let mut loads = LoadAssembly::new();
//! loads.add_point_force(LoadInstance::new(-10.0, 5.0));
//! loads
//!     .add_distributed_force([LoadInstance::new(-2.0, 0.0), LoadInstance::new(-2.0, 10.0)])
//!     .unwrap();
//!
//! assert_eq!(loads.len(), 2);
//! assert_eq!(loads.total_force(), -30.0);
//! ```

pub mod instance;
pub mod segment;

pub use instance::LoadInstance;
pub use segment::{LoadSegment, Ramp, DEGENERATE_TOLERANCE};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::BeamResult;

/// Collector for all loads on a single beam.
///
/// Loads are only ever appended; insertion order is kept but carries no
/// meaning for the solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadAssembly {
    point_forces: Vec<LoadInstance>,
    point_moments: Vec<LoadInstance>,
    distributed_forces: Vec<LoadSegment>,
    distributed_moments: Vec<LoadSegment>,
}

impl LoadAssembly {
    /// Create an empty assembly
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point_force(&mut self, load: LoadInstance) {
        self.point_forces.push(load);
    }

    pub fn add_point_moment(&mut self, moment: LoadInstance) {
        self.point_moments.push(moment);
    }

    /// Add a distributed force through two or more points.
    ///
    /// Fails with `InvalidInput` when fewer than two points are supplied;
    /// the assembly is left untouched in that case.
    pub fn add_distributed_force<I>(&mut self, points: I) -> BeamResult<()>
    where
        I: IntoIterator<Item = LoadInstance>,
    {
        let segment = LoadSegment::new(points.into_iter().collect())?;
        self.add_distributed_force_segment(segment);
        Ok(())
    }

    /// Add a distributed moment through two or more points.
    pub fn add_distributed_moment<I>(&mut self, points: I) -> BeamResult<()>
    where
        I: IntoIterator<Item = LoadInstance>,
    {
        let segment = LoadSegment::new(points.into_iter().collect())?;
        self.add_distributed_moment_segment(segment);
        Ok(())
    }

    pub fn add_distributed_force_segment(&mut self, segment: LoadSegment) {
        log_skipped_pairs("distributed force", &segment);
        self.distributed_forces.push(segment);
    }

    pub fn add_distributed_moment_segment(&mut self, segment: LoadSegment) {
        log_skipped_pairs("distributed moment", &segment);
        self.distributed_moments.push(segment);
    }

    pub fn point_forces(&self) -> &[LoadInstance] {
        &self.point_forces
    }

    pub fn point_moments(&self) -> &[LoadInstance] {
        &self.point_moments
    }

    pub fn distributed_forces(&self) -> &[LoadSegment] {
        &self.distributed_forces
    }

    pub fn distributed_moments(&self) -> &[LoadSegment] {
        &self.distributed_moments
    }

    /// Total number of load items across all four groups
    pub fn len(&self) -> usize {
        self.point_forces.len()
            + self.point_moments.len()
            + self.distributed_forces.len()
            + self.distributed_moments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of every applied force: point forces plus the area under each
    /// distributed force. Moments contribute nothing.
    pub fn total_force(&self) -> f64 {
        let points: f64 = self.point_forces.iter().map(|p| p.magnitude()).sum();
        let distributed: f64 = self.distributed_forces.iter().map(|s| s.resultant()).sum();
        points + distributed
    }

    /// Every position at which some load starts, stops, or acts.
    pub fn positions(&self) -> Vec<f64> {
        self.point_forces
            .iter()
            .chain(self.point_moments.iter())
            .chain(
                self.distributed_forces
                    .iter()
                    .chain(self.distributed_moments.iter())
                    .flat_map(|segment| segment.points().iter()),
            )
            .map(|load| load.position())
            .collect()
    }
}

fn log_skipped_pairs(kind: &str, segment: &LoadSegment) {
    let skipped = segment.points().len() - 1 - segment.ramps().count();
    if skipped > 0 {
        debug!(kind, skipped, "zero-length pairs in segment will be skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assembly_is_empty() {
        let loads = LoadAssembly::new();
        assert!(loads.is_empty());
        assert_eq!(loads.total_force(), 0.0);
        assert!(loads.positions().is_empty());
    }

    #[test]
    fn test_loads_grouped_by_kind() {
        let mut loads = LoadAssembly::new();
        loads.add_point_force(LoadInstance::new(-10.0, 5.0));
        loads.add_point_moment(LoadInstance::new(3.0, 2.0));
        loads
            .add_distributed_force([LoadInstance::new(0.0, 0.0), LoadInstance::new(-10.0, 5.0)])
            .unwrap();
        loads
            .add_distributed_moment([LoadInstance::new(1.0, 1.0), LoadInstance::new(1.0, 3.0)])
            .unwrap();

        assert_eq!(loads.point_forces().len(), 1);
        assert_eq!(loads.point_moments().len(), 1);
        assert_eq!(loads.distributed_forces().len(), 1);
        assert_eq!(loads.distributed_moments().len(), 1);
        assert_eq!(loads.len(), 4);
        // -10 point + triangle of area -25; the moment groups add no force
        assert_eq!(loads.total_force(), -35.0);
        assert_eq!(loads.positions(), vec![5.0, 2.0, 0.0, 5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_short_distributed_load_leaves_assembly_untouched() {
        let mut loads = LoadAssembly::new();
        let result = loads.add_distributed_force([LoadInstance::new(1.0, 0.0)]);
        assert!(result.is_err());
        assert!(loads.is_empty());
    }

    #[test]
    fn test_partial_json_uses_empty_groups() {
        let json = r#"{"point_forces":[{"magnitude":-10.0,"position":5.0}]}"#;
        let loads: LoadAssembly = serde_json::from_str(json).unwrap();
        assert_eq!(loads.len(), 1);
        assert!(loads.distributed_forces().is_empty());
    }
}
