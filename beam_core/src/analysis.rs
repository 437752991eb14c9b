//! Diagram Sampling
//!
//! Samples all four responses along the span and reports the governing
//! values. Sample positions are an even grid plus a cluster around every
//! load position so that jumps and kinks are not smeared out.
//!
//! ## Example
//! ```rust
//! use beam_core::loads::{LoadAssembly, LoadInstance};
//! use beam_core::model::BeamModel;
//! use beam_core::solver::BeamSolver;
//!
//! let mut loads = LoadAssembly::new();
//! loads.add_point_force(LoadInstance::new(-1000.0, 6.0));
//!
//! let model = BeamModel::new(12.0, 200e9, 8.0e-5, &loads).unwrap();
//! let results = BeamSolver::new(model).analyze(101).unwrap();
//!
//! assert!((results.moment.value + 3000.0).abs() < 1e-6);
//! assert!((results.moment.position - 6.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::BeamResult;
use crate::solver::{BeamSolver, Reactions, ResponseKind};

/// Default number of evenly spaced samples (every 1% of span)
pub const DEFAULT_SAMPLE_POINTS: usize = 101;

/// Fewer evenly spaced samples than this are raised to it
pub const MIN_SAMPLE_POINTS: usize = 11;

/// All four responses at one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub position: f64,
    pub shear: f64,
    pub moment: f64,
    pub slope: f64,
    pub deflection: f64,
}

impl Station {
    pub fn value(&self, kind: ResponseKind) -> f64 {
        match kind {
            ResponseKind::Shear => self.shear,
            ResponseKind::Moment => self.moment,
            ResponseKind::Slope => self.slope,
            ResponseKind::Deflection => self.deflection,
        }
    }
}

/// Largest-magnitude sampled value and where it occurs. The sign is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extreme {
    pub value: f64,
    pub position: f64,
}

/// Results from sampling a beam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reactions: Reactions,
    pub shear: Extreme,
    pub moment: Extreme,
    pub slope: Extreme,
    pub deflection: Extreme,
    /// Sampled responses, sorted by position
    pub stations: Vec<Station>,
}

impl AnalysisResults {
    pub fn extreme(&self, kind: ResponseKind) -> Extreme {
        match kind {
            ResponseKind::Shear => self.shear,
            ResponseKind::Moment => self.moment,
            ResponseKind::Slope => self.slope,
            ResponseKind::Deflection => self.deflection,
        }
    }

    /// One response as `(position, value)` pairs for plotting
    pub fn diagram(&self, kind: ResponseKind) -> Vec<(f64, f64)> {
        self.stations.iter().map(|s| (s.position, s.value(kind))).collect()
    }
}

impl BeamSolver<'_> {
    /// Sample the beam and find the governing responses.
    ///
    /// `sample_points` evenly spaced positions cover `[0, length]`
    /// (at least [`MIN_SAMPLE_POINTS`]); load positions inside the span add
    /// a point just before, at, and just after each of them. Grid points
    /// crowding a load position give way to it.
    pub fn analyze(&self, sample_points: usize) -> BeamResult<AnalysisResults> {
        let positions = self.sample_positions(sample_points.max(MIN_SAMPLE_POINTS));
        debug!(stations = positions.len(), "Sampling beam responses");

        let mut stations = Vec::with_capacity(positions.len());
        for &x in &positions {
            stations.push(Station {
                position: x,
                shear: self.shear(x)?,
                moment: self.moment(x)?,
                slope: self.slope(x)?,
                deflection: self.deflection(x)?,
            });
        }

        Ok(AnalysisResults {
            reactions: self.reactions()?,
            shear: governing(&stations, ResponseKind::Shear),
            moment: governing(&stations, ResponseKind::Moment),
            slope: governing(&stations, ResponseKind::Slope),
            deflection: governing(&stations, ResponseKind::Deflection),
            stations,
        })
    }

    fn sample_positions(&self, sample_points: usize) -> Vec<f64> {
        let length = self.model().length();
        let epsilon = length * 0.001;

        // Load positions always survive; neighbours only inside the span
        let mut critical = Vec::new();
        for pos in self.model().loads().positions() {
            if pos > 0.0 && pos < length {
                critical.push(pos);
                critical.extend(
                    [pos - epsilon, pos + epsilon]
                        .into_iter()
                        .filter(|&x| x > 0.0 && x < length),
                );
            }
        }

        let last = sample_points - 1;
        let mut positions: Vec<f64> = (0..sample_points)
            .filter_map(|i| {
                let x = length * i as f64 / last as f64;
                let crowded = critical.iter().any(|&c| (x - c).abs() < epsilon / 2.0);
                (i == 0 || i == last || !crowded).then_some(x)
            })
            .collect();
        positions.extend(critical);

        positions.sort_by(f64::total_cmp);
        positions.dedup();
        positions
    }
}

fn governing(stations: &[Station], kind: ResponseKind) -> Extreme {
    stations.iter().fold(Extreme::default(), |best, station| {
        let value = station.value(kind);
        if value.abs() > best.value.abs() {
            Extreme {
                value,
                position: station.position,
            }
        } else {
            best
        }
    })
}
