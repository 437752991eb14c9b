//! Simply-Supported Beam Solver
//!
//! Internal shear, moment, slope and deflection by Macaulay's method. Every
//! load is written as a sum of singularity brackets, the brackets are
//! superposed into a "series" for a given derivative order, and the two
//! constants of integration are fixed by the support conditions:
//!
//! - zero moment at `x = L` gives the shear just right of the left support;
//! - zero deflection at `x = L` then gives the slope at the left support.
//!
//! Zero moment and zero deflection at `x = 0` hold automatically since every
//! bracket vanishes there.
//!
//! ## Sign Convention
//!
//! Load magnitudes are used exactly as given. With loads along -Z given as
//! negative values, a downward load produces negative shear at the left
//! support, negative moment within the span, and positive deflection.
//!
//! ## Example
//! ```rust
//! use beam_core::loads::{LoadAssembly, LoadInstance};
//! use beam_core::model::BeamModel;
//! use beam_core::solver::BeamSolver;
//!
//! let mut loads = LoadAssembly::new();
//! loads.add_point_force(LoadInstance::new(-10.0, 5.0));
//!
//! let model = BeamModel::new(10.0, 32e9, 0.0054, &loads).unwrap();
//! let solver = BeamSolver::new(model);
//!
//! assert!((solver.shear(0.0).unwrap() + 5.0).abs() < 1e-10);
//! assert!((solver.moment(5.0).unwrap() + 25.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{BeamError, BeamResult};
use crate::loads::{LoadInstance, Ramp};
use crate::model::BeamModel;
use crate::singularity::{denominator, singularity};

/// What to do with query positions outside `[0, length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpanPolicy {
    /// Evaluate the closed-form expressions as-is, wherever `x` lies.
    #[default]
    Extrapolate,
    /// Reject `x < 0`, `x > length` and non-finite `x` with
    /// [`BeamError::PositionOutOfSpan`].
    Strict,
}

/// The four responses the solver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseKind {
    Shear,
    Moment,
    Slope,
    Deflection,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 4] = [
        ResponseKind::Shear,
        ResponseKind::Moment,
        ResponseKind::Slope,
        ResponseKind::Deflection,
    ];

    /// Get display name for output
    pub fn label(&self) -> &'static str {
        match self {
            ResponseKind::Shear => "Shear",
            ResponseKind::Moment => "Moment",
            ResponseKind::Slope => "Slope",
            ResponseKind::Deflection => "Deflection",
        }
    }
}

/// Support reactions, on the same axis as the applied loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction at the pinned support (x = 0)
    pub left: f64,
    /// Reaction at the roller support (x = length)
    pub right: f64,
}

/// Stateless solver over one [`BeamModel`].
///
/// Nothing is cached: each query re-derives the boundary constants, so the
/// cost of a query is linear in the number of load items.
#[derive(Debug, Clone, Copy)]
pub struct BeamSolver<'a> {
    model: BeamModel<'a>,
    span_policy: SpanPolicy,
}

impl<'a> BeamSolver<'a> {
    /// Create a solver with the default [`SpanPolicy::Extrapolate`].
    pub fn new(model: BeamModel<'a>) -> Self {
        debug!(
            length = model.length(),
            flexural_rigidity = model.flexural_rigidity(),
            load_items = model.loads().len(),
            "Created simply-supported beam solver"
        );
        BeamSolver {
            model,
            span_policy: SpanPolicy::default(),
        }
    }

    /// Set the span policy and return self (builder pattern)
    pub fn with_span_policy(mut self, span_policy: SpanPolicy) -> Self {
        self.span_policy = span_policy;
        self
    }

    pub fn model(&self) -> &BeamModel<'a> {
        &self.model
    }

    pub fn span_policy(&self) -> SpanPolicy {
        self.span_policy
    }

    /// Internal shear force at `x`
    pub fn shear(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x)?;
        let ei = self.model.flexural_rigidity();
        let shear = self.start_shear()? + ei * self.series(-1, x)?;
        trace!(x, shear, "shear");
        Ok(shear)
    }

    /// Internal bending moment at `x`
    pub fn moment(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x)?;
        let ei = self.model.flexural_rigidity();
        let moment = self.start_shear()? * x + ei * self.series(0, x)?;
        trace!(x, moment, "moment");
        Ok(moment)
    }

    /// Slope of the deflected shape at `x`
    pub fn slope(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x)?;
        let ei = self.model.flexural_rigidity();
        let start_shear = self.start_shear()?;
        let slope = self.start_slope(start_shear)? + start_shear * x.powi(2) / (2.0 * ei) + self.series(1, x)?;
        trace!(x, slope, "slope");
        Ok(slope)
    }

    /// Deflection at `x`
    pub fn deflection(&self, x: f64) -> BeamResult<f64> {
        self.check_position(x)?;
        let ei = self.model.flexural_rigidity();
        let start_shear = self.start_shear()?;
        let deflection =
            self.start_slope(start_shear)? * x + start_shear * x.powi(3) / (6.0 * ei) + self.series(2, x)?;
        trace!(x, deflection, "deflection");
        Ok(deflection)
    }

    /// Dispatch to one of the four response queries
    pub fn response(&self, kind: ResponseKind, x: f64) -> BeamResult<f64> {
        match kind {
            ResponseKind::Shear => self.shear(x),
            ResponseKind::Moment => self.moment(x),
            ResponseKind::Slope => self.slope(x),
            ResponseKind::Deflection => self.deflection(x),
        }
    }

    /// Support reactions from the boundary shear and vertical equilibrium.
    ///
    /// `left + right + total applied force == 0`.
    pub fn reactions(&self) -> BeamResult<Reactions> {
        let left = -self.start_shear()?;
        let right = -(left + self.model.loads().total_force());
        Ok(Reactions { left, right })
    }

    /// Shear just right of the left support, from M(L) = 0.
    fn start_shear(&self) -> BeamResult<f64> {
        let length = self.model.length();
        let start_shear = -(self.model.flexural_rigidity() * self.series(0, length)?) / length;
        trace!(start_shear, "resolved start shear");
        Ok(start_shear)
    }

    /// Slope at the left support, from deflection(L) = 0.
    fn start_slope(&self, start_shear: f64) -> BeamResult<f64> {
        let length = self.model.length();
        let ei = self.model.flexural_rigidity();
        let start_slope = (-start_shear * length.powi(3) / (6.0 * ei) - self.series(2, length)?) / length;
        trace!(start_slope, "resolved start slope");
        Ok(start_slope)
    }

    /// Superpose every load's bracket terms for derivative order `min_exponent`.
    ///
    /// Point moments enter at `min_exponent`, point forces and distributed
    /// moments one order higher, distributed forces two orders higher. An
    /// empty assembly sums to zero.
    fn series(&self, min_exponent: i32, x: f64) -> BeamResult<f64> {
        let loads = self.model.loads();
        let ei = self.model.flexural_rigidity();

        let mut output = 0.0;
        for force in loads.point_forces() {
            output += point_term(force, ei, min_exponent + 1, x)?;
        }
        for moment in loads.point_moments() {
            output += point_term(moment, ei, min_exponent, x)?;
        }
        for segment in loads.distributed_forces() {
            for ramp in segment.ramps() {
                output += ramp_term(&ramp, ei, min_exponent + 2, x)?;
            }
        }
        for segment in loads.distributed_moments() {
            for ramp in segment.ramps() {
                output += ramp_term(&ramp, ei, min_exponent + 1, x)?;
            }
        }
        Ok(output)
    }

    fn check_position(&self, x: f64) -> BeamResult<()> {
        match self.span_policy {
            SpanPolicy::Extrapolate => Ok(()),
            SpanPolicy::Strict => {
                let length = self.model.length();
                if x.is_finite() && (0.0..=length).contains(&x) {
                    Ok(())
                } else {
                    Err(BeamError::position_out_of_span(x, length))
                }
            }
        }
    }
}

/// `-P / (EI * d(n)) * <x - a>^n`
fn point_term(load: &LoadInstance, ei: f64, order: i32, x: f64) -> BeamResult<f64> {
    let bracket = singularity(load.position(), order, x)?;
    Ok(-load.magnitude() / (denominator(order)? * ei) * bracket)
}

/// Closed-form integral of a linear ramp of point terms.
///
/// The intensity terms at `order` carry the end magnitudes; the correction at
/// `order + 1` carries the ramp slope and vanishes for uniform ramps.
fn ramp_term(ramp: &Ramp, ei: f64, order: i32, x: f64) -> BeamResult<f64> {
    let (start, end) = (ramp.start(), ramp.end());
    let a = start.position();
    let b = end.position();

    let intensity = (-singularity(a, order, x)? * start.magnitude()
        + singularity(b, order, x)? * end.magnitude())
        / (denominator(order)? * ei);

    let correction = ramp.slope() * (-singularity(a, order + 1, x)? + singularity(b, order + 1, x)?)
        / (denominator(order + 1)? * ei);

    Ok(intensity + correction)
}
