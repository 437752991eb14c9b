//! Piecewise-linear distributed loads
//!
//! A [`LoadSegment`] is an ordered list of two or more [`LoadInstance`]s.
//! Each adjacent pair is one linear ramp from `(p1, m1)` to `(p2, m2)`.
//! Pairs whose positions coincide (within [`DEGENERATE_TOLERANCE`]) have no
//! length and are skipped, which lets a single segment describe a step in
//! intensity:
//!
//! ```text
//! magnitude
//!   19.6 |        +---------+
//!    9.5 +--------+         +--------+
//!        0       1.5       4.0      5.5
//! ```
//!
//! ```rust
//! use beam_core::loads::{LoadInstance, LoadSegment};
//!
//! let landing = LoadSegment::new(vec![
//!     LoadInstance::new(9.525, 0.0),
//!     LoadInstance::new(9.525, 1.5),
//!     LoadInstance::new(19.62768, 1.5),
//!     LoadInstance::new(19.62768, 4.0),
//!     LoadInstance::new(9.525, 4.0),
//!     LoadInstance::new(9.525, 5.5),
//! ]).unwrap();
//!
//! assert_eq!(landing.ramps().count(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::LoadInstance;
use crate::errors::{BeamError, BeamResult};

/// Adjacent points closer than this are treated as a zero-length pair.
pub const DEGENERATE_TOLERANCE: f64 = 1e-10;

/// Ordered sequence of at least two load points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LoadInstance>", into = "Vec<LoadInstance>")]
pub struct LoadSegment {
    points: Vec<LoadInstance>,
}

impl LoadSegment {
    /// Create a segment from its points.
    ///
    /// # Returns
    ///
    /// * `Err(BeamError::InvalidInput)` - fewer than two points were given
    pub fn new(points: Vec<LoadInstance>) -> BeamResult<Self> {
        if points.len() < 2 {
            return Err(BeamError::invalid_input(
                "points",
                points.len().to_string(),
                "A distributed segment needs at least two points",
            ));
        }
        Ok(LoadSegment { points })
    }

    /// Single linear ramp between two points
    pub fn pair(start: LoadInstance, end: LoadInstance) -> Self {
        LoadSegment {
            points: vec![start, end],
        }
    }

    /// Constant intensity between `start` and `end`
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Self::pair(
            LoadInstance::new(magnitude, start),
            LoadInstance::new(magnitude, end),
        )
    }

    /// All points, in insertion order
    pub fn points(&self) -> &[LoadInstance] {
        &self.points
    }

    /// Adjacent pairs with non-zero length.
    pub fn ramps(&self) -> impl Iterator<Item = Ramp> + '_ {
        self.points
            .windows(2)
            .filter_map(|pair| Ramp::between(pair[0], pair[1]))
    }

    /// Integral of the intensity over every ramp (total force for a
    /// distributed force, total couple for a distributed moment).
    pub fn resultant(&self) -> f64 {
        self.ramps().map(|ramp| ramp.resultant()).sum()
    }
}

impl TryFrom<Vec<LoadInstance>> for LoadSegment {
    type Error = BeamError;

    fn try_from(points: Vec<LoadInstance>) -> BeamResult<Self> {
        LoadSegment::new(points)
    }
}

impl From<LoadSegment> for Vec<LoadInstance> {
    fn from(segment: LoadSegment) -> Self {
        segment.points
    }
}

/// One linear piece of a [`LoadSegment`]. Only obtained from
/// [`LoadSegment::ramps`], so its length is never below
/// [`DEGENERATE_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    start: LoadInstance,
    end: LoadInstance,
}

impl Ramp {
    fn between(start: LoadInstance, end: LoadInstance) -> Option<Self> {
        let ramp = Ramp { start, end };
        (ramp.length().abs() >= DEGENERATE_TOLERANCE).then_some(ramp)
    }

    pub fn start(&self) -> LoadInstance {
        self.start
    }

    pub fn end(&self) -> LoadInstance {
        self.end
    }

    /// Signed distance from start to end
    pub fn length(&self) -> f64 {
        self.end.position() - self.start.position()
    }

    /// Change in intensity per unit length
    pub fn slope(&self) -> f64 {
        (self.end.magnitude() - self.start.magnitude()) / self.length()
    }

    /// Area under the ramp
    pub fn resultant(&self) -> f64 {
        0.5 * (self.start.magnitude() + self.end.magnitude()) * self.length()
    }
}
