//! A single applied load value at a position along the beam.

use serde::{Deserialize, Serialize};

/// Magnitude applied at a distance from the beam start.
///
/// The sign of `magnitude` follows whatever axis the caller picked; the
/// solver never flips it. `position` is measured from the left support and
/// conventionally lies in `[0, length]`, but this is not enforced.
///
/// Used for point forces, point moments, and as the vertices of a
/// [`LoadSegment`](super::LoadSegment).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInstance {
    magnitude: f64,
    position: f64,
}

impl LoadInstance {
    /// Create a load instance
    pub fn new(magnitude: f64, position: f64) -> Self {
        LoadInstance { magnitude, position }
    }

    /// Signed load value
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Distance from the beam start
    pub fn position(&self) -> f64 {
        self.position
    }
}
