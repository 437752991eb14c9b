//! Beam Model
//!
//! A straight beam placed with its start at the origin, described by its
//! length, flexural stiffness inputs, and the loads applied to it.
//!
//! The model borrows its [`LoadAssembly`]: the assembly may be built up
//! incrementally beforehand, but it cannot be mutated while a model (and
//! therefore any solver built on it) is alive.

use crate::errors::{BeamError, BeamResult};
use crate::loads::LoadAssembly;

/// Immutable description of a simply-supported beam.
#[derive(Debug, Clone, Copy)]
pub struct BeamModel<'a> {
    length: f64,
    modulus: f64,
    moment_of_inertia: f64,
    loads: &'a LoadAssembly,
}

impl<'a> BeamModel<'a> {
    /// Create a beam model.
    ///
    /// # Arguments
    ///
    /// * `length` - Distance between supports
    /// * `modulus` - Elastic modulus
    /// * `moment_of_inertia` - Second moment of area of the section
    /// * `loads` - Loads applied to the beam
    ///
    /// All three scalars must be finite and strictly positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::loads::LoadAssembly;
    /// use beam_core::model::BeamModel;
    ///
    /// let loads = LoadAssembly::new();
    /// let model = BeamModel::new(10.0, 32e9, 0.3 * 0.6_f64.powi(3) / 12.0, &loads).unwrap();
    /// assert_eq!(model.length(), 10.0);
    ///
    /// assert!(BeamModel::new(0.0, 32e9, 1.0, &loads).is_err());
    /// ```
    pub fn new(length: f64, modulus: f64, moment_of_inertia: f64, loads: &'a LoadAssembly) -> BeamResult<Self> {
        require_positive("length", length)?;
        require_positive("modulus", modulus)?;
        require_positive("moment_of_inertia", moment_of_inertia)?;

        Ok(BeamModel {
            length,
            modulus,
            moment_of_inertia,
            loads,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    /// Flexural rigidity EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.modulus * self.moment_of_inertia
    }

    pub fn loads(&self) -> &'a LoadAssembly {
        self.loads
    }
}

fn require_positive(field: &str, value: f64) -> BeamResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BeamError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite positive number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flexural_rigidity() {
        let loads = LoadAssembly::new();
        let model = BeamModel::new(10.0, 32e9, 0.0054, &loads).unwrap();
        assert!((model.flexural_rigidity() - 1.728e8).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_properties_rejected() {
        let loads = LoadAssembly::new();
        let cases = [
            (-1.0, 1.0, 1.0, "length"),
            (1.0, 0.0, 1.0, "modulus"),
            (1.0, 1.0, f64::NAN, "moment_of_inertia"),
            (f64::INFINITY, 1.0, 1.0, "length"),
        ];
        for (length, modulus, inertia, expected_field) in cases {
            match BeamModel::new(length, modulus, inertia, &loads) {
                Err(BeamError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected InvalidInput for {}, got {:?}", expected_field, other),
            }
        }
    }
}
