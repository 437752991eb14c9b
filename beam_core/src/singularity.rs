//! Macaulay Singularity Functions
//!
//! `<x - c>^n` written as a plain function, plus the factorial divisors that
//! repeated integration of the brackets introduces.
//!
//! | n        | `<x - c>^n`                          |
//! |----------|--------------------------------------|
//! | -1, 0    | 0 for x < c, 1 otherwise (step)      |
//! | >= 1     | 0 for x <= c, (x - c)^n otherwise    |
//! | < -1     | unsupported                          |

use crate::errors::{BeamError, BeamResult};

/// Evaluate the Macaulay bracket `<x - c>^n`.
///
/// # Example
///
/// ```rust
/// use beam_core::singularity::singularity;
///
/// assert_eq!(singularity(2.0, 0, 1.0).unwrap(), 0.0);
/// assert_eq!(singularity(2.0, 0, 2.0).unwrap(), 1.0);
/// assert_eq!(singularity(2.0, 2, 5.0).unwrap(), 9.0);
/// ```
pub fn singularity(c: f64, n: i32, x: f64) -> BeamResult<f64> {
    match n {
        -1 | 0 => Ok(if x < c { 0.0 } else { 1.0 }),
        n if n < -1 => Err(BeamError::unsupported_exponent(n)),
        n => Ok(if x <= c { 0.0 } else { (x - c).powi(n) }),
    }
}

/// Divisor for a term of order `exponent` after repeated integration.
///
/// Defined for orders -2 through 5, which covers shear through deflection
/// plus the two extra orders consumed by distributed loads.
pub fn denominator(exponent: i32) -> BeamResult<f64> {
    match exponent {
        -2..=1 => Ok(1.0),
        2 => Ok(2.0),
        3 => Ok(6.0),
        4 => Ok(24.0),
        5 => Ok(120.0),
        _ => Err(BeamError::unsupported_exponent(exponent)),
    }
}
