//! # beam_core - Simply-Supported Beam Solver
//!
//! `beam_core` computes internal shear, bending moment, slope and deflection
//! anywhere along a simply-supported straight beam, using Macaulay's
//! singularity-function method. Loads may be point forces, point moments,
//! and piecewise-linear distributed forces or moments.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The solver caches nothing; every query is recomputed
//! - **Borrowed Loads**: A model borrows its load assembly, so loads cannot
//!   change underneath a live solver
//! - **Rich Errors**: Structured, serializable error types
//! - **JSON Documents**: Beams round-trip through serde for storage
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{BeamModel, BeamSolver, LoadAssembly, LoadInstance};
//!
//! let mut loads = LoadAssembly::new();
//! loads
//!     .add_distributed_force([LoadInstance::new(-10.0, 0.0), LoadInstance::new(-10.0, 10.0)])
//!     .unwrap();
//!
//! let model = BeamModel::new(10.0, 32e9, 0.3 * 0.6_f64.powi(3) / 12.0, &loads).unwrap();
//! let solver = BeamSolver::new(model);
//!
//! assert!((solver.shear(0.0).unwrap() + 50.0).abs() < 1e-10);
//! assert!((solver.moment(5.0).unwrap() + 125.0).abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Load instances, distributed segments, and the load assembly
//! - [`model`] - Beam geometry and stiffness
//! - [`singularity`] - Macaulay bracket evaluation
//! - [`solver`] - Boundary resolution and response queries
//! - [`analysis`] - Diagram sampling and governing values
//! - [`document`] - Serializable beam documents
//! - [`file_io`] - Atomic document saves and versioned loads
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod document;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod model;
pub mod singularity;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisResults, Extreme, Station};
pub use document::{BeamDefinition, BeamDocument};
pub use errors::{BeamError, BeamResult};
pub use file_io::{load_document, save_document};
pub use loads::{LoadAssembly, LoadInstance, LoadSegment};
pub use model::BeamModel;
pub use solver::{BeamSolver, Reactions, ResponseKind, SpanPolicy};
