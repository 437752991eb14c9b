//! # Beam Documents
//!
//! The owned, serializable form of a beam. A [`BeamDocument`] is what gets
//! written to disk; its [`BeamDefinition`] hands out a validated
//! [`BeamModel`] borrowing the stored loads.
//!
//! ## Structure
//!
//! ```text
//! BeamDocument
//! ├── meta: DocumentMetadata (schema version, id, label, timestamps)
//! └── beam: BeamDefinition (length, modulus, moment_of_inertia, loads)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::document::{BeamDefinition, BeamDocument};
//! use beam_core::loads::{LoadAssembly, LoadInstance};
//! use beam_core::solver::BeamSolver;
//!
//! let mut loads = LoadAssembly::new();
//! loads.add_point_force(LoadInstance::new(-10.0, 5.0));
//! let doc = BeamDocument::new("B-1", BeamDefinition::new(10.0, 32e9, 0.0054, loads));
//!
//! let json = serde_json::to_string_pretty(&doc).unwrap();
//! let restored: BeamDocument = serde_json::from_str(&json).unwrap();
//!
//! let solver = BeamSolver::new(restored.beam.model().unwrap());
//! assert!((solver.shear(0.0).unwrap() + 5.0).abs() < 1e-10);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::BeamResult;
use crate::loads::{LoadAssembly, LoadInstance};
use crate::model::BeamModel;

/// Current schema version for beam documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Beam properties and loads, owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDefinition {
    pub length: f64,
    pub modulus: f64,
    pub moment_of_inertia: f64,
    #[serde(default)]
    pub loads: LoadAssembly,
}

impl BeamDefinition {
    pub fn new(length: f64, modulus: f64, moment_of_inertia: f64, loads: LoadAssembly) -> Self {
        BeamDefinition {
            length,
            modulus,
            moment_of_inertia,
            loads,
        }
    }

    /// Validate the properties and borrow the loads into a [`BeamModel`].
    pub fn model(&self) -> BeamResult<BeamModel<'_>> {
        BeamModel::new(self.length, self.modulus, self.moment_of_inertia, &self.loads)
    }
}

/// Root document container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDocument {
    pub meta: DocumentMetadata,
    pub beam: BeamDefinition,
}

impl BeamDocument {
    /// Create a new document with a fresh id and timestamps.
    pub fn new(label: impl Into<String>, beam: BeamDefinition) -> Self {
        let now = Utc::now();
        BeamDocument {
            meta: DocumentMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                label: label.into(),
                created: now,
                modified: now,
            },
            beam,
        }
    }

    /// Stair flight between two landings: 9.525 on the landings, 19.62768
    /// on the flight, 5.5 m span, 0.3 m x 0.6 m concrete section.
    pub fn stair_landing_sample(label: impl Into<String>) -> BeamResult<Self> {
        let mut loads = LoadAssembly::new();
        loads.add_distributed_force([
            LoadInstance::new(9.525, 0.0),
            LoadInstance::new(9.525, 1.5),
            LoadInstance::new(19.62768, 1.5),
            LoadInstance::new(19.62768, 4.0),
            LoadInstance::new(9.525, 4.0),
            LoadInstance::new(9.525, 5.5),
        ])?;
        let inertia = 0.3 * 0.6_f64.powi(3) / 12.0;
        Ok(BeamDocument::new(label, BeamDefinition::new(5.5, 32e9, inertia, loads)))
    }
}

/// Document metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub id: Uuid,
    /// User-facing name, e.g. "B-1"
    pub label: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}
