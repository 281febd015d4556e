//! Frontend Models
//!
//! Data structures matching the remote workout collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier.
///
/// Opaque to the UI; only used as the render key. Accepts either an integer
/// or a string from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutId {
    Int(i64),
    Text(String),
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutId::Int(id) => write!(f, "{}", id),
            WorkoutId::Text(id) => f.write_str(id),
        }
    }
}

/// Workout record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub number: i64,
    pub description: String,
}

impl Workout {
    /// Display label: "{number}. {description}"
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.description)
    }
}

/// Create request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub number: i64,
    pub description: String,
}
