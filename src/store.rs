//! Workout List State Store
//!
//! State owned by one `WorkoutApp` instance. Uses Leptos reactive_stores so
//! the row list and the input field re-render independently.

use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::{NewWorkout, Workout, WorkoutId};

/// In-memory list plus the text of the input field
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WorkoutListState {
    /// Records in the order received; never sorted or deduplicated
    pub workouts: Vec<Workout>,
    /// Current input field text
    pub draft: String,
}

/// One rendered line of the list
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRow {
    pub key: WorkoutId,
    pub label: String,
}

/// Type alias for the store
pub type WorkoutStore = Store<WorkoutListState>;

impl WorkoutListState {
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Create request for the current draft.
    ///
    /// The number is the list length plus one at the time of the call. The
    /// description is the draft as typed, empty included.
    pub fn prepare_submission(&self) -> NewWorkout {
        NewWorkout {
            number: self.workouts.len() as i64 + 1,
            description: self.draft.clone(),
        }
    }

    /// Settle the mount-time fetch
    pub fn apply_loaded(&mut self, result: Result<Vec<Workout>, ApiError>) {
        match result {
            Ok(workouts) => {
                log::info!("[WORKOUTS] Loaded {} workouts", workouts.len());
                self.workouts = workouts;
            }
            Err(e) => log::error!("[WORKOUTS] Error fetching data: {}", e),
        }
    }

    /// Settle a create request. The draft is only cleared on success.
    pub fn apply_created(&mut self, result: Result<Workout, ApiError>) {
        match result {
            Ok(workout) => {
                log::info!("[WORKOUTS] Added workout {} (#{})", workout.id, workout.number);
                self.workouts.push(workout);
                self.draft.clear();
            }
            Err(e) => log::error!("[WORKOUTS] Error adding workout: {}", e),
        }
    }

    /// Display rows in list order, keyed by server id
    pub fn rows(&self) -> impl Iterator<Item = WorkoutRow> + '_ {
        workout_rows(&self.workouts)
    }
}

/// Row projection over a bare list, so views can subscribe to `workouts`
/// alone
pub fn workout_rows(workouts: &[Workout]) -> impl Iterator<Item = WorkoutRow> + '_ {
    workouts.iter().map(|workout| WorkoutRow {
        key: workout.id.clone(),
        label: workout.label(),
    })
}
