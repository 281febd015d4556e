//! Workout Actions
//!
//! The two network round trips of the workout list: the mount-time fetch and
//! the create triggered by the add button. Each awaits the API and then
//! applies the outcome to the store.

use leptos::prelude::*;

use crate::api::WorkoutApi;
use crate::models::NewWorkout;
use crate::store::WorkoutStore;

/// Fetch the collection and replace the list
pub async fn load_workouts<A: WorkoutApi + ?Sized>(api: &A, store: WorkoutStore) {
    let result = api.list_workouts().await;
    if store.try_update(|state| state.apply_loaded(result)).is_none() {
        log::debug!("[WORKOUTS] List unmounted before load finished");
    }
}

/// Snapshot the create request at click time
pub fn prepare_submission(store: WorkoutStore) -> NewWorkout {
    store.read_untracked().prepare_submission()
}

/// Send a prepared create request and append the server's record
pub async fn submit_workout<A: WorkoutApi + ?Sized>(
    api: &A,
    store: WorkoutStore,
    request: NewWorkout,
) {
    let result = api.create_workout(&request).await;
    if store.try_update(|state| state.apply_created(result)).is_none() {
        log::debug!("[WORKOUTS] List unmounted before create finished");
    }
}
