//! Scripted `WorkoutApi` for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::WorkoutApi;
use crate::error::ApiError;
use crate::models::{NewWorkout, Workout};

/// Replays queued results in order and records every create request.
///
/// An exhausted queue answers with a network error.
#[derive(Default)]
pub struct MockWorkoutApi {
    list_results: RefCell<VecDeque<Result<Vec<Workout>, ApiError>>>,
    create_results: RefCell<VecDeque<Result<Workout, ApiError>>>,
    created: RefCell<Vec<NewWorkout>>,
    list_calls: RefCell<usize>,
}

impl MockWorkoutApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, result: Result<Vec<Workout>, ApiError>) -> Self {
        self.list_results.borrow_mut().push_back(result);
        self
    }

    pub fn with_create(self, result: Result<Workout, ApiError>) -> Self {
        self.create_results.borrow_mut().push_back(result);
        self
    }

    /// Create request bodies seen so far
    pub fn created(&self) -> Vec<NewWorkout> {
        self.created.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.borrow()
    }
}

#[async_trait(?Send)]
impl WorkoutApi for MockWorkoutApi {
    async fn list_workouts(&self) -> Result<Vec<Workout>, ApiError> {
        *self.list_calls.borrow_mut() += 1;
        self.list_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }

    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, ApiError> {
        self.created.borrow_mut().push(workout.clone());
        self.create_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}
