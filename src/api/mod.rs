//! Workout API
//!
//! Access to the remote workout collection, organized behind a trait so the
//! UI operations can run against a scripted fake in tests.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewWorkout, Workout};

pub use http::HttpWorkoutApi;

/// The remote collection endpoint
#[async_trait(?Send)]
pub trait WorkoutApi {
    /// GET the whole collection, in server order
    async fn list_workouts(&self) -> Result<Vec<Workout>, ApiError>;

    /// POST one record; the response carries the server-assigned id
    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, ApiError>;
}
