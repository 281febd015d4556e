//! HTTP API Client
//!
//! `WorkoutApi` over the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::WorkoutApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{NewWorkout, Workout};

#[derive(Debug, Clone)]
pub struct HttpWorkoutApi {
    config: ApiConfig,
}

impl HttpWorkoutApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl WorkoutApi for HttpWorkoutApi {
    async fn list_workouts(&self) -> Result<Vec<Workout>, ApiError> {
        let url = self.config.collection_url();
        log::debug!("[API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn create_workout(&self, workout: &NewWorkout) -> Result<Workout, ApiError> {
        let url = self.config.collection_url();
        log::debug!("[API] POST {} number={}", url, workout.number);

        let response = Request::post(&url)
            .json(workout)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode_body(status, &body)
}

/// Map a finished response to a value or the matching `ApiError`
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
