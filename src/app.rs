//! Workout App
//!
//! Root component: the workout list with its add form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::api::HttpWorkoutApi;
use crate::components::{NewWorkoutForm, WorkoutList};
use crate::config::ApiConfig;
use crate::store::WorkoutListState;

#[component]
pub fn App() -> impl IntoView {
    view! { <WorkoutApp api=HttpWorkoutApi::new(ApiConfig::resolve()) /> }
}

/// Owns the list state for as long as it is mounted
#[component]
pub fn WorkoutApp(api: HttpWorkoutApi) -> impl IntoView {
    let store = Store::new(WorkoutListState::default());

    // Load workouts on mount
    let mount_api = api.clone();
    Effect::new(move |_| {
        let api = mount_api.clone();
        log::debug!("[APP] Loading workouts from {}", api.config().base_url());
        spawn_local(async move {
            actions::load_workouts(&api, store).await;
        });
    });

    view! {
        <div>
            <h1>"Workouts"</h1>
            <WorkoutList store=store />
            <NewWorkoutForm store=store api=api />
        </div>
    }
}
