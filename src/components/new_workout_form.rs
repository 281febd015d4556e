//! New Workout Form Component
//!
//! Text input plus an add button. Nothing is validated; an empty description
//! is sent as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::HttpWorkoutApi;
use crate::store::{WorkoutListStateStoreFields, WorkoutStore};

#[component]
pub fn NewWorkoutForm(store: WorkoutStore, api: HttpWorkoutApi) -> impl IntoView {
    let add_workout = move |_| {
        // Number is fixed now, not when the response arrives
        let request = actions::prepare_submission(store);
        let api = api.clone();
        spawn_local(async move {
            actions::submit_workout(&api, store, request).await;
        });
    };

    view! {
        <div class="new-workout-form">
            <input
                type="text"
                placeholder="Add a new workout"
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button on:click=add_workout>"Add Workout"</button>
        </div>
    }
}
