//! UI Components
//!
//! Leptos components for the workout page.

mod workout_list;
mod new_workout_form;

pub use workout_list::WorkoutList;
pub use new_workout_form::NewWorkoutForm;
