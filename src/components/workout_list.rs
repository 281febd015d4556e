//! Workout List Component
//!
//! One row per record, "{number}. {description}", keyed by server id.

use leptos::prelude::*;

use crate::store::{workout_rows, WorkoutListStateStoreFields, WorkoutRow, WorkoutStore};

#[component]
pub fn WorkoutList(store: WorkoutStore) -> impl IntoView {
    view! {
        <div class="workout-list">
            <For
                each=move || visible_rows(store)
                key=|row| row.key.clone()
                children=move |row| {
                    view! { <div class="workout-row">{row.label}</div> }
                }
            />
        </div>
    }
}

/// Rows for the current list. Tracks `workouts` only, so typing in the
/// draft does not rebuild them.
fn visible_rows(store: WorkoutStore) -> Vec<WorkoutRow> {
    store.workouts().with(|workouts| workout_rows(workouts).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Workout, WorkoutId};
    use crate::store::WorkoutListState;
    use leptos::tachys::view::RenderHtml;
    use reactive_stores::Store;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn workout(id: i64, number: i64, description: &str) -> Workout {
        Workout {
            id: WorkoutId::Int(id),
            number,
            description: description.to_string(),
        }
    }

    fn render(workouts: Vec<Workout>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(WorkoutListState {
                workouts,
                draft: String::new(),
            });
            view! { <WorkoutList store=store /> }.to_html()
        })
    }

    #[test]
    fn test_renders_one_row_per_workout_in_order() {
        let html = render(vec![
            workout(4, 2, "Deadlift"),
            workout(1, 1, "Squat"),
            workout(9, 3, "Run 5k"),
        ]);

        assert_eq!(html.matches("class=\"workout-row\"").count(), 3);
        let deadlift = html.find("2. Deadlift").expect("deadlift row");
        let squat = html.find("1. Squat").expect("squat row");
        let run = html.find("3. Run 5k").expect("run row");
        assert!(deadlift < squat && squat < run);
    }

    #[test]
    fn test_renders_no_rows_for_empty_list() {
        let html = render(vec![]);
        assert!(html.contains("workout-list"));
        assert_eq!(html.matches("class=\"workout-row\"").count(), 0);
    }

    #[test]
    fn test_rows_ignore_draft_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(WorkoutListState {
                workouts: vec![workout(1, 1, "Squat")],
                draft: String::new(),
            });
            let runs = Arc::new(AtomicUsize::new(0));
            let rows = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    visible_rows(store)
                }
            });

            assert_eq!(rows.get_untracked().len(), 1);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            store.draft().set("Run 5k".to_string());
            assert_eq!(rows.get_untracked().len(), 1);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            store.workouts().write().push(workout(2, 2, "Run 5k"));
            assert_eq!(rows.get_untracked().len(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
