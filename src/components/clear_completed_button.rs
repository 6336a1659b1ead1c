//! Clear Completed Button Component
//!
//! Bulk action that removes every completed item.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::store::store_clear_completed;
use crate::view_plan::ViewPlan;

/// Shown only for a non-empty board; disabled until something is completed.
#[component]
pub fn ClearCompletedButton(plan: Memo<ViewPlan>) -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    view! {
        <Show when=move || plan.get().clear_action().is_some()>
            <div class="actions">
                <button
                    class="clear-completed"
                    disabled=move || plan.get().clear_action() != Some(true)
                    on:click=move |_| store_clear_completed(&store)
                >
                    {ctx.config.clear_completed_label}
                </button>
            </div>
        </Show>
    }
}
