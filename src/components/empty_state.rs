use leptos::prelude::*;

use crate::context::use_board_context;

/// Placeholder shown instead of the list when there are no items
#[component]
pub fn EmptyState() -> impl IntoView {
    let config = use_board_context().config;

    view! {
        <div class="empty-state">
            <p>{config.empty_title}</p>
            <p>{config.empty_hint}</p>
        </div>
    }
}
