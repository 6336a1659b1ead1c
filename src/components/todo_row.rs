//! Todo Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::models::ItemId;
use crate::store::{store_remove_item, store_toggle_item};

/// A single item row: checkbox, text, delete button
#[component]
pub fn TodoRow(
    id: ItemId,
    text: String,
) -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    // Read from the board so the row follows toggles without being rebuilt
    let completed = move || store.with(|board| board.get(id).is_some_and(|item| item.completed));

    view! {
        <div class=move || if completed() { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=move |_| store_toggle_item(&store, id)
            />

            <span class="todo-text">{text}</span>

            <button
                class="delete-button"
                aria-label=ctx.config.delete_aria_label
                on:click=move |_| store_remove_item(&store, id)
            >
                {ctx.config.delete_label}
            </button>
        </div>
    }
}
