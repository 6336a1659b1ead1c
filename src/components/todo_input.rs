//! Todo Input Component
//!
//! Text field and add button for new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_board_context;
use crate::board::TodoBoardStoreFields;
use crate::store::{store_add_draft, store_set_draft, store_submit_on_key};

/// Input row: Enter or the add button submits the draft
#[component]
pub fn TodoInput() -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;

    view! {
        <div class="input-section">
            <input
                type="text"
                class="todo-input"
                placeholder=ctx.config.input_placeholder
                prop:value=move || store.draft_text().get()
                on:input=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        store_set_draft(&store, input.value());
                    }
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Enter that finishes an IME composition is not a submit
                    if ev.is_composing() {
                        return;
                    }
                    store_submit_on_key(&store, &ev.key());
                }
            />
            <button class="add-button" on:click=move |_| store_add_draft(&store)>
                {ctx.config.add_label}
            </button>
        </div>
    }
}
