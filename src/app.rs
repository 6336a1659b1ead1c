//! Todo Board App
//!
//! Root component: header, input, stats, item list and bulk action.

use leptos::prelude::*;

use crate::board::TodoBoardStoreFields;
use crate::components::{ClearCompletedButton, EmptyState, StatsBar, TodoInput, TodoRow};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::models::Item;
use crate::view_plan::ViewPlan;

#[component]
pub fn App() -> impl IntoView {
    // Provide board and text to all children
    let ctx = BoardContext::provide(BoardConfig::default());
    let store = ctx.store;

    // Recomputed from the items on every change, never stored on the board
    let plan = Memo::new(move |_| ViewPlan::from_stats(store.with(|board| board.stats())));

    view! {
        <div class="app">
            <div class="container">
                <header class="header">
                    <h1>{ctx.config.title}</h1>
                    <p class="subtitle">{ctx.config.subtitle}</p>
                </header>

                <TodoInput />

                <StatsBar plan=plan />

                <div class="todo-list">
                    <Show
                        when=move || !plan.get().is_empty()
                        fallback=|| view! { <EmptyState /> }
                    >
                        <For
                            each=move || store.items().get()
                            key=|item: &Item| item.id
                            children=move |item: Item| view! { <TodoRow id=item.id text=item.text /> }
                        />
                    </Show>
                </div>

                <ClearCompletedButton plan=plan />
            </div>
        </div>
    }
}
