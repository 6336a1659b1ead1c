//! Stats Bar Component
//!
//! Total / completed / remaining readout, hidden while the board is empty.

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::context::use_board_context;
use crate::view_plan::ViewPlan;

#[component]
pub fn StatsBar(plan: Memo<ViewPlan>) -> impl IntoView {
    let config = use_board_context().config;
    let stats = move || plan.get().stats().unwrap_or_default();

    view! {
        <Show when=move || plan.get().stats().is_some()>
            <div class="stats">
                <span>{move || BoardConfig::stat_text(config.total_label, stats().total)}</span>
                <span>{move || BoardConfig::stat_text(config.completed_label, stats().completed)}</span>
                <span>{move || BoardConfig::stat_text(config.remaining_label, stats().remaining)}</span>
            </div>
        </Show>
    }
}
