//! UI Components
//!
//! Leptos components that make up the board.

mod todo_input;
mod todo_row;
mod stats_bar;
mod empty_state;
mod clear_completed_button;

pub use todo_input::TodoInput;
pub use todo_row::TodoRow;
pub use stats_bar::StatsBar;
pub use empty_state::EmptyState;
pub use clear_completed_button::ClearCompletedButton;
