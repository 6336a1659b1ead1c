//! Board Configuration
//!
//! User-visible text. One locale, fixed at build time.

/// All strings rendered by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_placeholder: &'static str,
    pub add_label: &'static str,
    pub total_label: &'static str,
    pub completed_label: &'static str,
    pub remaining_label: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub delete_label: &'static str,
    pub delete_aria_label: &'static str,
    pub clear_completed_label: &'static str,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "📝 Todo List",
            subtitle: "タスクを整理して効率的に進めましょう",
            input_placeholder: "新しいタスクを入力...",
            add_label: "追加",
            total_label: "合計",
            completed_label: "完了",
            remaining_label: "残り",
            empty_title: "📋 タスクがありません",
            empty_hint: "上のフィールドから新しいタスクを追加してください",
            delete_label: "🗑️",
            delete_aria_label: "削除",
            clear_completed_label: "完了したタスクを削除",
        }
    }
}

impl BoardConfig {
    /// "label: value" as shown in the stats line
    pub fn stat_text(label: &str, value: usize) -> String {
        format!("{}: {}", label, value)
    }
}
