use crate::{
    carousel::Card,
    core::PrismError,
};

#[derive(Debug)]
pub enum TaskResult {
    ThemeCards { ticket: u64, result: Result<Vec<Card>, PrismError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::ThemeCards { .. } => "theme_cards",
        }
    }
}
