use crate::ui::mvi::UiState;

/// Life-cycle marker of the most recent fetch transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl CounterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterStatus::Idle => "idle",
            CounterStatus::Loading => "loading",
            CounterStatus::Succeeded => "succeeded",
            CounterStatus::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CounterStatus::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
    pub status: CounterStatus,
}

impl UiState for CounterState {}
