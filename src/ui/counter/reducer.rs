//! Reducer for the counter slice.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterState, CounterStatus};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                value: state.value.saturating_add(1),
                ..state
            },
            CounterIntent::Decrement => CounterState {
                value: state.value.saturating_sub(1),
                ..state
            },
            // Re-enterable from any status; overlapping fetches are not tracked.
            CounterIntent::FetchStarted => CounterState {
                status: CounterStatus::Loading,
                ..state
            },
            CounterIntent::FetchResolved { delta } => CounterState {
                value: state.value.saturating_add(delta),
                status: CounterStatus::Succeeded,
            },
            CounterIntent::FetchRejected => CounterState {
                status: CounterStatus::Failed,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(value: i64, status: CounterStatus) -> CounterState {
        CounterState { value, status }
    }

    #[test]
    fn initial_state_is_zero_idle() {
        assert_eq!(CounterState::default(), state(0, CounterStatus::Idle));
    }

    #[test]
    fn increment_keeps_status() {
        let next = CounterReducer::reduce(state(4, CounterStatus::Failed), CounterIntent::Increment);
        assert_eq!(next, state(5, CounterStatus::Failed));
    }

    #[test]
    fn decrement_goes_below_zero() {
        let next = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
        assert_eq!(next, state(-1, CounterStatus::Idle));
    }

    #[test]
    fn fetch_started_only_touches_status() {
        let next = CounterReducer::reduce(state(9, CounterStatus::Succeeded), CounterIntent::FetchStarted);
        assert_eq!(next, state(9, CounterStatus::Loading));
    }

    #[test]
    fn resolved_adds_delta() {
        let next = CounterReducer::reduce(
            state(2, CounterStatus::Loading),
            CounterIntent::FetchResolved { delta: -7 },
        );
        assert_eq!(next, state(-5, CounterStatus::Succeeded));
    }

    #[test]
    fn rejected_keeps_value() {
        let next = CounterReducer::reduce(state(2, CounterStatus::Loading), CounterIntent::FetchRejected);
        assert_eq!(next, state(2, CounterStatus::Failed));
    }

    #[test]
    fn arithmetic_saturates() {
        let next = CounterReducer::reduce(state(i64::MAX, CounterStatus::Idle), CounterIntent::Increment);
        assert_eq!(next.value, i64::MAX);
        let next = CounterReducer::reduce(state(i64::MIN, CounterStatus::Idle), CounterIntent::Decrement);
        assert_eq!(next.value, i64::MIN);
    }
}
