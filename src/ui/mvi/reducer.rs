use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// Side effects (network calls, clipboard, file writes) stay in the caller;
/// `reduce` must be a pure function of its inputs.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
