use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` must stay pure: scheduling timers, painting and notifying the host
/// are done by the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
