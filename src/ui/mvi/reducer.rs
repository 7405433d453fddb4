//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer turns the current state and an intent into the next state.
///
/// All state transitions of a view go through its reducer. It must be a
/// pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply an intent and return the new state.
    ///
    /// No side effects: applying the result to the store is the caller's job.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
