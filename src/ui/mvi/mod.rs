//! Model-View-Intent primitives for UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Side effects such as switching the application
//! locale happen in controllers that read the resulting state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
