//! Sheet session state and edit operations (UI-agnostic).

mod ops;
mod state;

pub use state::Sheet;
