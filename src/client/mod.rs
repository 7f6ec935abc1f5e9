//! Form-side controller for the analysis UI.
//!
//! The browser bundle keeps its state in the DOM; this module is the
//! normative implementation of the same contract with the state held in an
//! explicit [`UiState`] updated through a single reducer. Display (the CLI
//! printout, the submit-enabled flag) is a pure projection of that state.

mod controller;
mod render;
mod state;

pub use controller::{validate, Controller};
pub use render::Report;
pub use state::{Action, ClientError, ErrorKind, UiState, UiStatus};
