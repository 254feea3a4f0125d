//! Selection module.
//!
//! Routes add requests either into the cart or through the flavor picker.

mod flow;

pub use flow::{AddOutcome, SelectionFlow, SelectionState};
