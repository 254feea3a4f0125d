//! Checkout module.
//!
//! Contains the confirmation step, order summaries, and order notifiers.

mod confirmation;
mod notifier;

pub use confirmation::CheckoutConfirmation;
pub use notifier::{NoopNotifier, OrderNotifier, OrderSummary, RecordingNotifier};
