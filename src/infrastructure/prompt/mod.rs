//! Confirmation Prompts
//!
//! Implementations of the Confirmer port.

mod interactive;

pub use interactive::StdinConfirmer;
