//! Confirmer Port
//!
//! The human checkpoint before the destructive stage. Implementations can be
//! interactive (`StdinConfirmer`) or scripted.

use std::path::Path;

/// What the user is being asked to approve
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationRequest<'a> {
    /// Original directory, exactly as given on the command line
    pub directory: &'a Path,
    /// Intermediate archive
    pub archive: &'a Path,
    /// Compressed artifact that will be kept
    pub compressed: &'a Path,
}

/// Trait for obtaining the go-ahead for removal.
///
/// Returns `true` only for an explicit affirmative answer.
pub trait Confirmer {
    fn confirm(&self, request: &ConfirmationRequest<'_>) -> bool;
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, request: &ConfirmationRequest<'_>) -> bool {
        (**self).confirm(request)
    }
}

/// Confirmer that always declines.
///
/// Use this when no human can be asked.
pub struct DeclineConfirmer;

impl Confirmer for DeclineConfirmer {
    fn confirm(&self, _request: &ConfirmationRequest<'_>) -> bool {
        false
    }
}

/// Whether `answer` is an explicit affirmative (`y` / `yes`, any case)
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
