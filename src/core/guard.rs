//! Guard predicates for controlling transitions.
//!
//! Guards are boolean functions evaluated before any side effect of a
//! transition. A transition whose guard returns `false` is skipped and the
//! next candidate for the same trigger is considered.

use super::event::Event;
use std::fmt;

/// Predicate that decides whether a transition may fire.
///
/// The predicate receives the triggering event. It is expected to be free of
/// side effects, but nothing enforces that: guards commonly read shared
/// counters through `Cell`/`RefCell`.
///
/// # Example
///
/// ```rust
/// use featherstate::Guard;
///
/// let only_digits = Guard::new(|c: &char| c.is_ascii_digit());
///
/// assert!(only_digits.check(&'7'));
/// assert!(!only_digits.check(&'x'));
/// ```
pub struct Guard<E: Event> {
    predicate: Box<dyn Fn(&E) -> bool>,
}

impl<E: Event> Guard<E> {
    /// Create a guard from a predicate over the triggering event.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard for `event`.
    pub fn check(&self, event: &E) -> bool {
        (self.predicate)(event)
    }
}

impl<E: Event> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard")
    }
}
