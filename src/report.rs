//! Where a board sends invariant violations.

/// A sink for invariant violations found by [`Board::well_formed`](crate::Board::well_formed).
///
/// A board reports at most one violation per check: the first one found.
pub trait Report {
    /// Records a violation.
    fn report(&self, message: &str);
}

/// Reports violations through the `log` facade at `error` level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Log;

impl Report for Log {
    fn report(&self, message: &str) {
        log::error!(target: "hexboard::invariant", "Invariant error: {}", message);
    }
}

/// Discards violations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl Report for Silent {
    fn report(&self, _message: &str) {}
}

impl<'a, R> Report for &'a R where R: Report + ?Sized {
    fn report(&self, message: &str) { (**self).report(message) }
}
