use std::fmt::{Display, Formatter, Result as FmtResult};

/// The signal returned by a tick that ends a phase.
///
/// The session itself performs no side effects; the presentation layer maps
/// each variant to a notification and a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// A work phase ended and a short break begins.
    WorkCompletedShortBreak,
    /// A work phase ended and a long break begins.
    WorkCompletedLongBreak,
    /// A break ended and a work phase begins.
    BreakCompleted,
}

impl Display for TransitionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::WorkCompletedShortBreak => f.write_str("work completed, short break"),
            Self::WorkCompletedLongBreak => f.write_str("work completed, long break"),
            Self::BreakCompleted => f.write_str("break completed"),
        }
    }
}
