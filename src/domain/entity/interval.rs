use snafu::prelude::*;

/// The long break cadence: every Nth completed work phase is followed by a
/// long break instead of a short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongBreakInterval(u32);

impl LongBreakInterval {
    /// Cadence default, a long break every 4th work phase.
    pub const DEFAULT: Self = Self(4);

    /// Try to create a [`LongBreakInterval`] from an integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(value: u32) -> Result<Self, TryNewLongBreakIntervalError> {
        ensure!(value > 0, ZeroSnafu);
        Ok(Self(value))
    }

    /// Whether the break after the given number of completed work phases is
    /// a long one.
    pub fn is_long_break(&self, completed_work_phases: u32) -> bool {
        completed_work_phases % self.0 == 0
    }

    /// Returns the inner integer.
    pub fn inner(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LongBreakInterval {
    type Error = TryNewLongBreakIntervalError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`LongBreakInterval`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewLongBreakIntervalError {
    #[snafu(display("Long break interval must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}
