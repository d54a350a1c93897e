use std::time::Duration;

use snafu::prelude::*;

/// The length of one timer phase, a positive number of whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhaseDuration(Duration);

impl PhaseDuration {
    /// Work phase default, 25 minutes.
    pub const DEFAULT_WORK: Self = Self(Duration::from_secs(25 * 60));
    /// Short break default, 5 minutes.
    pub const DEFAULT_SHORT_BREAK: Self = Self(Duration::from_secs(5 * 60));
    /// Long break default, 20 minutes.
    pub const DEFAULT_LONG_BREAK: Self = Self(Duration::from_secs(20 * 60));

    /// Try to create a [`PhaseDuration`] from a number of seconds.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number is zero.
    pub fn try_new(seconds: u64) -> Result<Self, TryNewPhaseDurationError> {
        ensure!(seconds > 0, ZeroSnafu);
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Try to create a [`PhaseDuration`] from a number of minutes, the unit
    /// used on the configuration surface.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number is zero.
    pub fn from_minutes(minutes: u64) -> Result<Self, TryNewPhaseDurationError> {
        Self::try_new(minutes.saturating_mul(60))
    }

    /// Returns the inner [`Duration`].
    pub fn inner(&self) -> Duration {
        self.0
    }
}

impl TryFrom<u64> for PhaseDuration {
    type Error = TryNewPhaseDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`PhaseDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewPhaseDurationError {
    #[snafu(display("Duration must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_duration_try_new() {
        assert_eq!(
            PhaseDuration::try_new(90),
            Ok(PhaseDuration(Duration::from_secs(90))),
        );
        assert_eq!(
            PhaseDuration::try_new(0),
            Err(TryNewPhaseDurationError::Zero),
        );
    }

    #[test]
    fn phase_duration_from_minutes() {
        assert_eq!(
            PhaseDuration::from_minutes(25),
            Ok(PhaseDuration(Duration::from_secs(25 * 60))),
        );
        assert_eq!(
            PhaseDuration::from_minutes(0),
            Err(TryNewPhaseDurationError::Zero),
        );
    }

    #[test]
    fn phase_duration_defaults() {
        assert_eq!(PhaseDuration::DEFAULT_WORK.inner().as_secs(), 25 * 60);
        assert_eq!(PhaseDuration::DEFAULT_SHORT_BREAK.inner().as_secs(), 5 * 60);
        assert_eq!(PhaseDuration::DEFAULT_LONG_BREAK.inner().as_secs(), 20 * 60);
    }
}
