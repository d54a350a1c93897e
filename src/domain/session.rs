use std::time::Duration;

use crate::domain::entity::{LongBreakInterval, Phase, PhaseDuration, TransitionEvent};

const TICK: Duration = Duration::from_secs(1);

/// Timer settings shared by every phase of a session.
///
/// All fields are validated value objects, so a constructed configuration
/// can never hold a zero duration or a zero cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub work: PhaseDuration,
    pub short_break: PhaseDuration,
    pub long_break: PhaseDuration,
    pub long_break_interval: LongBreakInterval,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work: PhaseDuration::DEFAULT_WORK,
            short_break: PhaseDuration::DEFAULT_SHORT_BREAK,
            long_break: PhaseDuration::DEFAULT_LONG_BREAK,
            long_break_interval: LongBreakInterval::DEFAULT,
        }
    }
}

/// The phase state machine at the heart of the timer.
///
/// A session alternates between [`Phase::Work`] and [`Phase::Break`], driven
/// by an external caller invoking [`tick`] once per second while running. It
/// performs no I/O and never blocks; a tick that ends a phase reports back a
/// [`TransitionEvent`] for the presentation layer to act on.
///
/// [`tick`]: PomodoroSession::tick
#[derive(Debug, Clone)]
pub struct PomodoroSession {
    config: SessionConfig,
    phase: Phase,
    remaining: Duration,
    completed_work_phases: u32,
    running: bool,
}

impl PomodoroSession {
    /// Creates a new [`PomodoroSession`], stopped at the start of a work
    /// phase.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            phase: Phase::initial(),
            remaining: config.work.inner(),
            completed_work_phases: 0,
            running: false,
            config,
        }
    }

    /// Starts counting down. Idempotent; the phase and its remaining time
    /// are untouched.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops counting down. Idempotent; the phase and its remaining time
    /// are preserved so the session resumes exactly where it left off.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Puts the session back at the start of a work phase, stopped. A full
    /// reset also clears the completed-work-phase counter.
    pub fn reset(&mut self, full: bool) {
        self.phase = Phase::initial();
        self.remaining = self.config.work.inner();
        if full {
            self.completed_work_phases = 0;
        }
        self.running = false;
    }

    /// Replaces the timer settings. The long break cadence is kept when
    /// `long_break_interval` is `None`.
    ///
    /// A stopped session is reset to the new work duration immediately; a
    /// running session finishes the current phase on its original clock and
    /// picks up the new settings at the next transition.
    pub fn update_config(
        &mut self,
        work: PhaseDuration,
        short_break: PhaseDuration,
        long_break: PhaseDuration,
        long_break_interval: Option<LongBreakInterval>,
    ) {
        self.config.work = work;
        self.config.short_break = short_break;
        self.config.long_break = long_break;
        if let Some(interval) = long_break_interval {
            self.config.long_break_interval = interval;
        }

        if !self.running {
            self.reset(false);
        }
    }

    /// Advances the session by one second.
    ///
    /// Returns `None` while stopped or while the current phase still has
    /// time left. The call whose decrement reaches zero performs the phase
    /// transition itself and returns the event, so a running session rolls
    /// straight into the next phase with no idle tick in between.
    pub fn tick(&mut self) -> Option<TransitionEvent> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(TICK);
        if !self.remaining.is_zero() {
            return None;
        }

        Some(self.transition())
    }

    fn transition(&mut self) -> TransitionEvent {
        match self.phase {
            Phase::Work => {
                self.completed_work_phases += 1;
                self.phase = Phase::Break;
                let cadence = self.config.long_break_interval;
                if cadence.is_long_break(self.completed_work_phases) {
                    self.remaining = self.config.long_break.inner();
                    TransitionEvent::WorkCompletedLongBreak
                } else {
                    self.remaining = self.config.short_break.inner();
                    TransitionEvent::WorkCompletedShortBreak
                }
            }
            Phase::Break => {
                self.phase = Phase::Work;
                self.remaining = self.config.work.inner();
                TransitionEvent::BreakCompleted
            }
        }
    }

    /// Returns the current [`Phase`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the time left in the current phase.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns how many work phases have been completed.
    pub fn completed_work_phases(&self) -> u32 {
        self.completed_work_phases
    }

    /// Returns `true` if the session is counting down.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns a reference to the active [`SessionConfig`].
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Remaining time as an `MM:SS` clock string.
    pub fn clock(&self) -> String {
        let secs = self.remaining.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Total duration of the current phase, for progress display.
    ///
    /// During a break the long-vs-short choice is recomputed from the
    /// counter and cadence; both are stable until the break ends, so this
    /// matches the duration chosen at the transition that entered it.
    pub fn phase_total(&self) -> Duration {
        match self.phase {
            Phase::Work => self.config.work.inner(),
            Phase::Break => {
                let cadence = self.config.long_break_interval;
                if cadence.is_long_break(self.completed_work_phases) {
                    self.config.long_break.inner()
                } else {
                    self.config.short_break.inner()
                }
            }
        }
    }
}

impl Default for PomodoroSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_and_transitions_on_the_last_second() {
        let mut session = PomodoroSession::new(config(3, 1, 2, 4));
        session.start();

        assert_eq!(session.tick(), None);
        assert_eq!(session.remaining(), Duration::from_secs(2));
        assert_eq!(session.tick(), None);
        assert_eq!(session.remaining(), Duration::from_secs(1));

        assert_eq!(
            session.tick(),
            Some(TransitionEvent::WorkCompletedShortBreak),
        );
        assert_eq!(session.phase(), Phase::Break);
        assert_eq!(session.remaining(), Duration::from_secs(1));
        assert!(session.is_running());
        assert_eq!(session.completed_work_phases(), 1);
    }

    #[test]
    fn long_break_cadence() {
        let mut session = PomodoroSession::new(config(1, 1, 1, 3));
        session.start();

        let mut work_events = Vec::new();
        for _ in 0..6 {
            work_events.push(run_phase(&mut session));
            assert_eq!(run_phase(&mut session), TransitionEvent::BreakCompleted);
        }

        use TransitionEvent::{WorkCompletedLongBreak as Long, WorkCompletedShortBreak as Short};
        assert_eq!(work_events, vec![Short, Short, Long, Short, Short, Long]);
    }

    #[test]
    fn alternating_phases_with_an_interval_of_two() {
        let mut session = PomodoroSession::new(config(2, 1, 3, 2));
        session.start();

        assert_eq!(session.tick(), None);
        assert_eq!(
            session.tick(),
            Some(TransitionEvent::WorkCompletedShortBreak),
        );
        assert_eq!(session.phase(), Phase::Break);
        assert_eq!(session.remaining(), Duration::from_secs(1));

        assert_eq!(session.tick(), Some(TransitionEvent::BreakCompleted));
        assert_eq!(session.phase(), Phase::Work);
        assert_eq!(session.remaining(), Duration::from_secs(2));

        assert_eq!(session.tick(), None);
        assert_eq!(
            session.tick(),
            Some(TransitionEvent::WorkCompletedLongBreak),
        );
        assert_eq!(session.phase(), Phase::Break);
        assert_eq!(session.remaining(), Duration::from_secs(3));
    }

    #[test]
    fn tick_without_start_is_a_no_op() {
        let mut session = PomodoroSession::new(config(2, 1, 1, 4));

        for _ in 0..5 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.remaining(), Duration::from_secs(2));
        assert_eq!(session.phase(), Phase::Work);
    }

    #[test]
    fn stop_freezes_the_clock_and_start_resumes_it() {
        let mut session = PomodoroSession::new(config(10, 1, 1, 4));
        session.start();
        session.tick();
        session.tick();
        assert_eq!(session.remaining(), Duration::from_secs(8));

        session.stop();
        for _ in 0..5 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.remaining(), Duration::from_secs(8));
        assert_eq!(session.phase(), Phase::Work);

        session.start();
        session.tick();
        assert_eq!(session.remaining(), Duration::from_secs(7));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut session = PomodoroSession::new(config(5, 1, 1, 4));

        session.start();
        session.start();
        assert!(session.is_running());
        assert_eq!(session.remaining(), Duration::from_secs(5));

        session.stop();
        session.stop();
        assert!(!session.is_running());
        assert_eq!(session.remaining(), Duration::from_secs(5));
    }

    #[test]
    fn full_reset_clears_the_counter() {
        let mut session = PomodoroSession::new(config(1, 1, 1, 4));
        session.start();
        run_phase(&mut session);
        session.tick();
        assert_eq!(session.completed_work_phases(), 1);

        session.reset(true);
        assert_eq!(session.phase(), Phase::Work);
        assert_eq!(session.remaining(), Duration::from_secs(1));
        assert_eq!(session.completed_work_phases(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn non_full_reset_preserves_the_counter() {
        let mut session = PomodoroSession::new(config(1, 1, 1, 4));
        session.start();
        run_phase(&mut session);
        assert_eq!(session.completed_work_phases(), 1);

        session.reset(false);
        assert_eq!(session.phase(), Phase::Work);
        assert_eq!(session.remaining(), Duration::from_secs(1));
        assert_eq!(session.completed_work_phases(), 1);
        assert!(!session.is_running());
    }

    #[test]
    fn update_config_while_stopped_resets_the_clock() {
        let mut session = PomodoroSession::new(config(10, 1, 1, 4));
        session.start();
        session.tick();
        session.stop();
        session.tick();
        assert_eq!(session.remaining(), Duration::from_secs(9));

        session.update_config(
            duration(20),
            duration(2),
            duration(3),
            Some(LongBreakInterval::try_new(2).unwrap()),
        );
        assert_eq!(session.remaining(), Duration::from_secs(20));
        assert_eq!(session.phase(), Phase::Work);
        assert!(!session.is_running());
        assert_eq!(session.config().long_break_interval.inner(), 2);
    }

    #[test]
    fn update_config_while_running_takes_effect_at_the_next_boundary() {
        let mut session = PomodoroSession::new(config(3, 1, 1, 4));
        session.start();
        session.tick();
        assert_eq!(session.remaining(), Duration::from_secs(2));

        session.update_config(duration(30), duration(7), duration(9), None);
        // The elapsing phase keeps its original clock.
        assert_eq!(session.remaining(), Duration::from_secs(2));
        assert!(session.is_running());

        session.tick();
        assert_eq!(
            session.tick(),
            Some(TransitionEvent::WorkCompletedShortBreak),
        );
        assert_eq!(session.remaining(), Duration::from_secs(7));

        assert_eq!(session.tick(), None);
        assert_eq!(session.tick(), Some(TransitionEvent::BreakCompleted));
        assert_eq!(session.remaining(), Duration::from_secs(30));
    }

    #[test]
    fn update_config_keeps_the_cadence_when_no_interval_is_supplied() {
        let mut session = PomodoroSession::new(config(1, 1, 1, 3));
        session.update_config(duration(1), duration(1), duration(1), None);
        assert_eq!(session.config().long_break_interval.inner(), 3);
    }

    #[test]
    fn degenerate_values_never_reach_the_session() {
        let mut session = PomodoroSession::new(config(5, 1, 1, 4));
        let before = *session.config();

        // Validation fails at construction, so there is nothing to pass in.
        assert!(PhaseDuration::try_new(0).is_err());
        assert!(LongBreakInterval::try_new(0).is_err());

        assert_eq!(*session.config(), before);
        assert_eq!(session.remaining(), Duration::from_secs(5));
        session.start();
        assert!(session.is_running());
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        let mut session = PomodoroSession::new(config(25 * 60, 1, 1, 4));
        assert_eq!(session.clock(), "25:00");
        session.start();
        session.tick();
        assert_eq!(session.clock(), "24:59");
    }

    #[test]
    fn phase_total_tracks_the_chosen_break() {
        let mut session = PomodoroSession::new(config(1, 7, 9, 2));
        assert_eq!(session.phase_total(), Duration::from_secs(1));

        session.start();
        assert_eq!(run_phase(&mut session), TransitionEvent::WorkCompletedShortBreak);
        assert_eq!(session.phase_total(), Duration::from_secs(7));

        assert_eq!(run_phase(&mut session), TransitionEvent::BreakCompleted);
        assert_eq!(run_phase(&mut session), TransitionEvent::WorkCompletedLongBreak);
        assert_eq!(session.phase_total(), Duration::from_secs(9));
    }

    fn config(work: u64, short_break: u64, long_break: u64, interval: u32) -> SessionConfig {
        SessionConfig {
            work: duration(work),
            short_break: duration(short_break),
            long_break: duration(long_break),
            long_break_interval: LongBreakInterval::try_new(interval).unwrap(),
        }
    }

    fn duration(seconds: u64) -> PhaseDuration {
        PhaseDuration::try_new(seconds).unwrap()
    }

    fn run_phase(session: &mut PomodoroSession) -> TransitionEvent {
        loop {
            if let Some(event) = session.tick() {
                return event;
            }
        }
    }
}
