mod command;

pub use command::{Command, ParseCommandError};

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use snafu::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::time::MissedTickBehavior;

use crate::domain::entity::duration::TryNewPhaseDurationError;
use crate::domain::entity::interval::TryNewLongBreakIntervalError;
use crate::domain::entity::{
    LongBreakInterval, NotificationMessage, PhaseDuration, TransitionEvent,
};
use crate::domain::outbound::{NotifyPort, SoundPort};
use crate::domain::session::{PomodoroSession, SessionConfig};
use crate::domain::task::{TaskId, TaskList};
use crate::tracing_report;

/// Notification shown for each kind of phase transition.
#[derive(Debug, Clone)]
pub struct Messages {
    pub short_break: NotificationMessage,
    pub long_break: NotificationMessage,
    pub work: NotificationMessage,
}

impl Messages {
    fn for_event(&self, event: TransitionEvent) -> &NotificationMessage {
        match event {
            TransitionEvent::WorkCompletedShortBreak => &self.short_break,
            TransitionEvent::WorkCompletedLongBreak => &self.long_break,
            TransitionEvent::BreakCompleted => &self.work,
        }
    }
}

/// The terminal presentation layer.
///
/// Owns the session and the task list, drives the one-second tick while the
/// session is running, and maps transition events to notification and sound
/// side effects. The session itself stays a pure state machine; everything
/// user-visible happens here.
pub struct Application {
    session: PomodoroSession,
    tasks: TaskList,
    messages: Messages,
    notifier: Arc<dyn NotifyPort>,
    sound: Arc<dyn SoundPort>,
}

impl Application {
    /// Creates a new [`Application`] with a stopped session and an empty
    /// task list.
    pub fn new(
        config: SessionConfig,
        messages: Messages,
        notifier: Arc<dyn NotifyPort>,
        sound: Arc<dyn SoundPort>,
    ) -> Self {
        Self {
            session: PomodoroSession::new(config),
            tasks: TaskList::new(),
            messages,
            notifier,
            sound,
        }
    }

    /// Read commands from standard input and tick the session once per
    /// second while it is running, until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// This function will return an error if reading standard input fails.
    pub async fn run(mut self) -> Result<(), RunApplicationError> {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("pomato -- type `help` for commands");
        self.print_status();

        loop {
            tokio::select! {
                // No ticks are scheduled while the session is stopped; the
                // single loop also serializes ticks and commands.
                _ = ticker.tick(), if self.session.is_running() => self.on_tick().await,
                line = next_line(&mut lines) => match line? {
                    Some(line) => {
                        if !self.on_line(&line).await {
                            break;
                        }
                    }
                    None => break,
                },
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns `false` when the application
    /// should exit.
    async fn on_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        match Command::parse(line) {
            Ok(command) => self.apply(command).await,
            // Malformed input is reported and discarded; it never touches
            // the session or the task list.
            Err(err) => {
                println!("{err}");
                true
            }
        }
    }

    /// Apply one parsed command. Returns `false` when the application
    /// should exit.
    async fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.session.start(),
            Command::Stop => {
                self.session.stop();
                self.print_status();
            }
            Command::Reset => {
                // Start over only when nothing was in progress: a running
                // session keeps its completed-phase count.
                let full = !self.session.is_running();
                self.session.reset(full);
                self.print_status();
            }
            Command::Status => self.print_status(),
            Command::Config {
                work,
                short_break,
                long_break,
                long_break_interval,
            } => match timer_settings(work, short_break, long_break, long_break_interval) {
                Ok((work, short_break, long_break, interval)) => {
                    self.session
                        .update_config(work, short_break, long_break, interval);
                    tracing::debug!("timer settings updated");
                    self.print_status();
                }
                Err(err) => println!("{err}"),
            },
            Command::Add { label } => {
                self.tasks.add(&label);
            }
            Command::Done { id } => self.tasks.mark_done(TaskId::from(id)),
            Command::Remove { id } => self.tasks.remove(TaskId::from(id)),
            Command::Current { id } => self.tasks.select_current(TaskId::from(id)),
            Command::Tasks => self.print_tasks(),
            Command::Help => print_help(),
            Command::Quit => return false,
        }

        true
    }

    /// Advance the session by one second and fire the side effects of a
    /// transition, if any. Notification and sound failures are logged and
    /// otherwise ignored.
    async fn on_tick(&mut self) {
        let Some(event) = self.session.tick() else {
            self.print_clock();
            return;
        };

        tracing::debug!(%event, "phase transition");

        let message = self.messages.for_event(event);
        if let Err(err) = self.notifier.notify(message).await {
            tracing_report!(err);
        }
        if let Err(err) = self.sound.chime().await {
            tracing_report!(err);
        }

        println!();
        self.print_status();
    }

    fn print_clock(&self) {
        let mut out = std::io::stdout();
        let _ = write!(out, "\r{} {}  ", self.session.phase(), self.session.clock());
        let _ = out.flush();
    }

    fn print_status(&self) {
        let session = &self.session;
        println!(
            "{} {}  [{}]  pomodoros completed: {}",
            session.phase(),
            session.clock(),
            if session.is_running() { "running" } else { "stopped" },
            session.completed_work_phases(),
        );
        if let Some(task) = self.tasks.current() {
            println!("current task: {}", task.label());
        }
    }

    fn print_tasks(&self) {
        if self.tasks.is_empty() {
            println!("no tasks");
            return;
        }

        let current = self.tasks.current().map(|task| task.id());
        for task in self.tasks.iter() {
            let marker = if current == Some(task.id()) { "*" } else { " " };
            println!("{marker}{} [{}] {}", task.id(), task.status(), task.label());
        }
    }

    #[cfg(test)]
    fn session(&self) -> &PomodoroSession {
        &self.session
    }

    #[cfg(test)]
    fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}

async fn next_line(
    lines: &mut Lines<BufReader<tokio::io::Stdin>>,
) -> Result<Option<String>, RunApplicationError> {
    lines.next_line().await.context(StdinSnafu)
}

/// Build validated timer settings from raw values in minutes.
///
/// # Errors
///
/// This function will return an error if any duration or the interval is
/// zero; nothing is handed to the session in that case.
fn timer_settings(
    work: u64,
    short_break: u64,
    long_break: u64,
    long_break_interval: Option<u32>,
) -> Result<
    (
        PhaseDuration,
        PhaseDuration,
        PhaseDuration,
        Option<LongBreakInterval>,
    ),
    InvalidTimerSettingsError,
> {
    let work = PhaseDuration::from_minutes(work).context(DurationSnafu { field: "work" })?;
    let short_break = PhaseDuration::from_minutes(short_break).context(DurationSnafu {
        field: "short_break",
    })?;
    let long_break = PhaseDuration::from_minutes(long_break).context(DurationSnafu {
        field: "long_break",
    })?;
    let interval = long_break_interval
        .map(|value| LongBreakInterval::try_new(value).context(IntervalSnafu))
        .transpose()?;

    Ok((work, short_break, long_break, interval))
}

fn print_help() {
    println!(
        "\
start                                begin or resume the countdown
stop                                 stop the countdown, keeping the clock
reset                                reset the clock (full reset when stopped)
status                               show phase, clock and completed count
config <work> <short> <long> [n]     set durations in minutes, cadence n
add <label>                          append a task
done <id>                            mark a task done
rm <id>                              remove a task
task <id>                            set the current task
tasks                                list tasks
quit                                 exit"
    );
}

/// An error type of the interactive loop.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RunApplicationError {
    #[snafu(display("Could not read from standard input"))]
    Stdin { source: std::io::Error },
}

/// An error type of building timer settings from raw input.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum InvalidTimerSettingsError {
    #[snafu(display("Invalid `{field}` duration"))]
    Duration {
        field: &'static str,
        source: TryNewPhaseDurationError,
    },
    #[snafu(display("Invalid long break interval"))]
    Interval {
        source: TryNewLongBreakIntervalError,
    },
}
