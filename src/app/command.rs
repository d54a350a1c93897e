use std::num::ParseIntError;
use std::str::{FromStr, SplitWhitespace};

use snafu::prelude::*;

/// One line of input at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start or resume the countdown
    Start,
    /// Stop the countdown, keeping the clock where it is
    Stop,
    /// Reset the clock; a full reset when the session was stopped
    Reset,
    /// Print the session state
    Status,
    /// Replace the timer settings, durations in minutes
    Config {
        work: u64,
        short_break: u64,
        long_break: u64,
        long_break_interval: Option<u32>,
    },
    /// Append a task to the list
    Add { label: String },
    /// Mark a task as done
    Done { id: u64 },
    /// Remove a task
    Remove { id: u64 },
    /// Set the task shown as current
    Current { id: u64 },
    /// List the tasks
    Tasks,
    /// Print the command reference
    Help,
    /// Exit the application
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// This function will return an error if the line is not a known
    /// command with well-formed arguments.
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().context(EmptySnafu)?;

        let command = match name {
            "start" => Self::Start,
            "stop" => Self::Stop,
            "reset" => Self::Reset,
            "status" => Self::Status,
            "config" => {
                let work = number(&mut words, "work")?;
                let short_break = number(&mut words, "short_break")?;
                let long_break = number(&mut words, "long_break")?;
                let long_break_interval = words
                    .next()
                    .map(|word| word.parse().context(InvalidNumberSnafu { name: "long_break_interval" }))
                    .transpose()?;
                Self::Config {
                    work,
                    short_break,
                    long_break,
                    long_break_interval,
                }
            }
            "add" => {
                // The label is the rest of the line, spaces included.
                let label = line
                    .trim_start()
                    .strip_prefix("add")
                    .unwrap_or_default()
                    .trim()
                    .to_owned();
                ensure!(!label.is_empty(), MissingArgumentSnafu { name: "label" });
                Self::Add { label }
            }
            "done" => Self::Done {
                id: number(&mut words, "id")?,
            },
            "rm" => Self::Remove {
                id: number(&mut words, "id")?,
            },
            "task" => Self::Current {
                id: number(&mut words, "id")?,
            },
            "tasks" => Self::Tasks,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                return UnknownSnafu {
                    name: name.to_owned(),
                }
                .fail()
            }
        };

        Ok(command)
    }
}

fn number<T>(words: &mut SplitWhitespace, name: &'static str) -> Result<T, ParseCommandError>
where
    T: FromStr<Err = ParseIntError>,
{
    let word = words.next().context(MissingArgumentSnafu { name })?;
    word.parse().context(InvalidNumberSnafu { name })
}

/// An error type for parsing an input line.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseCommandError {
    #[snafu(display("Empty input"))]
    Empty,
    #[snafu(display("Unknown command `{name}`, try `help`"))]
    Unknown { name: String },
    #[snafu(display("Missing argument `{name}`"))]
    MissingArgument { name: &'static str },
    #[snafu(display("Argument `{name}` is not a valid number"))]
    InvalidNumber {
        name: &'static str,
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_commands() {
        assert_eq!(Command::parse("start"), Ok(Command::Start));
        assert_eq!(Command::parse("  stop "), Ok(Command::Stop));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("status"), Ok(Command::Status));
        assert_eq!(Command::parse("tasks"), Ok(Command::Tasks));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_config_with_and_without_interval() {
        assert_eq!(
            Command::parse("config 25 5 20 4"),
            Ok(Command::Config {
                work: 25,
                short_break: 5,
                long_break: 20,
                long_break_interval: Some(4),
            }),
        );
        assert_eq!(
            Command::parse("config 50 10 30"),
            Ok(Command::Config {
                work: 50,
                short_break: 10,
                long_break: 30,
                long_break_interval: None,
            }),
        );
    }

    #[test]
    fn parse_add_keeps_spaces_in_the_label() {
        assert_eq!(
            Command::parse("add buy oat milk"),
            Ok(Command::Add {
                label: "buy oat milk".to_owned(),
            }),
        );
        assert!(matches!(
            Command::parse("add    "),
            Err(ParseCommandError::MissingArgument { name: "label" }),
        ));
    }

    #[test]
    fn parse_task_operations() {
        assert_eq!(Command::parse("done 3"), Ok(Command::Done { id: 3 }));
        assert_eq!(Command::parse("rm 1"), Ok(Command::Remove { id: 1 }));
        assert_eq!(Command::parse("task 2"), Ok(Command::Current { id: 2 }));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(Command::parse("   "), Err(ParseCommandError::Empty));
        assert!(matches!(
            Command::parse("launch"),
            Err(ParseCommandError::Unknown { .. }),
        ));
        assert!(matches!(
            Command::parse("done"),
            Err(ParseCommandError::MissingArgument { name: "id" }),
        ));
        assert!(matches!(
            Command::parse("config 25 five 20"),
            Err(ParseCommandError::InvalidNumber { name: "short_break", .. }),
        ));
    }
}
