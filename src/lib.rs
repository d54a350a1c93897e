//! A desktop Pomodoro timer with a task list.
//!
//! The timer core lives in [`domain::session`]: a deterministic phase state
//! machine driven by an external one-second tick. Everything else is
//! presentation plumbing around it.

pub mod app;
pub mod config;
pub mod domain;
pub mod outbound;
pub mod utils;
