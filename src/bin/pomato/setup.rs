use std::sync::Arc;

use snafu::{ResultExt, Whatever};

use pomato::app::{Application, Messages};
use pomato::config::{self, Configuration, MessageContent};
use pomato::domain::entity::{LongBreakInterval, NotificationMessage, PhaseDuration};
use pomato::domain::session::SessionConfig;
use pomato::outbound::{ChimePlayer, NotifyService};

use crate::cli::Arguments;

const APP_NAME: &str = "pomato";

pub fn bootstrap(arg: Arguments) -> Result<Application, Whatever> {
    let configuration = configuration(&arg)?;
    let config = session_config(&configuration, &arg)?;
    let messages = messages(&configuration)?;

    let notifier = Arc::new(NotifyService::new(APP_NAME.to_owned()));
    let sound = Arc::new(ChimePlayer::new());

    Ok(Application::new(config, messages, notifier, sound))
}

fn configuration(arg: &Arguments) -> Result<Configuration, Whatever> {
    let res = match &arg.config {
        Some(path) => config::load_with_path(path.clone()),
        None => config::load_with_xdg(APP_NAME.to_owned()),
    };

    res.whatever_context("Could not load configuration")
}

/// Build the validated timer settings from the configuration file, with
/// command line overrides applied on top.
fn session_config(configuration: &Configuration, arg: &Arguments) -> Result<SessionConfig, Whatever> {
    let timer = &configuration.timer;

    let work = PhaseDuration::from_minutes(arg.work.unwrap_or(timer.work))
        .whatever_context("Invalid work duration")?;
    let short_break = PhaseDuration::from_minutes(arg.short_break.unwrap_or(timer.short_break))
        .whatever_context("Invalid short break duration")?;
    let long_break = PhaseDuration::from_minutes(arg.long_break.unwrap_or(timer.long_break))
        .whatever_context("Invalid long break duration")?;
    let long_break_interval =
        LongBreakInterval::try_new(arg.long_break_interval.unwrap_or(timer.long_break_interval))
            .whatever_context("Invalid long break interval")?;

    Ok(SessionConfig {
        work,
        short_break,
        long_break,
        long_break_interval,
    })
}

fn messages(configuration: &Configuration) -> Result<Messages, Whatever> {
    let notification = &configuration.notification;

    Ok(Messages {
        short_break: message(&notification.short_break)?,
        long_break: message(&notification.long_break)?,
        work: message(&notification.work)?,
    })
}

fn message(content: &MessageContent) -> Result<NotificationMessage, Whatever> {
    NotificationMessage::try_new(content.summary.clone(), content.body.clone())
        .whatever_context("Invalid notification message")
}
