use serde::Deserialize;

/// Root of the parsed configuration file.
#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub timer: TimerContent,
    pub notification: NotificationContent,
}

/// The `timer` section. Durations are minutes; they are converted to
/// seconds when the session is built.
#[derive(Debug, Deserialize)]
pub struct TimerContent {
    pub work: u64,
    pub short_break: u64,
    pub long_break: u64,
    pub long_break_interval: u32,
}

/// The `notification.<kind>` sections, one per transition event.
#[derive(Debug, Deserialize)]
pub struct NotificationContent {
    pub short_break: MessageContent,
    pub long_break: MessageContent,
    pub work: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub summary: String,
    pub body: Option<String>,
}
