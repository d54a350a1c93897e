use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::NotificationMessage;

/// A public port for emitting a desktop notification at a phase transition.
///
/// Injected into the presentation layer only; the session state machine
/// never depends on it. Failures are reported, logged by the caller, and
/// otherwise ignored.
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Do the notification operation. This method is not intended to be
    /// implemented by adapters directly.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let request = NotifyRequest {
            summary: message.summary().to_owned(),
            body: message.body().map(|body| body.to_owned()),
        };
        self.notify_impl(request).await
    }

    /// Actual implementation of notification operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError>;
}

/// A structure that stores required data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    pub summary: String,
    pub body: Option<String>,
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// A public port for playing a short chime at a phase transition.
///
/// Best-effort by contract: adapters degrade silently when no audio output
/// is available, and callers log and discard whatever errors remain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SoundPort: Send + Sync + 'static {
    /// Play the chime.
    ///
    /// # Errors
    ///
    /// This function will return an error if playback could not be started.
    async fn chime(&self) -> Result<(), PlaySoundError>;
}

/// An error type of the chime operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum PlaySoundError {
    #[snafu(whatever, display("Could not play a chime: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}
