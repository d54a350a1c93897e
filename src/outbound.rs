use std::path::Path;
use std::process::Stdio;

use notify_rust::Notification;
use snafu::prelude::*;
use tokio::process::Command;

use crate::domain::outbound::{NotifyError, NotifyPort, NotifyRequest, PlaySoundError, SoundPort};

/// A [`NotifyPort`] implementation backed by desktop notifications.
#[derive(Debug, Clone)]
pub struct NotifyService {
    app_name: String,
}

impl NotifyService {
    /// Creates a new [`NotifyService`].
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }
}

#[async_trait::async_trait]
impl NotifyPort for NotifyService {
    async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.icon("alarm-clock");
        notification.summary(&request.summary);

        if let Some(body) = request.body {
            notification.body(&body);
        }

        let _ = whatever!(
            notification.show_async().await,
            "Could not show notification",
        );

        Ok(())
    }
}

/// Players and stock sound files tried in order. The first pair whose clip
/// exists on disk wins.
const CHIME_CANDIDATES: &[(&str, &str)] = &[
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("aplay", "/usr/share/sounds/sound-icons/prompt.wav"),
];

/// A [`SoundPort`] implementation that spawns a system audio player on a
/// stock desktop sound.
///
/// Playback is best-effort: when no known player or clip is available the
/// chime is silently skipped, mirroring how the timer should keep working
/// on machines without audio.
#[derive(Debug, Clone, Default)]
pub struct ChimePlayer;

impl ChimePlayer {
    /// Creates a new [`ChimePlayer`].
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SoundPort for ChimePlayer {
    async fn chime(&self) -> Result<(), PlaySoundError> {
        for (player, clip) in CHIME_CANDIDATES {
            if !Path::new(clip).exists() {
                continue;
            }

            // Detached on purpose; the chime outlives nothing and is never
            // awaited.
            let _ = whatever!(
                Command::new(player)
                    .arg(clip)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn(),
                "Could not spawn audio player `{player}`",
            );

            return Ok(());
        }

        Ok(())
    }
}
