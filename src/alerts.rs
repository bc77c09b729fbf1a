use std::io::Cursor;
use std::path::PathBuf;

use notify_rust::Notification;
use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

pub(crate) const BELL_FILE: &str = "bell.mp3";
const NOTIFY_ICON_FILE: &str = "Egg0.png";

/// Text of a desktop notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) title: &'static str,
    pub(crate) body: &'static str,
}

pub(crate) const DONE_NOTICE: Notice = Notice {
    title: "Egg Timer Complete!",
    body: "Your eggs are ready!",
};

#[derive(Debug, Error)]
pub(crate) enum SoundError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("no audio output: {0}")]
    Device(#[from] rodio::StreamError),
    #[error("cannot start playback: {0}")]
    Playback(#[from] rodio::PlayError),
}

/// Host notification permission, decided at most once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Permission {
    Default,
    Granted,
    Denied,
}

impl Permission {
    /// Map the settings file choice: `Some(on/off)` is already decided.
    pub(crate) fn from_setting(setting: Option<bool>) -> Self {
        match setting {
            Some(true) => Permission::Granted,
            Some(false) => Permission::Denied,
            None => Permission::Default,
        }
    }

    /// Ask the host once. Only an undecided permission triggers a request.
    pub(crate) fn resolve(self) -> Self {
        match self {
            Permission::Default => request_permission(),
            decided => decided,
        }
    }
}

/// Granted when a freedesktop notification server answers.
#[cfg(all(unix, not(target_os = "macos")))]
fn request_permission() -> Permission {
    match notify_rust::get_server_information() {
        Ok(info) => {
            eprintln!(
                "[egg-timer] notifications: granted ({} {})",
                info.name, info.version
            );
            Permission::Granted
        }
        Err(e) => {
            eprintln!("[egg-timer] notifications: denied ({e})");
            Permission::Denied
        }
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn request_permission() -> Permission {
    eprintln!("[egg-timer] notifications: granted");
    Permission::Granted
}

/// Side effects the countdown controller may trigger on completion.
pub(crate) trait Alerts {
    /// Start the completion bell without blocking. An `Err` means the
    /// bell will not sound; the caller logs and moves on.
    fn ring_bell(&mut self) -> Result<(), SoundError>;

    fn notifications_granted(&self) -> bool;

    fn notify(&mut self, notice: &Notice);
}

/// Real audio output and desktop notifications.
pub(crate) struct DesktopAlerts {
    assets_dir: PathBuf,
    sound: bool,
    permission: Permission,
}

impl DesktopAlerts {
    pub(crate) fn new(assets_dir: PathBuf, sound: bool, permission: Permission) -> Self {
        Self {
            assets_dir,
            sound,
            permission: permission.resolve(),
        }
    }
}

impl Alerts for DesktopAlerts {
    fn ring_bell(&mut self) -> Result<(), SoundError> {
        if !self.sound {
            eprintln!("[egg-timer] bell muted by settings");
            return Ok(());
        }
        let path = self.assets_dir.join(BELL_FILE);
        let bytes = std::fs::read(&path).map_err(|source| SoundError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let source = Decoder::new(Cursor::new(bytes)).map_err(|source| SoundError::Decode {
            path: path.display().to_string(),
            source,
        })?;

        // The stream must outlive playback, so it lives on the player thread.
        std::thread::spawn(move || {
            let play = || -> Result<(), SoundError> {
                let (_stream, handle) = OutputStream::try_default()?;
                let sink = Sink::try_new(&handle)?;
                sink.append(source);
                sink.sleep_until_end();
                Ok(())
            };
            if let Err(e) = play() {
                eprintln!("[egg-timer] audio play failed: {e}");
            }
        });
        Ok(())
    }

    fn notifications_granted(&self) -> bool {
        self.permission == Permission::Granted
    }

    fn notify(&mut self, notice: &Notice) {
        let icon = self.assets_dir.join(NOTIFY_ICON_FILE);
        let notice = *notice;
        std::thread::spawn(move || {
            let result = Notification::new()
                .appname("egg-timer")
                .summary(notice.title)
                .body(notice.body)
                .icon(&icon.to_string_lossy())
                .show();
            if let Err(e) = result {
                eprintln!("[egg-timer] notification failed: {e}");
            }
        });
    }
}
