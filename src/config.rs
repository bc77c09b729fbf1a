use std::path::PathBuf;

use crate::theme::ThemeMode;

/// User settings read once at startup. Never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub theme: ThemeMode,
    pub sound: bool,
    /// `None` until the user decides; the host is then asked once.
    pub notifications: Option<bool>,
    pub assets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            sound: true,
            notifications: None,
            assets_dir: None,
        }
    }
}

/// Return the path to the settings file.
pub fn settings_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".config/egg-timer/settings.md")
}

/// Load settings, falling back to defaults when the file is missing or unreadable.
pub fn load() -> Settings {
    let path = settings_file_path();
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            eprintln!("[egg-timer] settings: loaded {}", path.display());
            parse_settings(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            eprintln!("[egg-timer] settings: cannot read {}: {e}", path.display());
            Settings::default()
        }
    }
}

/// Parse the settings file.
///
/// Format:
/// ```markdown
/// # egg-timer
/// - theme: dark
/// - sound: off
/// - notifications: on
/// - assets: /usr/share/egg-timer/assets
/// ```
///
/// Headings are decorative. Unknown keys and unrecognized values are ignored.
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();

    for line in content.lines() {
        let Some(entry) = line.trim().strip_prefix("- ") else {
            continue;
        };
        let Some((key, value)) = entry.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "theme" => {
                if let Some(mode) = ThemeMode::parse(value) {
                    settings.theme = mode;
                }
            }
            "sound" => {
                if let Some(on) = parse_switch(value) {
                    settings.sound = on;
                }
            }
            "notifications" => {
                if let Some(on) = parse_switch(value) {
                    settings.notifications = Some(on);
                }
            }
            "assets" => {
                if !value.is_empty() {
                    settings.assets_dir = Some(expand_home(value));
                }
            }
            other => eprintln!("[egg-timer] settings: unknown key {other:?}"),
        }
    }

    settings
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|h| h.join(rest))
            .unwrap_or_else(|| PathBuf::from(value)),
        None => PathBuf::from(value),
    }
}

/// Resolve where sprites and the bell live: the settings override, then
/// `assets/` beside the executable, then `./assets`.
pub fn assets_dir(settings: &Settings) -> PathBuf {
    if let Some(dir) = &settings.assets_dir {
        return dir.clone();
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("assets")));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from("assets"),
    }
}
