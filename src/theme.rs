use iced::{Background, Border, Color, Shadow, Vector};

/// How the theme is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
    /// Follow the desktop color scheme at startup.
    Auto,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }
}

/// Colors and sizes used by the widget, derived from the active theme.
pub struct ThemeColors {
    pub is_dark: bool,
    // Text
    pub text: Color,
    pub muted: Color,
    /// Readout color while the last minute pulses
    pub pulse: Color,
    // Surfaces
    pub backdrop: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_disabled: Color,
    pub option_active: Color,
    // Cooking glow (radial yellow -> orange in spirit)
    pub cooking_bg: Color,
    pub cooking_glow: Color,
    // Sizes (logical pixels)
    pub clock_text: f32,
    pub button_text: f32,
    pub label_text: f32,
}

impl ThemeColors {
    /// Dark theme: light text over a translucent charcoal card.
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: Color::from_rgba(1.0, 1.0, 1.0, 0.9),
            muted: Color::from_rgba(1.0, 1.0, 1.0, 0.45),
            pulse: Color::from_rgb(1.0, 0.6, 0.0),
            backdrop: Color::from_rgba(0.07, 0.06, 0.05, 0.82),
            button: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            button_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.22),
            button_disabled: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
            option_active: Color::from_rgba(1.0, 0.6, 0.0, 0.55),
            cooking_bg: Color::from_rgba(1.0, 0.92, 0.23, 0.18),
            cooking_glow: Color::from_rgba(1.0, 0.6, 0.0, 0.65),
            clock_text: 48.0,
            button_text: 14.0,
            label_text: 12.0,
        }
    }

    /// Light theme: dark text over a translucent cream card.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: Color::from_rgba(0.1, 0.08, 0.06, 0.92),
            muted: Color::from_rgba(0.3, 0.28, 0.25, 0.75),
            pulse: Color::from_rgb(0.8, 0.35, 0.0),
            backdrop: Color::from_rgba(1.0, 0.98, 0.93, 0.85),
            button: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            button_hover: Color::from_rgba(0.0, 0.0, 0.0, 0.16),
            button_disabled: Color::from_rgba(0.0, 0.0, 0.0, 0.03),
            option_active: Color::from_rgba(1.0, 0.6, 0.0, 0.45),
            cooking_bg: Color::from_rgba(1.0, 0.92, 0.23, 0.35),
            cooking_glow: Color::from_rgba(1.0, 0.6, 0.0, 0.8),
            clock_text: 48.0,
            button_text: 14.0,
            label_text: 12.0,
        }
    }

    pub fn backdrop_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.backdrop;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 18.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Egg frame while cooking: tinted disc with a soft orange glow.
    pub fn cooking_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let bg = self.cooking_bg;
        let glow = self.cooking_glow;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 120.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: glow,
                offset: Vector::new(0.0, 0.0),
                blur_radius: 30.0,
            },
            ..Default::default()
        }
    }

    pub fn button_style(
        &self,
        active: bool,
    ) -> impl Fn(&iced::Theme, iced::widget::button::Status) -> iced::widget::button::Style {
        use iced::widget::button::{Status, Style};

        let (base, hover, disabled) = if active {
            (self.option_active, self.option_active, self.button_disabled)
        } else {
            (self.button, self.button_hover, self.button_disabled)
        };
        let text = self.text;
        let muted = self.muted;
        move |_theme: &iced::Theme, status: Status| {
            let (background, text_color) = match status {
                Status::Hovered | Status::Pressed => (hover, text),
                Status::Disabled => (disabled, muted),
                _ => (base, text),
            };
            Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }
}

/// One place the desktop may publish its color scheme.
struct SchemeSource {
    program: &'static str,
    args: &'static [&'static str],
    /// `Some(true)` for dark, `Some(false)` for light, `None` when the
    /// reply says nothing either way.
    read: fn(&str) -> Option<bool>,
    /// Answer when the program runs but exits non-zero.
    on_failure: Option<bool>,
}

const SCHEME_SOURCES: &[SchemeSource] = &[
    SchemeSource {
        program: "dbus-send",
        args: &[
            "--session",
            "--print-reply=literal",
            "--dest=org.freedesktop.portal.Desktop",
            "/org/freedesktop/portal/desktop",
            "org.freedesktop.portal.Settings.ReadOne",
            "string:org.freedesktop.appearance",
            "string:color-scheme",
        ],
        read: read_portal_scheme,
        on_failure: None,
    },
    SchemeSource {
        program: "gsettings",
        args: &["get", "org.gnome.desktop.interface", "color-scheme"],
        read: read_gnome_scheme,
        on_failure: None,
    },
    SchemeSource {
        program: "defaults",
        args: &["read", "-g", "AppleInterfaceStyle"],
        read: read_apple_style,
        on_failure: Some(false),
    },
];

/// Portal reply carries `uint32 N`: 1 dark, 2 light, 0 no preference.
fn read_portal_scheme(reply: &str) -> Option<bool> {
    let value = reply.split("uint32").nth(1)?.trim();
    match value.chars().next()? {
        '1' => Some(true),
        '2' => Some(false),
        _ => None,
    }
}

fn read_gnome_scheme(reply: &str) -> Option<bool> {
    match reply.trim().trim_matches('\'') {
        "prefer-dark" => Some(true),
        "prefer-light" | "default" => Some(false),
        _ => None,
    }
}

/// The key only exists while dark mode is on; reading it fails otherwise.
fn read_apple_style(reply: &str) -> Option<bool> {
    reply.trim().eq_ignore_ascii_case("dark").then_some(true)
}

/// `GTK_THEME` names such as "Adwaita:dark".
fn read_gtk_theme(name: &str) -> bool {
    name.to_lowercase().contains("dark")
}

fn query(source: &SchemeSource) -> Option<bool> {
    let out = std::process::Command::new(source.program)
        .args(source.args)
        .output()
        .ok()?;
    if !out.status.success() {
        return source.on_failure;
    }
    (source.read)(&String::from_utf8_lossy(&out.stdout))
}

/// Ask the desktop whether it prefers dark. Spawns helper programs, so it
/// runs once at startup. Dark wins when nobody answers.
pub fn detect_system_dark() -> bool {
    SCHEME_SOURCES
        .iter()
        .find_map(query)
        .or_else(|| std::env::var("GTK_THEME").ok().map(|t| read_gtk_theme(&t)))
        .unwrap_or(true)
}

/// Resolve the ThemeColors for a given mode.
pub fn resolve(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => {
            if detect_system_dark() {
                ThemeColors::dark()
            } else {
                ThemeColors::light()
            }
        }
    }
}
