use iced::window;
use iced::Size;

pub(crate) const WINDOW_WIDTH: f32 = 384.0;
pub(crate) const WINDOW_HEIGHT: f32 = 512.0;

/// Fixed-size, frameless, translucent top-level window.
pub(crate) fn window_settings() -> window::Settings {
    let size = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    window::Settings {
        size,
        min_size: Some(size),
        max_size: Some(size),
        resizable: false,
        decorations: false,
        transparent: true,
        exit_on_close_request: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_fixed_and_frameless() {
        let settings = window_settings();
        assert_eq!(settings.size, Size::new(384.0, 512.0));
        assert_eq!(settings.min_size, settings.max_size);
        assert!(!settings.resizable);
        assert!(!settings.decorations);
        assert!(settings.transparent);
        assert!(settings.exit_on_close_request);
    }
}
