use crate::alerts::{DesktopAlerts, Permission};
use crate::config;
use crate::sprites::SpriteSheet;
use crate::stage::{DEFAULT_OPTION, EGG_OPTIONS};
use crate::streams;
use crate::surface::window_settings;
use crate::theme::{self, ThemeColors};
use crate::ticker::TickerKind;
use crate::timer::EggTimer;

use iced::{Color, Element, Subscription, Task, window};

// --- Widget State ---

pub(crate) struct EggApp {
    pub(crate) timer: EggTimer,
    pub(crate) selected: usize,
    pub(crate) colors: ThemeColors,
    pub(crate) sprites: SpriteSheet,
    pub(crate) alerts: DesktopAlerts,
    pub(crate) window_id: Option<window::Id>,
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    SelectEgg(usize),
    Start,
    Pause,
    Reset,
    Tick(TickerKind, u64),
    WindowOpened(window::Id),
    Drag,
    Close,
}

pub(crate) fn run() -> iced::Result {
    eprintln!(
        "[egg-timer] v{} ({}) starting",
        env!("EGG_TIMER_VERSION"),
        env!("EGG_TIMER_COMMIT")
    );

    iced::application(EggApp::new, EggApp::update, EggApp::view)
        .title(EggApp::title)
        .window(window_settings())
        .style(EggApp::style)
        .subscription(EggApp::subscription)
        .run()
}

impl EggApp {
    fn new() -> (Self, Task<Message>) {
        let settings = config::load();
        let colors = theme::resolve(settings.theme);
        eprintln!(
            "[egg-timer] theme -> {:?} ({})",
            settings.theme,
            if colors.is_dark { "dark" } else { "light" }
        );

        let assets_dir = config::assets_dir(&settings);
        let sprites = SpriteSheet::load(&assets_dir);
        let alerts = DesktopAlerts::new(
            assets_dir,
            settings.sound,
            Permission::from_setting(settings.notifications),
        );

        let timer = EggTimer::new(EGG_OPTIONS[DEFAULT_OPTION].seconds);
        eprintln!(
            "[egg-timer] booting -> Idle ({}s egg)",
            timer.total_seconds()
        );
        (
            Self {
                timer,
                selected: DEFAULT_OPTION,
                colors,
                sprites,
                alerts,
                window_id: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        if self.timer.is_running() {
            format!("Egg Timer - {}", self.timer.clock())
        } else if self.timer.remaining_seconds() == 0 {
            String::from("Egg Timer - done")
        } else {
            String::from("Egg Timer")
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectEgg(i) => {
                if let Some(option) = EGG_OPTIONS.get(i) {
                    self.selected = i;
                    self.timer.select_duration(option.seconds);
                }
                Task::none()
            }
            Message::Start => {
                self.timer.start();
                Task::none()
            }
            Message::Pause => {
                self.timer.pause();
                Task::none()
            }
            Message::Reset => {
                self.timer.reset();
                Task::none()
            }
            Message::Tick(kind, generation) => {
                self.timer.tick(kind, generation, &mut self.alerts);
                Task::none()
            }
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::none()
            }
            Message::Drag => match self.window_id {
                Some(id) => window::drag(id),
                None => Task::none(),
            },
            Message::Close => {
                eprintln!("[egg-timer] closing");
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.view_timer()
    }

    fn subscription(state: &Self) -> Subscription<Message> {
        let mut subs: Vec<Subscription<Message>> = state
            .timer
            .armed()
            .into_iter()
            .map(|spec| Subscription::run_with(spec, streams::ticker_stream))
            .collect();

        subs.push(window::open_events().map(Message::WindowOpened));

        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: self.colors.text,
        }
    }
}
