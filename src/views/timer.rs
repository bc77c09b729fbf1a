use iced::widget::{button, column, container, image as iced_image, mouse_area, row, space, svg, text};
use iced::{Alignment, Element, Font, Length};

use crate::app::{EggApp, Message};
use crate::sprites::{EGG_IMAGE_SIZE, SpriteHandle};
use crate::stage::EGG_OPTIONS;
use crate::timer::Phase;

const CARD_PADDING: u16 = 20;
const PULSE_SCALE: f32 = 1.05;
const CELEBRATE_SCALE: f32 = 1.1;

impl EggApp {
    pub(crate) fn view_timer(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let timer = &self.timer;

        // Header: the title doubles as the drag handle since the window has no frame.
        let title = mouse_area(
            container(text("Egg Timer").size(colors.label_text).color(colors.muted))
                .width(Length::Fill)
                .padding([4, 0]),
        )
        .on_press(Message::Drag);
        let close = button(text("\u{00d7}").size(colors.button_text))
            .on_press(Message::Close)
            .padding([0, 8])
            .style(colors.button_style(false));
        let header = row![title, close].align_y(Alignment::Center);

        // Egg sprite
        let egg_size = if timer.is_celebrating() {
            EGG_IMAGE_SIZE * CELEBRATE_SCALE
        } else {
            EGG_IMAGE_SIZE
        };
        let sprite: Element<'_, Message> = match self.sprites.get(timer.sprite()) {
            Some(SpriteHandle::Raster(handle)) => iced_image(handle.clone())
                .width(egg_size)
                .height(egg_size)
                .into(),
            Some(SpriteHandle::Vector(handle)) => svg(handle.clone())
                .width(egg_size)
                .height(egg_size)
                .into(),
            None => text("?").size(colors.clock_text).color(colors.muted).into(),
        };
        let mut egg = container(sprite).padding(8);
        if timer.is_cooking() {
            egg = egg.style(colors.cooking_style());
        }

        let caption = match timer.phase() {
            Phase::Completed => String::from("Done!"),
            Phase::Running => {
                format!("{}... {}s", timer.stage().label(), timer.elapsed_seconds())
            }
            Phase::Idle => timer.stage().label().to_string(),
        };

        // Readout, recolored in the last minute and grown on every other pulse beat
        let clock = timer.clock();
        let (clock_size, clock_color) = if clock.pulsing {
            let size = if timer.pulse_raised() {
                colors.clock_text * PULSE_SCALE
            } else {
                colors.clock_text
            };
            (size, colors.pulse)
        } else {
            (colors.clock_text, colors.text)
        };
        let readout = row![
            text(clock.minutes.clone()).size(clock_size).color(clock_color).font(Font::MONOSPACE),
            text(":").size(clock_size).color(clock_color).font(Font::MONOSPACE),
            text(clock.seconds.clone()).size(clock_size).color(clock_color).font(Font::MONOSPACE),
        ];

        // Start / pause / reset
        let control = |label: &'static str, msg: Option<Message>| {
            button(text(label).size(colors.button_text))
                .on_press_maybe(msg)
                .padding([6, 14])
                .style(colors.button_style(false))
        };
        let controls = row![
            control("Start", timer.can_start().then_some(Message::Start)),
            control("Pause", timer.can_pause().then_some(Message::Pause)),
            control("Reset", Some(Message::Reset)),
        ]
        .spacing(8);

        // Egg types
        let mut options = row![].spacing(6);
        for (i, option) in EGG_OPTIONS.iter().enumerate() {
            options = options.push(
                button(text(option.stage.label()).size(colors.label_text))
                    .on_press(Message::SelectEgg(i))
                    .padding([4, 10])
                    .style(colors.button_style(i == self.selected)),
            );
        }

        let body = column![
            header,
            space::vertical(),
            egg,
            text(caption).size(colors.label_text).color(colors.muted),
            readout,
            space::vertical(),
            controls,
            options,
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(body)
            .padding(CARD_PADDING)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(colors.backdrop_style())
            .into()
    }
}
