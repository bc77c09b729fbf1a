mod alerts;
mod app;
mod config;
mod sprites;
mod stage;
mod streams;
mod surface;
mod theme;
mod ticker;
mod timer;
mod views;

fn main() -> iced::Result {
    app::run()
}
