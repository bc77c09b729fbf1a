use std::collections::HashMap;
use std::path::Path;

use iced::widget::{image as iced_image, svg};

use crate::stage::{DONE_FRAME, Stage};
use crate::timer::Sprite;

pub(crate) const EGG_IMAGE_SIZE: f32 = 176.0;

#[derive(Debug, Clone)]
pub(crate) enum SpriteHandle {
    Raster(iced_image::Handle),
    /// Generated stand-in for a frame file that could not be loaded.
    Vector(svg::Handle),
}

impl SpriteHandle {
    fn is_fallback(&self) -> bool {
        matches!(self, SpriteHandle::Vector(_))
    }
}

/// Every frame the widget can show, keyed by frame id.
pub(crate) struct SpriteSheet {
    frames: HashMap<&'static str, SpriteHandle>,
}

impl SpriteSheet {
    pub(crate) fn load(assets_dir: &Path) -> Self {
        let mut frames = HashMap::new();

        for stage in Stage::ALL {
            for (i, &name) in stage.definition().frames.iter().enumerate() {
                frames
                    .entry(name)
                    .or_insert_with(|| load_or(assets_dir, name, || egg_svg(stage, i)));
            }
        }
        frames.insert(DONE_FRAME, load_or(assets_dir, DONE_FRAME, done_svg));

        let fallbacks = frames.values().filter(|h| h.is_fallback()).count();
        eprintln!(
            "[egg-timer] sprites: {} frames from {} ({fallbacks} generated)",
            frames.len(),
            assets_dir.display()
        );
        Self { frames }
    }

    pub(crate) fn get(&self, sprite: Sprite) -> Option<&SpriteHandle> {
        let name = match sprite {
            Sprite::Frame(stage, index) => stage.frame(index),
            Sprite::Done => DONE_FRAME,
        };
        self.frames.get(name)
    }
}

fn load_or(assets_dir: &Path, name: &str, fallback: impl FnOnce() -> svg::Handle) -> SpriteHandle {
    let path = assets_dir.join(name);
    match image::open(&path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            SpriteHandle::Raster(iced_image::Handle::from_rgba(w, h, rgba.into_raw()))
        }
        Err(e) => {
            eprintln!("[egg-timer] failed to load {}: {e}", path.display());
            SpriteHandle::Vector(fallback())
        }
    }
}

fn yolk_color(stage: Stage) -> &'static str {
    match stage {
        Stage::Gooey => "#ffd54f",
        Stage::Soft => "#ffb300",
        Stage::Hard => "#f9e79f",
        Stage::Stupid => "#8d8f5a",
    }
}

/// Fried egg, tilted a little on odd frames so the loop visibly wobbles.
fn egg_svg(stage: Stage, frame: usize) -> svg::Handle {
    let tilt = if frame % 2 == 0 { -4.0 } else { 4.0 };
    let yolk = yolk_color(stage);
    let content = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256" viewBox="0 0 256 256">
  <g transform="rotate({tilt} 128 128)">
    <path d="M128 28 C196 28 232 92 220 150 C208 212 160 232 118 228 C64 222 26 184 32 128 C38 70 76 28 128 28 Z"
      fill="#fffdf5" stroke="#e8e0cc" stroke-width="4"/>
    <circle cx="128" cy="132" r="48" fill="{yolk}"/>
    <ellipse cx="112" cy="116" rx="12" ry="8" fill="#ffffff" opacity="0.6"/>
  </g>
</svg>"##
    );
    svg::Handle::from_memory(content.into_bytes())
}

fn done_svg() -> svg::Handle {
    let content = r##"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256" viewBox="0 0 256 256">
  <path d="M128 28 C196 28 232 92 220 150 C208 212 160 232 118 228 C64 222 26 184 32 128 C38 70 76 28 128 28 Z"
    fill="#fffdf5" stroke="#e8e0cc" stroke-width="4"/>
  <circle cx="128" cy="132" r="48" fill="#ffb300"/>
  <path d="M104 134 L122 152 L156 114" fill="none" stroke="#ffffff" stroke-width="12"
    stroke-linecap="round" stroke-linejoin="round"/>
</svg>"##;
    svg::Handle::from_memory(content.as_bytes().to_vec())
}
