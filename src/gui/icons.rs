use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

pub const ICON_SIZE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Mute,
    Low,
    Medium,
    High,
}

/// Icon tier for a volume slider value.
pub fn volume_level(volume: i64) -> VolumeLevel {
    if volume == 0 {
        VolumeLevel::Mute
    } else if volume < 30 {
        VolumeLevel::Low
    } else if volume < 70 {
        VolumeLevel::Medium
    } else {
        VolumeLevel::High
    }
}

/// Fallback glyph shown when the corresponding icon file did not load.
pub fn volume_glyph(level: VolumeLevel) -> &'static str {
    match level {
        VolumeLevel::Mute => "🔇",
        VolumeLevel::Low => "🔈",
        VolumeLevel::Medium => "🔉",
        VolumeLevel::High => "🔊",
    }
}

/// Button and indicator textures. Every slot is optional: a missing or
/// unreadable file degrades that one button to its text fallback.
pub struct PlayerIcons {
    pub backward: Option<TextureHandle>,
    pub play: Option<TextureHandle>,
    pub forward: Option<TextureHandle>,
    pub pause: Option<TextureHandle>,
    pub stop: Option<TextureHandle>,
    pub open: Option<TextureHandle>,
    pub mini: Option<TextureHandle>,
    pub fullscreen: Option<TextureHandle>,
    pub theme_orange: Option<TextureHandle>,
    pub theme_blue: Option<TextureHandle>,
    pub volume_mute: Option<TextureHandle>,
    pub volume_low: Option<TextureHandle>,
    pub volume_medium: Option<TextureHandle>,
    pub volume_high: Option<TextureHandle>,
}

impl PlayerIcons {
    pub fn load(ctx: &egui::Context, dir: &Path) -> Self {
        let icon = |name: &str| load_icon(ctx, &dir.join(name));
        Self {
            backward: icon("backward_arrow.png"),
            play: icon("play_arrow.png"),
            forward: icon("forward_arrow.png"),
            pause: icon("pause_button.png"),
            stop: icon("stop_button.png"),
            open: icon("load_file.png"),
            mini: icon("mini_player.png"),
            fullscreen: icon("fullscreen.png"),
            theme_orange: icon("naranja.png"),
            theme_blue: icon("azul.png"),
            volume_mute: icon("volume_mute.png"),
            volume_low: icon("volume_low.png"),
            volume_medium: icon("volume_medium.png"),
            volume_high: icon("volume_high.png"),
        }
    }

    pub fn volume(&self, level: VolumeLevel) -> &Option<TextureHandle> {
        match level {
            VolumeLevel::Mute => &self.volume_mute,
            VolumeLevel::Low => &self.volume_low,
            VolumeLevel::Medium => &self.volume_medium,
            VolumeLevel::High => &self.volume_high,
        }
    }
}

/// Directory the icon set ships in, next to the executable. Falls back to a
/// relative `assets/` for `cargo run`.
pub fn default_assets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("assets"))
}

fn load_icon(ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
    match read_icon(path) {
        Ok(image) => Some(ctx.load_texture(path.display().to_string(), image, TextureOptions::LINEAR)),
        Err(err) => {
            log::warn!("Failed to load icon {}: {}", path.display(), err);
            None
        }
    }
}

fn read_icon(path: &Path) -> anyhow::Result<ColorImage> {
    let image = image::open(path)?
        .resize_exact(ICON_SIZE, ICON_SIZE, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image.into_raw();
    Ok(ColorImage::from_rgba_unmultiplied(size, &pixels))
}
