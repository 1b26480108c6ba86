//! Track info overlay.
//!
//! Bottom-left panel with the cover image, track title, position/duration,
//! and volume. Drawn on top of the visualizer; toggled with `h`.

use nannou::prelude::*;

use crate::player::format_time;

const PANEL_WIDTH: f32 = 320.0;
const PANEL_HEIGHT: f32 = 96.0;
const COVER_SIZE: f32 = 72.0;
const PADDING: f32 = 12.0;
const LINE_HEIGHT: f32 = 22.0;

/// What the HUD shows for the current frame.
pub struct HudInfo<'a> {
    pub title: &'a str,
    pub track_index: usize,
    pub track_count: usize,
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
    pub volume: f32,
    pub playing: bool,
}

pub struct Hud {
    pub visible: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn draw(&self, draw: &Draw, bounds: Rect, info: &HudInfo, cover: Option<&wgpu::Texture>) {
        if !self.visible {
            return;
        }

        let panel_x = bounds.left() + PADDING + PANEL_WIDTH / 2.0;
        let panel_y = bounds.bottom() + PADDING + PANEL_HEIGHT / 2.0;

        // Semi-transparent background
        draw.rect()
            .x_y(panel_x, panel_y)
            .w_h(PANEL_WIDTH, PANEL_HEIGHT)
            .color(rgba(0.0, 0.0, 0.0, 0.75));

        draw.rect()
            .x_y(panel_x, panel_y)
            .w_h(PANEL_WIDTH, PANEL_HEIGHT)
            .stroke(rgba(1.0, 1.0, 1.0, 0.3))
            .stroke_weight(1.0)
            .no_fill();

        let cover_x = bounds.left() + PADDING * 2.0 + COVER_SIZE / 2.0;
        let cover_y = panel_y;

        match cover {
            Some(texture) => {
                draw.texture(texture)
                    .x_y(cover_x, cover_y)
                    .w_h(COVER_SIZE, COVER_SIZE);
            }
            None => {
                // Placeholder when the cover asset is missing
                draw.rect()
                    .x_y(cover_x, cover_y)
                    .w_h(COVER_SIZE, COVER_SIZE)
                    .color(srgba(28u8, 28u8, 28u8, 255u8));
            }
        }

        let text_w = PANEL_WIDTH - COVER_SIZE - PADDING * 4.0;
        let text_x = cover_x + COVER_SIZE / 2.0 + PADDING + text_w / 2.0;

        let state = if info.playing { "playing" } else { "paused" };
        let title_line = format!(
            "{} ({}/{})",
            info.title,
            info.track_index + 1,
            info.track_count
        );
        let time_line = match info.duration_secs {
            Some(duration) => format!(
                "{} / {}  [{}]",
                format_time(info.position_secs),
                format_time(duration),
                state
            ),
            None => format!("{}  [{}]", format_time(info.position_secs), state),
        };
        let volume_line = format!("volume {:3.0}%", info.volume * 100.0);

        for (i, line) in [title_line, time_line, volume_line].iter().enumerate() {
            let y = panel_y + LINE_HEIGHT - i as f32 * LINE_HEIGHT;
            draw.text(line)
                .x_y(text_x, y)
                .w(text_w)
                .left_justify()
                .font_size(14)
                .color(WHITE);
        }
    }
}
