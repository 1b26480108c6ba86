mod audio;
mod error;
mod player;
mod ui;
mod utils;
mod viz;

use nannou::prelude::*;

use audio::FrequencyAnalyzer;
use player::{PlaybackController, Playlist, Track};
use ui::bindings::{parse_key, Action};
use ui::hud::{Hud, HudInfo};
use utils::Config;
use viz::Visualizer;

const SEEK_STEP_SECS: i64 = 5;
const VOLUME_STEP: f32 = 0.05;

fn main() {
    nannou::app(model).update(update).run();
}

struct Model {
    controller: PlaybackController,
    analyzer: FrequencyAnalyzer,
    visualizer: Visualizer,
    hud: Hud,
    cover: Option<wgpu::Texture>,
}

fn model(app: &App) -> Model {
    app.set_exit_on_escape(false);

    let window_id = app
        .new_window()
        .title("gridbeat")
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .size(1280, 720)
        .min_size(200, 200)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let (width, height) = window.inner_size_points();

    let config = Config::load();
    let samples = FrequencyAnalyzer::shared_buffer();
    let analyzer = FrequencyAnalyzer::new(samples.clone());
    let playlist = Playlist::new(config.playlist());
    let controller = PlaybackController::new(playlist, samples, config.volume());
    let visualizer = Visualizer::new(width, height, config.cell_size());

    println!(
        "{} tracks loaded, starting at: {}",
        controller.track_count(),
        controller.current_track().title
    );

    let cover = load_cover(app, controller.current_track());

    Model {
        controller,
        analyzer,
        visualizer,
        hud: Hud::new(),
        cover,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    // Idle visualizer means no analysis work at all.
    if model.visualizer.is_running() {
        model.analyzer.refresh();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let bounds = app.window_rect();

    draw.background().color(BLACK);
    model.visualizer.draw(&draw, bounds, model.analyzer.bins());

    let info = HudInfo {
        title: &model.controller.current_track().title,
        track_index: model.controller.track_index(),
        track_count: model.controller.track_count(),
        position_secs: model.controller.position().as_secs_f64(),
        duration_secs: model.controller.duration().map(|d| d.as_secs_f64()),
        volume: model.controller.volume(),
        playing: model.controller.is_playing(),
    };
    model.hud.draw(&draw, bounds, &info, model.cover.as_ref());

    draw.to_frame(app, &frame).unwrap();
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.visualizer.resize(size.x, size.y);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match parse_key(key) {
        Some(Action::Quit) => app.quit(),
        Some(Action::ToggleHud) => model.hud.toggle(),

        Some(Action::TogglePlayPause) => match model.controller.toggle() {
            Ok(true) => model.visualizer.start(),
            Ok(false) => model.visualizer.stop(),
            Err(e) => eprintln!("Playback error: {}", e),
        },

        Some(Action::NextTrack) => change_track(app, model, true),
        Some(Action::PreviousTrack) => change_track(app, model, false),

        Some(Action::SeekForward) => seek(model, SEEK_STEP_SECS),
        Some(Action::SeekBackward) => seek(model, -SEEK_STEP_SECS),

        Some(Action::VolumeUp) => {
            model.controller.adjust_volume(VOLUME_STEP);
        }
        Some(Action::VolumeDown) => {
            model.controller.adjust_volume(-VOLUME_STEP);
        }

        None => {}
    }
}

fn change_track(app: &App, model: &mut Model, forward: bool) {
    let result = if forward {
        model.controller.next_track()
    } else {
        model.controller.previous_track()
    };

    // A playback failure never stops the frame loop; the grid keeps running
    // on whatever spectrum decays out of the ring buffer.
    match result {
        Ok(()) => model.visualizer.start(),
        Err(e) => eprintln!("Track change failed: {}", e),
    }

    model.cover = load_cover(app, model.controller.current_track());
}

fn seek(model: &mut Model, delta_secs: i64) {
    if let Err(e) = model.controller.seek_by(delta_secs) {
        eprintln!("Seek failed: {}", e);
    }
}

fn load_cover(app: &App, track: &Track) -> Option<wgpu::Texture> {
    match wgpu::Texture::from_path(app, &track.cover) {
        Ok(texture) => Some(texture),
        Err(e) => {
            eprintln!("No cover for {}: {}", track.title, e);
            None
        }
    }
}
