//! Configuration file management.
//!
//! Handles loading user preferences and the playlist from `~/.gridbeat.toml`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::player::Track;
use crate::viz::grid::CELL_SIZE;

const DEFAULT_VOLUME: f32 = 1.0;

const CONFIG_TEMPLATE: &str = r#"# gridbeat configuration file

# Side length of one visualizer cell in pixels (default: 15)
# cell_size = 15

# Startup volume, 0.0 - 1.0 (default: 1.0)
# volume = 1.0

# Playlist. When omitted, the built-in two-track playlist is used.
# [[tracks]]
# title = "Aegir"
# audio = "assets/audio/Aegir.mp3"
# cover = "assets/images/Aegir.png"
#
# [[tracks]]
# title = "Memory"
# audio = "assets/audio/Memory.mp3"
# cover = "assets/images/Memory.png"
"#;

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub cell_size: Option<u32>,
    pub volume: Option<f32>,
    pub tracks: Option<Vec<Track>>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".gridbeat.toml"))
    }

    pub fn load() -> Self {
        let path = match Self::path() {
            Some(p) => p,
            None => return Self::default(),
        };

        // Create template file if it doesn't exist
        if !path.exists() {
            let _ = fs::write(&path, CONFIG_TEMPLATE);
            println!("Created config template at {:?}", path);
        }

        fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size.filter(|&c| c > 0).unwrap_or(CELL_SIZE)
    }

    pub fn volume(&self) -> f32 {
        self.volume.unwrap_or(DEFAULT_VOLUME)
    }

    /// Configured playlist, or the built-in default tracks.
    pub fn playlist(&self) -> Vec<Track> {
        match &self.tracks {
            Some(tracks) if !tracks.is_empty() => tracks.clone(),
            _ => default_tracks(),
        }
    }
}

fn default_tracks() -> Vec<Track> {
    vec![
        Track {
            title: "Aegir".to_string(),
            audio: PathBuf::from("assets/audio/Aegir.mp3"),
            cover: PathBuf::from("assets/images/Aegir.png"),
        },
        Track {
            title: "Memory".to_string(),
            audio: PathBuf::from("assets/audio/Memory.mp3"),
            cover: PathBuf::from("assets/images/Memory.png"),
        },
    ]
}
