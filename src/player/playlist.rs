//! Track descriptors and playlist cursor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One playlist entry: display title plus paths to the audio file and its
/// cover image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub audio: PathBuf,
    pub cover: PathBuf,
}

/// Ordered track list with a wrapping cursor.
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    /// Build a playlist. `tracks` must be non-empty; the config layer always
    /// supplies at least the built-in defaults.
    pub fn new(tracks: Vec<Track>) -> Self {
        assert!(!tracks.is_empty(), "playlist needs at least one track");
        Self { tracks, current: 0 }
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn next(&mut self) -> &Track {
        self.current = (self.current + 1) % self.tracks.len();
        self.current()
    }

    pub fn previous(&mut self) -> &Track {
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.current()
    }
}
