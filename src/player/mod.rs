mod controller;
mod playlist;
mod transport;

pub use controller::PlaybackController;
pub use playlist::{Playlist, Track};
pub use transport::format_time;
