//! Error types for the playback path.
//!
//! Playback and visualization are independent subsystems: any error here is
//! reported and the frame loop keeps running on whatever spectrum is left.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// An audio or cover file could not be opened.
    #[error("failed to load {path:?}: {source}")]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The audio file opened but could not be decoded.
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// No usable audio output device.
    #[error("audio output unavailable: {0}")]
    OutputUnavailable(String),

    /// Seeking failed or is unsupported for the current source.
    #[error("seek failed: {0}")]
    Seek(String),
}
