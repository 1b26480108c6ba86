//! Playback control over a rodio sink.
//!
//! Owns the playlist, the transport state, and the lazily-opened audio
//! output. The output stream is not touched until the first play event, the
//! same way a suspended audio graph waits for a user gesture; every decoded
//! source is routed through [`TapSource`] so the analyzer sees what plays.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::playlist::{Playlist, Track};
use super::transport::{clamp_seek, Transport};
use crate::audio::{SampleBuffer, TapSource};
use crate::error::PlayerError;

struct AudioOutput {
    // Dropping the stream kills playback, so it rides along with the sink.
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

pub struct PlaybackController {
    playlist: Playlist,
    transport: Transport,
    samples: SampleBuffer,
    output: Option<AudioOutput>,
    duration: Option<Duration>,
}

impl PlaybackController {
    pub fn new(playlist: Playlist, samples: SampleBuffer, volume: f32) -> Self {
        Self {
            playlist,
            transport: Transport::new(volume),
            samples,
            output: None,
            duration: None,
        }
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.current()
    }

    pub fn track_index(&self) -> usize {
        self.playlist.current_index()
    }

    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn is_output_suspended(&self) -> bool {
        self.output.is_none()
    }

    /// Current playback position. Zero before the output exists.
    pub fn position(&self) -> Duration {
        self.output
            .as_ref()
            .map(|o| o.sink.get_pos())
            .unwrap_or_default()
    }

    /// Duration of the current track, when the decoder knows it.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.transport.volume()
    }

    /// Toggle play/pause. Returns whether playback is running afterwards.
    pub fn toggle(&mut self) -> Result<bool, PlayerError> {
        if self.transport.is_playing() {
            if let Some(output) = &self.output {
                output.sink.pause();
            }
            self.transport.pause();
            Ok(false)
        } else {
            self.play()?;
            Ok(true)
        }
    }

    /// Start or resume playback of the current track.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        // Decode the track before touching any transport state, so a missing
        // or corrupt asset leaves the controller fully stopped.
        let queued = if self.needs_source() {
            let track = self.playlist.current().clone();
            let (source, duration) = Self::open_source(&track, self.samples.clone())?;
            Some((track, source, duration))
        } else {
            None
        };

        if self.transport.begin() {
            if let Err(e) = self.resume_output() {
                self.transport.reset_output();
                return Err(e);
            }
        }

        let output = self
            .output
            .as_ref()
            .ok_or_else(|| PlayerError::OutputUnavailable("no output stream".into()))?;

        if let Some((track, source, duration)) = queued {
            self.duration = duration;
            output.sink.append(source);
            println!(
                "[{}] Playing: {}",
                self.playlist.current_index(),
                track.title
            );
        }

        output.sink.play();
        Ok(())
    }

    /// Whether the sink needs a fresh source appended on the next play.
    fn needs_source(&self) -> bool {
        self.output.as_ref().map_or(true, |o| o.sink.empty())
    }

    pub fn next_track(&mut self) -> Result<(), PlayerError> {
        self.playlist.next();
        self.restart_current()
    }

    pub fn previous_track(&mut self) -> Result<(), PlayerError> {
        self.playlist.previous();
        self.restart_current()
    }

    /// Seek relative to the current position. Returns the clamped target in
    /// whole seconds.
    pub fn seek_by(&mut self, delta_secs: i64) -> Result<u64, PlayerError> {
        let current = self.position().as_secs() as i64;
        self.seek_to(current + delta_secs)
    }

    /// Seek to an absolute position, clamped to `[0, floor(duration)]`.
    pub fn seek_to(&mut self, target_secs: i64) -> Result<u64, PlayerError> {
        let clamped = clamp_seek(target_secs, self.duration);

        if let Some(output) = &self.output {
            output
                .sink
                .try_seek(Duration::from_secs(clamped))
                .map_err(|e| PlayerError::Seek(e.to_string()))?;
        }

        Ok(clamped)
    }

    /// Adjust volume by a delta, clamped to `[0, 1]`. Returns the new level.
    pub fn adjust_volume(&mut self, delta: f32) -> f32 {
        let volume = self.transport.set_volume(self.transport.volume() + delta);
        if let Some(output) = &self.output {
            output.sink.set_volume(volume);
        }
        volume
    }

    /// Stop whatever is queued and play the freshly selected track.
    fn restart_current(&mut self) -> Result<(), PlayerError> {
        if let Some(output) = &self.output {
            output.sink.stop();
        }
        self.duration = None;
        self.play()
    }

    fn open_source(
        track: &Track,
        samples: SampleBuffer,
    ) -> Result<(impl Source<Item = f32> + Send + 'static, Option<Duration>), PlayerError> {
        let file = File::open(&track.audio).map_err(|source| PlayerError::AssetLoad {
            path: track.audio.clone(),
            source,
        })?;

        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|source| PlayerError::Decode {
                path: track.audio.clone(),
                source,
            })?;

        let duration = decoder.total_duration();
        let tap = TapSource::new(decoder.convert_samples::<f32>(), samples);

        Ok((tap, duration))
    }

    fn resume_output(&mut self) -> Result<(), PlayerError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PlayerError::OutputUnavailable(e.to_string()))?;
        let sink =
            Sink::try_new(&handle).map_err(|e| PlayerError::OutputUnavailable(e.to_string()))?;
        sink.set_volume(self.transport.volume());

        self.output = Some(AudioOutput {
            _stream: stream,
            _handle: handle,
            sink,
        });
        Ok(())
    }
}
