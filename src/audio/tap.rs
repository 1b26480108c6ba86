//! Sample tap between the decoder and the audio output.
//!
//! `TapSource` forwards every decoded sample to the sink unchanged while
//! mixing frames down to mono and streaming them into the analyzer's shared
//! ring buffer. The ring buffer always holds the most recent window of
//! samples; old samples fall off the front.

use std::time::Duration;

use rodio::source::SeekError;
use rodio::Source;

use super::analyzer::SampleBuffer;

pub struct TapSource<S> {
    inner: S,
    samples: SampleBuffer,
    channels: u16,
    frame: Vec<f32>,
}

impl<S> TapSource<S>
where
    S: Source<Item = f32>,
{
    pub fn new(inner: S, samples: SampleBuffer) -> Self {
        let channels = inner.channels();
        Self {
            inner,
            samples,
            channels,
            frame: Vec::with_capacity(channels as usize),
        }
    }

    fn push_mono(&mut self) {
        let mono = self.frame.iter().sum::<f32>() / self.channels as f32;
        self.frame.clear();

        let mut buffer = self.samples.lock().unwrap();
        buffer.remove(0);
        buffer.push(mono);
    }
}

impl<S> Iterator for TapSource<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let sample = self.inner.next()?;

        self.frame.push(sample);
        if self.frame.len() >= self.channels as usize {
            self.push_mono();
        }

        Some(sample)
    }
}

impl<S> Source for TapSource<S>
where
    S: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), SeekError> {
        self.inner.try_seek(pos)
    }
}
