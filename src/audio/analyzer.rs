//! Frequency analysis over the tapped playback samples.
//!
//! A fixed-size forward FFT over the shared sample ring buffer, converted to
//! byte magnitudes once per frame. The output mirrors the byte-frequency-data
//! shape of the original system: 256 unsigned bytes, dB-mapped and smoothed
//! over time so the grid pulses instead of flickering.

use std::sync::{Arc, Mutex};

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// FFT transform size. Yields `FFT_SIZE / 2` usable frequency bins.
pub const FFT_SIZE: usize = 512;

/// Number of byte magnitudes exposed per refresh.
pub const BIN_COUNT: usize = FFT_SIZE / 2;

/// Cells sample only the lower half of the spectrum, where perceptible
/// musical energy concentrates.
pub const CELL_BIN_RANGE: usize = BIN_COUNT / 2;

/// Temporal smoothing factor applied to bin magnitudes between refreshes.
const SMOOTHING: f32 = 0.8;

/// dB range mapped onto the 0-255 byte output.
const MIN_DB: f32 = -100.0;
const MAX_DB: f32 = -30.0;

/// Ring buffer shared between the audio thread (tap writes) and the frame
/// loop (analyzer reads). Always holds the latest `FFT_SIZE` mono samples.
pub type SampleBuffer = Arc<Mutex<Vec<f32>>>;

pub struct FrequencyAnalyzer {
    samples: SampleBuffer,
    fft: Arc<dyn Fft<f32>>,
    fft_buffer: Vec<Complex<f32>>,
    fft_window: Vec<f32>,
    smoothed: Vec<f32>,
    bins: Vec<u8>,
}

impl FrequencyAnalyzer {
    /// Create the shared ring buffer the tap source writes into. Starts
    /// zeroed, so an unconnected analyzer reports an all-zero spectrum.
    pub fn shared_buffer() -> SampleBuffer {
        Arc::new(Mutex::new(vec![0.0; FFT_SIZE]))
    }

    pub fn new(samples: SampleBuffer) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(FFT_SIZE);

        // Pre-compute Hann window
        let fft_window: Vec<f32> = (0..FFT_SIZE)
            .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / FFT_SIZE as f32).cos()))
            .collect();

        Self {
            samples,
            fft,
            fft_buffer: vec![Complex::new(0.0, 0.0); FFT_SIZE],
            fft_window,
            smoothed: vec![0.0; BIN_COUNT],
            bins: vec![0; BIN_COUNT],
        }
    }

    /// Recompute the byte magnitudes from the latest samples. Call once per
    /// frame; the buffer is mutated in place and never blocks on audio I/O.
    pub fn refresh(&mut self) {
        {
            let samples = self.samples.lock().unwrap();
            for i in 0..FFT_SIZE {
                self.fft_buffer[i] = Complex::new(samples[i] * self.fft_window[i], 0.0);
            }
        }

        self.fft.process(&mut self.fft_buffer);

        for i in 0..BIN_COUNT {
            let magnitude = self.fft_buffer[i].norm() / FFT_SIZE as f32;
            self.smoothed[i] = self.smoothed[i] * SMOOTHING + magnitude * (1.0 - SMOOTHING);

            let db = 20.0 * (self.smoothed[i] + 1e-10).log10();
            let normalized = ((db - MIN_DB) / (MAX_DB - MIN_DB)).clamp(0.0, 1.0);
            self.bins[i] = (normalized * 255.0) as u8;
        }
    }

    /// Read-only view of the current byte magnitudes.
    pub fn bins(&self) -> &[u8] {
        &self.bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_count() {
        let analyzer = FrequencyAnalyzer::new(FrequencyAnalyzer::shared_buffer());
        assert_eq!(analyzer.bins().len(), 256);
        assert_eq!(CELL_BIN_RANGE, 128);
    }

    #[test]
    fn test_silence_is_all_zero() {
        let buffer = FrequencyAnalyzer::shared_buffer();
        let mut analyzer = FrequencyAnalyzer::new(buffer);

        for _ in 0..10 {
            analyzer.refresh();
        }

        assert!(analyzer.bins().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pure_tone_concentrates_in_its_bin() {
        let buffer = FrequencyAnalyzer::shared_buffer();
        let mut analyzer = FrequencyAnalyzer::new(Arc::clone(&buffer));

        // Sine at exactly bin 16 (16 full cycles over the window)
        {
            let mut samples = buffer.lock().unwrap();
            for (i, s) in samples.iter_mut().enumerate() {
                *s = (std::f32::consts::TAU * 16.0 * i as f32 / FFT_SIZE as f32).sin();
            }
        }

        analyzer.refresh();

        let bins = analyzer.bins();
        assert!(bins[16] > 200, "tone bin should be hot, got {}", bins[16]);
        assert!(bins[16] > bins[128]);
        assert!(bins[200] < 50, "far bins should stay quiet");
    }

    #[test]
    fn test_tone_decays_after_it_stops() {
        let buffer = FrequencyAnalyzer::shared_buffer();
        let mut analyzer = FrequencyAnalyzer::new(Arc::clone(&buffer));

        {
            let mut samples = buffer.lock().unwrap();
            for (i, s) in samples.iter_mut().enumerate() {
                *s = (std::f32::consts::TAU * 16.0 * i as f32 / FFT_SIZE as f32).sin();
            }
        }
        analyzer.refresh();
        let hot = analyzer.bins()[16];
        assert!(hot > 0);

        {
            let mut samples = buffer.lock().unwrap();
            samples.iter_mut().for_each(|s| *s = 0.0);
        }
        // Smoothed magnitude decays geometrically, so the byte value falls
        // back to zero over a couple hundred frames.
        for _ in 0..200 {
            analyzer.refresh();
        }

        assert_eq!(analyzer.bins()[16], 0);
    }
}
