//! Pure transport state: play/pause flag, output-resume bookkeeping, and the
//! clamping rules for seek and volume. Kept free of any audio I/O so the
//! transport rules are unit-testable.

use std::time::Duration;

pub struct Transport {
    playing: bool,
    output_resumed: bool,
    volume: f32,
}

impl Transport {
    pub fn new(volume: f32) -> Self {
        Self {
            playing: false,
            output_resumed: false,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Mark playback as started. Returns true when the audio output still
    /// needs to be brought up; that happens at most once per transport, no
    /// matter how many play events follow.
    pub fn begin(&mut self) -> bool {
        self.playing = true;
        !std::mem::replace(&mut self.output_resumed, true)
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Forget the resumed output so the next play event requests it again.
    /// Used when opening the output stream failed.
    pub fn reset_output(&mut self) {
        self.output_resumed = false;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) -> f32 {
        self.volume = volume.clamp(0.0, 1.0);
        self.volume
    }
}

/// Clamp a seek target (seconds, may be negative after a backwards step) to
/// `[0, floor(duration)]`. Unknown durations only clamp the lower bound.
pub fn clamp_seek(target_secs: i64, duration: Option<Duration>) -> u64 {
    let target = target_secs.max(0) as u64;
    match duration {
        Some(d) => target.min(d.as_secs()),
        None => target,
    }
}

/// Format seconds as `m:ss` for the HUD.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_requests_resume_exactly_once() {
        let mut transport = Transport::new(1.0);

        assert!(transport.begin(), "first play must resume the output");
        assert!(!transport.begin());

        transport.pause();
        assert!(!transport.is_playing());
        assert!(!transport.begin(), "resume must not repeat after pause");
        assert!(transport.is_playing());
    }

    #[test]
    fn test_reset_output_allows_retry() {
        let mut transport = Transport::new(1.0);
        assert!(transport.begin());

        transport.reset_output();
        assert!(!transport.is_playing());
        assert!(transport.begin(), "a lost output must be requested again");
    }

    #[test]
    fn test_volume_clamped() {
        let mut transport = Transport::new(1.0);
        assert_eq!(transport.set_volume(1.7), 1.0);
        assert_eq!(transport.set_volume(-0.3), 0.0);
        assert_eq!(transport.set_volume(0.45), 0.45);
    }

    #[test]
    fn test_initial_volume_clamped() {
        assert_eq!(Transport::new(2.0).volume(), 1.0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let duration = Some(Duration::from_secs_f64(185.7));
        assert_eq!(clamp_seek(200, duration), 185);
        assert_eq!(clamp_seek(90, duration), 90);
        assert_eq!(clamp_seek(-5, duration), 0);
    }

    #[test]
    fn test_seek_with_unknown_duration() {
        assert_eq!(clamp_seek(1234, None), 1234);
        assert_eq!(clamp_seek(-1, None), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(185.2), "3:05");
    }
}
