//! Mapping between logical frame numbers and millisecond timestamps.

use libm::roundf;

/// Converts timestamps to bracketing logical frame numbers and back, for a
/// configured nominal video frame rate.
///
/// The tracker is pure: it holds no knowledge of which frames exist and is
/// safe to share between readers.
#[derive(Debug, Clone, Copy)]
pub struct FrameTracker {
    /// Ideal frame interval, kept in integer microseconds to avoid per-call
    /// float math and drift.
    micros_per_frame: u32,
    /// Timestamp of logical frame 0.
    start_time_ms: u32,
}

impl FrameTracker {
    /// Create a tracker with frame 0 at timestamp 0.
    pub fn new(fps: f32) -> Self {
        Self::with_epoch(fps, 0)
    }

    /// Create a tracker with frame 0 at `start_time_ms`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_epoch(fps: f32, start_time_ms: u32) -> Self {
        assert!(fps > 0.0, "fps must be positive");
        Self {
            micros_per_frame: roundf(1_000_000.0 / fps) as u32,
            start_time_ms,
        }
    }

    /// Compute the pair of adjacent logical frames whose ideal timestamps
    /// bracket `now_ms`.
    ///
    /// Returns `(low, low + 1)`; a time before frame 0 clamps to `(0, 0)`.
    pub fn get_interval_frames(&self, now_ms: u32) -> (u32, u32) {
        if now_ms < self.start_time_ms {
            return (0, 0);
        }
        let elapsed_us = u64::from(now_ms - self.start_time_ms) * 1000;
        let low = elapsed_us / u64::from(self.micros_per_frame);
        let Ok(low) = u32::try_from(low) else {
            return (u32::MAX - 1, u32::MAX);
        };
        (low, low.saturating_add(1))
    }

    /// Ideal timestamp of a logical frame, rounded to whole milliseconds.
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_exact_timestamp_ms(&self, frame_number: u32) -> u32 {
        let us = u64::from(frame_number) * u64::from(self.micros_per_frame);
        let ms = u32::try_from((us + 500) / 1000).unwrap_or(u32::MAX);
        self.start_time_ms.saturating_add(ms)
    }

    /// Ideal frame interval in microseconds.
    pub const fn micros_per_frame(&self) -> u32 {
        self.micros_per_frame
    }
}
