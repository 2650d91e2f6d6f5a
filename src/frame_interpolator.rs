//! Time-indexed interpolation over a bounded frame store.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::frame::{Frame, FrameRef};
use crate::frame_tracker::FrameTracker;
use crate::math8::progress8;
use crate::sorted_map::SortedVecMap;

/// Holds onto frames and allows interpolation between them.
///
/// Lets an animation pipeline push finished frames at whatever rate they
/// arrive, while the render loop queries pixel data at an adjustable time
/// that may pause or go backward. The store is bounded: inserting past
/// capacity is rejected, and eviction is the producer's explicit call via
/// [`erase`](Self::erase).
pub struct FrameInterpolator {
    frames: SortedVecMap<u32, FrameRef>,
    tracker: FrameTracker,
}

impl FrameInterpolator {
    /// Create an interpolator holding at most `capacity` frames, for video
    /// produced at `fps` frames per second.
    pub fn new(capacity: usize, fps: f32) -> Self {
        Self::with_tracker(capacity, FrameTracker::new(fps))
    }

    /// Create an interpolator with a preconfigured tracker (custom epoch).
    pub fn with_tracker(capacity: usize, tracker: FrameTracker) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            frames: SortedVecMap::with_capacity(capacity),
            tracker,
        }
    }

    /// Store a frame under its logical frame number.
    ///
    /// Returns false when the store is full or the frame number is already
    /// present; the store is unchanged in both cases.
    pub fn insert(&mut self, frame_number: u32, frame: FrameRef) -> bool {
        let inserted = self.frames.insert(frame_number, frame);
        #[cfg(feature = "esp32-log")]
        if !inserted {
            println!("frame {} rejected: store full or duplicate", frame_number);
        }
        inserted
    }

    /// Remove a frame, returning its handle.
    pub fn erase(&mut self, frame_number: u32) -> Option<FrameRef> {
        self.frames.remove(&frame_number)
    }

    /// Drop all stored frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn has(&self, frame_number: u32) -> bool {
        self.frames.contains(&frame_number)
    }

    /// Get a handle to a stored frame.
    pub fn get(&self, frame_number: u32) -> Option<FrameRef> {
        self.frames.get(&frame_number).cloned()
    }

    /// Read access to the underlying frame store.
    pub fn frames(&self) -> &SortedVecMap<u32, FrameRef> {
        &self.frames
    }

    /// Report whether the producer should generate more frames for `now`.
    ///
    /// Returns the bracketing frame numbers for `now` along with a flag that
    /// is true iff either of them is absent from the store. The numbers are
    /// computed regardless of the flag.
    pub fn needs_frame(&self, now: u32) -> (u32, u32, bool) {
        let (current, next) = self.tracker.get_interval_frames(now);
        let missing = !self.has(current) || !self.has(next);
        (current, next, missing)
    }

    /// Highest stored frame number.
    pub fn newest_frame_number(&self) -> Option<u32> {
        self.frames.last().map(|(number, _)| *number)
    }

    /// Lowest stored frame number.
    pub fn oldest_frame_number(&self) -> Option<u32> {
        self.frames.first().map(|(number, _)| *number)
    }

    /// Ideal timestamp of a logical frame, in milliseconds.
    pub fn exact_timestamp_ms(&self, frame_number: u32) -> u32 {
        self.tracker.get_exact_timestamp_ms(frame_number)
    }

    pub fn tracker(&self) -> &FrameTracker {
        &self.tracker
    }

    /// Draw the frame for `adjustable_time` into a destination frame.
    ///
    /// The destination timestamp becomes `adjustable_time` when two frames
    /// were interpolated, and the selected frame's own timestamp when a
    /// single frame was copied. Returns false and leaves the destination
    /// untouched when no frame could be selected. The adjustable time may
    /// pause or go backward between calls.
    pub fn draw(&self, adjustable_time: u32, dst: &mut Frame) -> bool {
        let (leds, alpha) = dst.buffers_mut();
        let Some(timestamp) = self.draw_selected(adjustable_time, leds, alpha) else {
            return false;
        };
        dst.set_timestamp(timestamp);
        true
    }

    /// Draw the frame for `adjustable_time` into raw pixel buffers.
    ///
    /// Same selection semantics as [`draw`](Self::draw).
    pub fn draw_into(
        &self,
        adjustable_time: u32,
        leds: &mut [Rgb],
        alpha: Option<&mut [u8]>,
    ) -> bool {
        self.draw_selected(adjustable_time, leds, alpha).is_some()
    }

    /// Select the stored frames around `adjustable_time` and write the
    /// result. Returns the timestamp to record on the destination.
    fn draw_selected(
        &self,
        adjustable_time: u32,
        leds: &mut [Rgb],
        alpha: Option<&mut [u8]>,
    ) -> Option<u32> {
        let (low, high) = self.tracker.get_interval_frames(adjustable_time);
        if !self.has(low) && !self.has(high) {
            #[cfg(feature = "esp32-log")]
            println!(
                "draw {}: no frame in interval {}..={}",
                adjustable_time, low, high
            );
            return None;
        }

        // Widen to the stored frames bracketing the query time. Every stored
        // key <= low has an ideal timestamp at or before `adjustable_time`;
        // the upper search starts at `low` itself on an exact frame boundary
        // and at `high` otherwise.
        let lower = self.frames.last_at_or_before(&low);
        let upper_from = if self.tracker.get_exact_timestamp_ms(low) == adjustable_time {
            low
        } else {
            high
        };
        let upper = self.frames.first_at_or_after(&upper_from);

        match (lower, upper) {
            (Some((&from_number, from)), Some((&to_number, to))) if from_number != to_number => {
                let from_time = self.tracker.get_exact_timestamp_ms(from_number);
                let to_time = self.tracker.get_exact_timestamp_ms(to_number);
                let progress = progress8(
                    Duration::from_millis(u64::from(adjustable_time - from_time)),
                    Duration::from_millis(u64::from(to_time - from_time)),
                );
                Frame::interpolate(from, to, progress, leds, alpha);
                Some(adjustable_time)
            }
            (Some((_, frame)), _) | (None, Some((_, frame))) => {
                // Exact hit or a single available side: copy, keep the
                // frame's own recorded timestamp.
                frame.draw(leds, alpha);
                Some(frame.timestamp())
            }
            (None, None) => None,
        }
    }
}
