//! A single rendered LED frame and its shared-ownership handle.
//!
//! Frames are authored by the producer, wrapped in a [`FrameRef`] and handed
//! to the interpolator. Cloning a handle never copies pixel data, and stored
//! frames are never mutated after insertion: interpolation always writes into
//! a caller-supplied destination.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Rgb, blend_colors};
use crate::math8::blend8;

/// Alpha value used when a frame carries no alpha channel.
const OPAQUE: u8 = 255;

/// Shared-ownership handle to a frame.
pub type FrameRef = Rc<Frame>;

/// Fixed-size pixel buffer with an optional per-pixel alpha channel and a
/// millisecond timestamp label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Rgb>,
    alpha: Option<Vec<u8>>,
    timestamp: u32,
}

impl Frame {
    /// Create a black frame of `len` pixels without an alpha channel.
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Rgb::default(); len],
            alpha: None,
            timestamp: 0,
        }
    }

    /// Create a black frame of `len` pixels with a fully opaque alpha channel.
    pub fn with_alpha(len: usize) -> Self {
        Self {
            pixels: vec![Rgb::default(); len],
            alpha: Some(vec![OPAQUE; len]),
            timestamp: 0,
        }
    }

    /// Create a frame from existing pixel data.
    pub fn from_pixels(pixels: Vec<Rgb>) -> Self {
        Self {
            pixels,
            alpha: None,
            timestamp: 0,
        }
    }

    /// Create a frame from pixel data and a parallel alpha channel.
    ///
    /// The alpha channel must have the same length as the pixel data.
    pub fn with_alpha_channel(pixels: Vec<Rgb>, alpha: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            alpha.len(),
            "alpha channel length must match pixel length"
        );
        Self {
            pixels,
            alpha: Some(alpha),
            timestamp: 0,
        }
    }

    /// Wrap the frame into a shared handle.
    pub fn into_ref(self) -> FrameRef {
        Rc::new(self)
    }

    /// Number of pixels in the frame.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Timestamp label in milliseconds.
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    pub const fn set_timestamp(&mut self, timestamp: u32) {
        self.timestamp = timestamp;
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn alpha(&self) -> Option<&[u8]> {
        self.alpha.as_deref()
    }

    pub fn alpha_mut(&mut self) -> Option<&mut [u8]> {
        self.alpha.as_deref_mut()
    }

    /// Mutable access to the pixel and alpha buffers at once.
    pub fn buffers_mut(&mut self) -> (&mut [Rgb], Option<&mut [u8]>) {
        (&mut self.pixels, self.alpha.as_deref_mut())
    }

    pub const fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Fill every pixel with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Copy this frame into the destination buffers.
    ///
    /// Copies up to the shorter of source and destination. A missing source
    /// alpha channel reads as fully opaque.
    pub fn draw(&self, leds: &mut [Rgb], alpha: Option<&mut [u8]>) {
        let count = self.pixels.len().min(leds.len());
        leds[..count].copy_from_slice(&self.pixels[..count]);

        if let Some(alpha) = alpha {
            let count = count.min(alpha.len());
            match &self.alpha {
                Some(src) => alpha[..count].copy_from_slice(&src[..count]),
                None => alpha[..count].fill(OPAQUE),
            }
        }
    }

    /// Blend two frames into the destination buffers.
    ///
    /// Every channel is blended with [`blend8`] (exact at 0 and 255), so
    /// `amount_of_to == 0` reproduces `from` and `amount_of_to == 255`
    /// reproduces `to` without rounding drift.
    pub fn interpolate(
        from: &Frame,
        to: &Frame,
        amount_of_to: u8,
        leds: &mut [Rgb],
        alpha: Option<&mut [u8]>,
    ) {
        let count = from.len().min(to.len()).min(leds.len());
        for (i, led) in leds[..count].iter_mut().enumerate() {
            *led = blend_colors(from.pixels[i], to.pixels[i], amount_of_to);
        }

        if let Some(alpha) = alpha {
            let count = count.min(alpha.len());
            for (i, a) in alpha[..count].iter_mut().enumerate() {
                *a = blend8(from.alpha_at(i), to.alpha_at(i), amount_of_to);
            }
        }
    }

    fn alpha_at(&self, index: usize) -> u8 {
        self.alpha.as_ref().map_or(OPAQUE, |a| a[index])
    }
}
