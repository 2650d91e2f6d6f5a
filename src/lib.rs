#![no_std]

extern crate alloc;

pub mod color;
pub mod frame;
pub mod frame_interpolator;
pub mod frame_tracker;
pub mod math8;
pub mod sorted_map;

pub use color::{Rgb, blend_colors};
pub use frame::{Frame, FrameRef};
pub use frame_interpolator::FrameInterpolator;
pub use frame_tracker::FrameTracker;
pub use math8::{blend8, progress8};
pub use sorted_map::SortedVecMap;

pub use embassy_time::Duration;
