#![no_std]

pub mod color;
pub mod control;
pub mod frame;
pub mod latch;
pub mod signal;
pub mod timebase;

pub use color::{OFF, Rgbw, rgbw, white};
pub use control::{DimmerLoop, FADE_LED, FADE_PERIOD, REFRESH_INTERVAL};
pub use frame::{Frame, FrameError};
pub use latch::SampleLatch;
pub use signal::{BitBangLine, Pulse, PulseLine, transmit};
pub use timebase::TimeBase;

pub use embassy_time::Duration;
