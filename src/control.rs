//! Steady-state control loop: merge the latest analog sample into the
//! frame, refresh the strip, sleep, repeat.
//!
//! There is one state and no exit condition; the firmware's only
//! "termination" is a hardware reset. The cycle body lives in
//! [`DimmerLoop::step`] so it can run on the host against a recording line.

use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::rgbw;
use crate::frame::Frame;
use crate::latch::SampleLatch;
use crate::signal::{self, PulseLine};
use crate::timebase::TimeBase;

/// Fade counter period: the white channel climbs 1..=47, snaps to 0, repeats.
pub const FADE_PERIOD: u8 = 48;

/// LED whose white channel carries the cosmetic fade.
pub const FADE_LED: usize = 0;

/// Delay between strip refreshes.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// The firmware's single steady-state cycle.
///
/// Owns the frame buffer exclusively. Each iteration reads the sample
/// latch, advances the fade, rewrites two fixed LEDs, pushes the frame out
/// over the line, and delays on the time base.
pub struct DimmerLoop<'a, L, const N: usize> {
    frame: Frame<N>,
    line: L,
    timebase: &'a TimeBase,
    samples: &'a SampleLatch,
    fade: u8,
}

impl<'a, L: PulseLine, const N: usize> DimmerLoop<'a, L, N> {
    /// LED whose red channel shows the analog sample.
    pub const SAMPLE_LED: usize = N - 1;

    /// Build the loop around the data line and the interrupt-fed state.
    pub fn new(line: L, timebase: &'a TimeBase, samples: &'a SampleLatch) -> Self {
        const { assert!(N > 0, "strip must have at least one LED") }
        Self {
            frame: Frame::new(),
            line,
            timebase,
            samples,
            fade: 0,
        }
    }

    /// Push one all-dark frame so the strip starts dark.
    pub fn start(&mut self) {
        self.frame = Frame::new();
        signal::transmit(self.frame.all(), &mut self.line);
        #[cfg(feature = "esp32-log")]
        println!("dimmer: strip dark, entering refresh cycle");
    }

    /// One iteration: read the latch, advance the fade, refresh the strip.
    ///
    /// The sample may be slightly stale relative to the converter; it is
    /// never torn. Values above 255 saturate the 8-bit red channel.
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self) {
        let sample = self.samples.read();

        self.fade = (self.fade + 1) % FADE_PERIOD;
        self.frame[FADE_LED] = rgbw(0, 0, 0, self.fade);
        self.frame[Self::SAMPLE_LED] = rgbw(sample.min(0xFF) as u8, 0, 0, 0);

        signal::transmit(self.frame.all(), &mut self.line);
    }

    /// Run forever at the configured refresh rate.
    ///
    /// Requires the tick interrupt to keep firing; the delay never
    /// completes otherwise.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.step();
            self.timebase.delay(REFRESH_INTERVAL);
        }
    }

    /// Current frame contents.
    pub fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    /// The data line the frames are pushed to.
    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }
}
