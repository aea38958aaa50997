//! One-wire signal encoding for SK6812-class RGBW strips.
//!
//! The strip has no clock line: every bit is a single high/low pulse whose
//! duty cycle tells a `1` from a `0`, and a long low gap makes the strip
//! latch and display the frame. This module turns a frame into that pulse
//! train through the [`PulseLine`] seam, so the encoder can be exercised on
//! the host while [`BitBangLine`] does the cycle-accurate pin work on
//! target.

pub mod capture;

use embedded_hal::digital::OutputPin;

use crate::color::Rgbw;

/// High time of a `0` bit, nanoseconds.
pub const T0H_NS: u32 = 400;
/// Low time of a `0` bit, nanoseconds.
pub const T0L_NS: u32 = 850;
/// High time of a `1` bit, nanoseconds.
pub const T1H_NS: u32 = 800;
/// Low time of a `1` bit, nanoseconds.
pub const T1L_NS: u32 = 450;
/// Line-low gap after a frame; the strip latches and restarts at LED 0.
pub const RESET_NS: u32 = 80_000;
/// Datasheet tolerance on pulse widths. The decoder classifies within it;
/// the hardware spin loop must stay inside it, which is why transmission
/// runs preemption-free.
pub const TOLERANCE_NS: u32 = 150;

/// One high-then-low cycle on the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    /// Time the line is held high, nanoseconds.
    pub high_ns: u32,
    /// Time the line is held low, nanoseconds.
    pub low_ns: u32,
}

/// Pulse shape of a `0` bit (short high, long low).
pub const ZERO: Pulse = Pulse {
    high_ns: T0H_NS,
    low_ns: T0L_NS,
};

/// Pulse shape of a `1` bit (long high, short low).
pub const ONE: Pulse = Pulse {
    high_ns: T1H_NS,
    low_ns: T1L_NS,
};

/// Sink for an encoded pulse train.
///
/// Implement this for the hardware data line. Implementations must
/// reproduce the requested timings faithfully; the encoder assumes the line
/// idles low between calls.
pub trait PulseLine {
    /// Drive the line high for `pulse.high_ns`, then low for `pulse.low_ns`.
    fn pulse(&mut self, pulse: Pulse);

    /// Hold the line low for `ns` nanoseconds.
    fn rest(&mut self, ns: u32);
}

/// Encode one channel byte, most significant bit first.
fn encode_byte(byte: u8, line: &mut impl PulseLine) {
    for bit in (0..8).rev() {
        line.pulse(if byte & (1 << bit) != 0 { ONE } else { ZERO });
    }
}

/// Encode one LED in wire channel order: G, R, B, W.
fn encode_color(color: Rgbw, line: &mut impl PulseLine) {
    for byte in [color.g, color.r, color.b, color.a.0] {
        encode_byte(byte, line);
    }
}

/// Transmit a whole frame followed by the reset gap.
///
/// Runs inside a critical section: an interrupt that stretched a pulse past
/// [`TOLERANCE_NS`] would show up as corrupted colors or flicker, so
/// preemption is excluded structurally rather than detected. Interrupts
/// that pend during the frame fire as soon as the gap is out. There is no
/// feedback channel from the strip, so nothing is returned.
pub fn transmit<L: PulseLine>(frame: &[Rgbw], line: &mut L) {
    critical_section::with(|_cs| {
        for color in frame {
            encode_color(*color, line);
        }
        line.rest(RESET_NS);
    });
}

/// Bit-bang adapter driving the strip's data pin directly.
///
/// `spin` must busy-wait the requested number of nanoseconds with
/// sub-microsecond accuracy — on a real target, a counted nop loop
/// calibrated against the CPU clock. Verify the resulting pulse widths with
/// a logic analyzer before trusting them; the constants in this module are
/// datasheet-nominal, not measured.
pub struct BitBangLine<P, F> {
    pin: P,
    spin: F,
}

impl<P: OutputPin, F: FnMut(u32)> BitBangLine<P, F> {
    /// Take ownership of the data pin and drive it low.
    pub fn new(mut pin: P, spin: F) -> Self {
        pin.set_low().ok();
        Self { pin, spin }
    }

    /// Release the data pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin, F: FnMut(u32)> PulseLine for BitBangLine<P, F> {
    fn pulse(&mut self, pulse: Pulse) {
        self.pin.set_high().ok();
        (self.spin)(pulse.high_ns);
        self.pin.set_low().ok();
        (self.spin)(pulse.low_ns);
    }

    fn rest(&mut self, ns: u32) {
        self.pin.set_low().ok();
        (self.spin)(ns);
    }
}
