//! Pulse capture and decoding for host-side validation.
//!
//! [`PulseRecorder`] stands in for the hardware data line and records the
//! emitted pulse train into a fixed-capacity buffer. [`PulseRecorder::decode`]
//! reads the train back the way a logic analyzer trace would be read:
//! classify each pulse by its widths, rebuild the channel bytes, and check
//! the latch gap.

use heapless::Vec;

use super::{Pulse, PulseLine, RESET_NS, T0H_NS, T0L_NS, T1H_NS, T1L_NS, TOLERANCE_NS};
use crate::color::{Rgbw, rgbw};

/// One recorded event on the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// One high/low cycle.
    Pulse(Pulse),
    /// Line held low for the given number of nanoseconds.
    Rest(u32),
}

/// Why a recorded pulse train could not be decoded into a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The capture buffer overflowed while recording.
    Overflow,
    /// A pulse's widths matched neither bit shape within tolerance.
    AmbiguousPulse(Pulse),
    /// The train did not end in a rest; the strip would never latch.
    MissingResetGap,
    /// The final low gap is shorter than the strip's latch threshold.
    ShortResetGap(u32),
    /// A rest appeared in the middle of the frame.
    MidFrameRest(u32),
    /// The train does not carry exactly the expected number of bits.
    LengthMismatch {
        /// Number of pulses a full frame requires.
        expected: usize,
        /// Number of pulses recorded.
        actual: usize,
    },
}

/// Bits per LED on the wire (four 8-bit channels).
pub const BITS_PER_LED: usize = 32;

/// [`PulseLine`] sink that records instead of toggling a pin.
pub struct PulseRecorder<const CAP: usize> {
    events: Vec<LineEvent, CAP>,
    overflowed: bool,
}

impl<const CAP: usize> PulseRecorder<CAP> {
    /// Create an empty recorder.
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            overflowed: false,
        }
    }

    /// Everything recorded so far, in emission order.
    pub fn events(&self) -> &[LineEvent] {
        &self.events
    }

    /// Discard the recording and start over.
    pub fn clear(&mut self) {
        self.events.clear();
        self.overflowed = false;
    }

    fn push(&mut self, event: LineEvent) {
        if self.events.push(event).is_err() {
            self.overflowed = true;
        }
    }

    /// Reconstruct the frame carried by the recorded train.
    ///
    /// Expects exactly `N` LEDs worth of pulses followed by a single rest of
    /// at least [`RESET_NS`]. Channel bytes come back in wire order
    /// (G, R, B, W, most significant bit first) and are reassembled into
    /// [`Rgbw`] values.
    pub fn decode<const N: usize>(&self) -> Result<[Rgbw; N], DecodeError> {
        if self.overflowed {
            return Err(DecodeError::Overflow);
        }

        let Some((last, body)) = self.events.split_last() else {
            return Err(DecodeError::MissingResetGap);
        };
        let gap_ns = match *last {
            LineEvent::Rest(ns) => ns,
            LineEvent::Pulse(_) => return Err(DecodeError::MissingResetGap),
        };
        if gap_ns < RESET_NS {
            return Err(DecodeError::ShortResetGap(gap_ns));
        }

        let expected = N * BITS_PER_LED;
        if body.len() != expected {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: body.len(),
            });
        }

        let mut frame = [rgbw(0, 0, 0, 0); N];
        let mut channels = [0_u8; 4];
        for (led, events) in body.chunks(BITS_PER_LED).enumerate() {
            for (channel, bits) in events.chunks(8).enumerate() {
                let mut byte = 0_u8;
                for event in bits {
                    let pulse = match *event {
                        LineEvent::Pulse(pulse) => pulse,
                        LineEvent::Rest(ns) => return Err(DecodeError::MidFrameRest(ns)),
                    };
                    byte = (byte << 1) | u8::from(classify(pulse)?);
                }
                channels[channel] = byte;
            }
            let [g, r, b, w] = channels;
            frame[led] = rgbw(r, g, b, w);
        }
        Ok(frame)
    }
}

impl<const CAP: usize> Default for PulseRecorder<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> PulseLine for PulseRecorder<CAP> {
    fn pulse(&mut self, pulse: Pulse) {
        self.push(LineEvent::Pulse(pulse));
    }

    fn rest(&mut self, ns: u32) {
        self.push(LineEvent::Rest(ns));
    }
}

fn within(actual_ns: u32, nominal_ns: u32) -> bool {
    actual_ns.abs_diff(nominal_ns) <= TOLERANCE_NS
}

/// Classify a pulse as a `1` or `0` bit by its duty cycle.
fn classify(pulse: Pulse) -> Result<bool, DecodeError> {
    if within(pulse.high_ns, T1H_NS) && within(pulse.low_ns, T1L_NS) {
        return Ok(true);
    }
    if within(pulse.high_ns, T0H_NS) && within(pulse.low_ns, T0L_NS) {
        return Ok(false);
    }
    Err(DecodeError::AmbiguousPulse(pulse))
}
