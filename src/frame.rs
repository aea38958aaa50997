//! Fixed-length frame buffer for the LED strip.
//!
//! One [`Rgbw`] entry per physical LED, in wire order. The buffer is owned
//! by the control loop and only borrowed read-only by the signal driver for
//! the duration of one transmission, so mutation and transmission can never
//! overlap.

use core::ops::{Deref, DerefMut};

use crate::color::{OFF, Rgbw};

/// Error returned for accesses past the end of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The index does not address a physical LED.
    IndexOutOfRange,
}

/// Fixed-size frame buffer, one color per LED.
///
/// `N` is the strip length, fixed at compile time. A fresh frame is all
/// dark; colors are replaced in place with no allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    leds: [Rgbw; N],
}

impl<const N: usize> Frame<N> {
    /// Number of LEDs in the strip.
    pub const LEN: usize = N;

    /// Create an all-dark frame.
    pub const fn new() -> Self {
        Self { leds: [OFF; N] }
    }

    /// Replace the color at `index`.
    ///
    /// On [`FrameError::IndexOutOfRange`] the buffer is left untouched.
    pub fn set(&mut self, index: usize, color: Rgbw) -> Result<(), FrameError> {
        if index >= N {
            return Err(FrameError::IndexOutOfRange);
        }
        self.leds[index] = color;
        Ok(())
    }

    /// Read the color at `index`.
    pub fn get(&self, index: usize) -> Result<Rgbw, FrameError> {
        if index >= N {
            return Err(FrameError::IndexOutOfRange);
        }
        Ok(self.leds[index])
    }

    /// Read-only view of the whole strip, in wire order.
    pub fn all(&self) -> &[Rgbw] {
        &self.leds
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgbw; N];

    fn deref(&self) -> &Self::Target {
        &self.leds
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.leds
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
