//! RGBW color support.
//!
//! The strip's LEDs carry a dedicated white emitter next to the usual red,
//! green and blue dies, so every color is four 8-bit channels.

use smart_leds::{RGBW, White};

/// Four-channel color: red, green, blue plus a dedicated white emitter.
///
/// The `smart_leds` RGBW type stores the white channel in its alpha slot;
/// use [`rgbw`] and [`white`] instead of touching `a` directly.
pub type Rgbw = RGBW<u8>;

/// All channels off.
pub const OFF: Rgbw = rgbw(0, 0, 0, 0);

/// Build an [`Rgbw`] from its four channel values.
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Read the white channel of a color.
pub const fn white(color: Rgbw) -> u8 {
    color.a.0
}
