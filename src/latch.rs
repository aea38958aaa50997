//! Single-slot sample latch between the ADC interrupt and the control loop.

use core::cell::Cell;

use critical_section::Mutex;

/// Latest-value latch written by the conversion-complete interrupt and read
/// by the control loop.
///
/// There is no queue: a sample that arrives before the previous one was read
/// simply replaces it, because the consumer only ever wants the newest
/// value. Reads do not consume. A slightly stale read is accepted; a torn
/// one is not, which the critical section guarantees on every target.
pub struct SampleLatch {
    value: Mutex<Cell<u16>>,
}

impl SampleLatch {
    /// Create an empty latch holding zero.
    pub const fn new() -> Self {
        Self {
            value: Mutex::new(Cell::new(0)),
        }
    }

    /// Interrupt side: unconditionally overwrite the latch.
    pub fn write(&self, sample: u16) {
        critical_section::with(|cs| self.value.borrow(cs).set(sample));
    }

    /// Loop side: read the most recent sample.
    pub fn read(&self) -> u16 {
        critical_section::with(|cs| self.value.borrow(cs).get())
    }
}

impl Default for SampleLatch {
    fn default() -> Self {
        Self::new()
    }
}
