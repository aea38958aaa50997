//! Millisecond time base driven by a periodic hardware interrupt.
//!
//! [`TimeBase::tick`] is called from the 1 ms timer interrupt; [`TimeBase::delay`]
//! busy-waits on the counter it maintains. The design is cooperative: there is
//! no scheduler to yield to, so a delay only makes progress while the interrupt
//! keeps firing. Calling `delay` with interrupts globally disabled never returns.

use core::cell::Cell;
use core::hint;

use critical_section::Mutex;
use embassy_time::Duration;

/// Period of the hardware interrupt feeding [`TimeBase::tick`].
pub const TICK_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy)]
struct TimeState {
    uptime_ms: u32,
    deadline_ms: u32,
}

/// Monotonic millisecond counter with a blocking delay.
///
/// Declare one as a `static` shared between the timer interrupt handler
/// (which calls [`tick`](Self::tick)) and the control loop (which calls
/// [`delay`](Self::delay)). The delay has no cancellation; the control loop
/// is its only caller and has no competing work.
pub struct TimeBase {
    state: Mutex<Cell<TimeState>>,
}

impl TimeBase {
    /// Create a time base at uptime zero.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a time base with a preset uptime value.
    pub const fn starting_at(uptime_ms: u32) -> Self {
        Self {
            state: Mutex::new(Cell::new(TimeState {
                uptime_ms,
                deadline_ms: 0,
            })),
        }
    }

    /// Advance the counter by one millisecond.
    ///
    /// Call exactly once per hardware period from the timer interrupt. At
    /// `u32::MAX` the counter resets to zero together with any pending
    /// deadline, so a delay that began before the wrap terminates instead of
    /// comparing across it.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            if state.uptime_ms == u32::MAX {
                state.uptime_ms = 0;
                state.deadline_ms = 0;
            } else {
                state.uptime_ms += 1;
            }
            cell.set(state);
        });
    }

    /// Current uptime in milliseconds.
    pub fn now(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow(cs).get().uptime_ms)
    }

    /// Block until `duration` has elapsed.
    ///
    /// Pure busy-wait: records `uptime + duration` as the deadline, then
    /// spins until the tick interrupt has advanced the counter there. A zero
    /// duration returns without requiring any tick. The stored deadline is
    /// re-read every spin so the wrap reset in [`tick`](Self::tick) releases
    /// an in-flight delay.
    #[allow(clippy::cast_possible_truncation)]
    pub fn delay(&self, duration: Duration) {
        let wait_ms = duration.as_millis().min(u64::from(u32::MAX)) as u32;
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.deadline_ms = state.uptime_ms.saturating_add(wait_ms);
            cell.set(state);
        });

        loop {
            let done = critical_section::with(|cs| {
                let state = self.state.borrow(cs).get();
                state.uptime_ms >= state.deadline_ms
            });
            if done {
                return;
            }
            hint::spin_loop();
        }
    }
}

impl Default for TimeBase {
    fn default() -> Self {
        Self::new()
    }
}
