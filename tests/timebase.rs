mod tests {
    use std::thread;
    use std::time::Duration as StdDuration;

    use embassy_time::Duration;
    use rgbw_dimmer::timebase::TimeBase;

    #[test]
    fn test_delay_zero_needs_no_ticks() {
        let timebase = TimeBase::new();
        // No tick will ever fire here; a zero delay must still return.
        timebase.delay(Duration::from_millis(0));
        assert_eq!(timebase.now(), 0);
    }

    #[test]
    fn test_tick_advances_uptime() {
        let timebase = TimeBase::new();
        assert_eq!(timebase.now(), 0);
        for _ in 0..5 {
            timebase.tick();
        }
        assert_eq!(timebase.now(), 5);
    }

    #[test]
    fn test_delay_completes_after_enough_ticks() {
        static TIMEBASE: TimeBase = TimeBase::new();

        let ticker = thread::spawn(|| {
            for _ in 0..50 {
                thread::sleep(StdDuration::from_millis(1));
                TIMEBASE.tick();
            }
        });

        TIMEBASE.delay(Duration::from_millis(5));
        // The delay may only complete once at least five ticks have landed.
        assert!(TIMEBASE.now() >= 5);
        ticker.join().unwrap();
    }

    #[test]
    fn test_tick_at_max_resets_to_zero() {
        let timebase = TimeBase::starting_at(u32::MAX);
        timebase.tick();
        assert_eq!(timebase.now(), 0);
        timebase.tick();
        assert_eq!(timebase.now(), 1);
    }

    #[test]
    fn test_delay_spanning_wrap_terminates() {
        static TIMEBASE: TimeBase = TimeBase::starting_at(u32::MAX - 2);

        let ticker = thread::spawn(|| {
            for _ in 0..10 {
                thread::sleep(StdDuration::from_millis(1));
                TIMEBASE.tick();
            }
        });

        // The deadline saturates near the wrap point; the reset policy must
        // release the delay instead of leaving it comparing across the wrap.
        TIMEBASE.delay(Duration::from_millis(1000));
        ticker.join().unwrap();
        assert!(TIMEBASE.now() <= 10);
    }
}
