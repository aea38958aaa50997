mod tests {
    use rgbw_dimmer::color::{OFF, Rgbw, rgbw, white};
    use rgbw_dimmer::control::{DimmerLoop, FADE_LED, FADE_PERIOD};
    use rgbw_dimmer::latch::SampleLatch;
    use rgbw_dimmer::signal::capture::{BITS_PER_LED, PulseRecorder};
    use rgbw_dimmer::timebase::TimeBase;

    const N: usize = 8;
    const CAP: usize = N * BITS_PER_LED + 1;

    type TestLoop<'a> = DimmerLoop<'a, PulseRecorder<CAP>, N>;

    fn make_dimmer<'a>(timebase: &'a TimeBase, latch: &'a SampleLatch) -> TestLoop<'a> {
        DimmerLoop::new(PulseRecorder::new(), timebase, latch)
    }

    #[test]
    fn test_start_transmits_dark_frame() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        dimmer.start();
        let decoded: [Rgbw; N] = dimmer.line_mut().decode().unwrap();
        assert_eq!(decoded, [OFF; N]);
    }

    #[test]
    fn test_fade_wraps_after_its_period() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        dimmer.step();
        let first = white(dimmer.frame().get(FADE_LED).unwrap());
        assert_eq!(first, 1);

        for _ in 0..usize::from(FADE_PERIOD) {
            dimmer.step();
        }
        // 48 further increments land back on the same value.
        assert_eq!(white(dimmer.frame().get(FADE_LED).unwrap()), first);
    }

    #[test]
    fn test_fade_passes_through_zero() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        for _ in 0..usize::from(FADE_PERIOD) {
            dimmer.step();
        }
        // Step 48 is where the counter snaps back to zero.
        assert_eq!(white(dimmer.frame().get(FADE_LED).unwrap()), 0);
    }

    #[test]
    fn test_sample_lands_on_last_led_red_channel() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        latch.write(137);
        dimmer.step();
        assert_eq!(
            dimmer.frame().get(TestLoop::SAMPLE_LED).unwrap(),
            rgbw(137, 0, 0, 0)
        );

        // A fresh sample replaces the old one on the next iteration.
        latch.write(3);
        dimmer.step();
        assert_eq!(
            dimmer.frame().get(TestLoop::SAMPLE_LED).unwrap(),
            rgbw(3, 0, 0, 0)
        );
    }

    #[test]
    fn test_oversized_sample_saturates() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        latch.write(1023);
        dimmer.step();
        assert_eq!(
            dimmer.frame().get(TestLoop::SAMPLE_LED).unwrap(),
            rgbw(255, 0, 0, 0)
        );
    }

    #[test]
    fn test_step_transmits_current_frame() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        latch.write(200);
        dimmer.step();

        let decoded: [Rgbw; N] = dimmer.line_mut().decode().unwrap();
        assert_eq!(decoded[FADE_LED], rgbw(0, 0, 0, 1));
        assert_eq!(decoded[N - 1], rgbw(200, 0, 0, 0));
        for led in &decoded[1..N - 1] {
            assert_eq!(*led, OFF);
        }
    }

    #[test]
    fn test_untouched_leds_stay_dark_across_steps() {
        let timebase = TimeBase::new();
        let latch = SampleLatch::new();
        let mut dimmer = make_dimmer(&timebase, &latch);

        for _ in 0..10 {
            dimmer.line_mut().clear();
            dimmer.step();
        }
        let decoded: [Rgbw; N] = dimmer.line_mut().decode().unwrap();
        for led in &decoded[1..N - 1] {
            assert_eq!(*led, OFF);
        }
    }
}
