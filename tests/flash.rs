mod common;

mod tests {
    use saber_strip::config::{FLASH, NUM_PIXELS};
    use saber_strip::{Duration, FlashConfig, FlashReport, PixelOrder, Rgb, SaberFlash, Strip};

    use super::common::{Event, ManualClock, RecordingOutput, ScriptedRandom};

    const FLASH_RGB: Rgb = Rgb { r: 120, g: 127, b: 0 };
    const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const UNTOUCHED: Rgb = Rgb { r: 1, g: 2, b: 3 };

    fn strip() -> Strip<RecordingOutput, NUM_PIXELS> {
        let mut output = RecordingOutput::new(NUM_PIXELS);
        output.pixels.fill(UNTOUCHED);
        Strip::new(output, PixelOrder::identity())
    }

    #[test]
    fn test_burst_pairs_and_off_state() {
        let flash = SaberFlash::new(FLASH);
        let mut strip = strip();
        let mut clock = ManualClock::new();
        let mut rng = ScriptedRandom::new(
            &[6, 4, 3, 3, 4, 3],
            &[100.0, 4999.0, 250.5, 250.5, 100.0, 100.0, 100.0, 100.0],
        );

        let report = flash.run(&mut strip, &mut rng, &mut clock);
        assert_eq!(report, FlashReport { start: 6, flashes: 4 });
        assert!(rng.is_exhausted());

        // One pause after each on phase and each off phase
        assert_eq!(clock.sleeps.len(), 2 * report.flashes as usize);
        assert_eq!(clock.sleeps[0], Duration::from_micros(100));
        assert_eq!(clock.sleeps[1], Duration::from_micros(4999));
        assert_eq!(clock.sleeps[2], Duration::from_micros(250));

        // Every write is shown right away
        let output = strip.output();
        assert_eq!(output.writes(), output.flushes());
        assert_eq!(output.writes(), 2 * (7 + 7 + 9 + 7));
        assert_eq!(output.events[0], Event::Set(3, FLASH_RGB));
        assert_eq!(output.events[1], Event::Flush);
        assert_eq!(output.events[14], Event::Set(3, OFF));

        for (index, pixel) in output.pixels.iter().enumerate() {
            if (2..=10).contains(&index) {
                assert_eq!(*pixel, OFF, "pixel {index}");
            } else {
                assert_eq!(*pixel, UNTOUCHED, "pixel {index}");
            }
        }
    }

    #[test]
    fn test_spread_is_clipped_to_strip() {
        let config = FlashConfig {
            min_flashes: 1,
            max_flashes: 1,
            ..FLASH
        };
        let flash = SaberFlash::new(config);

        for (start, touched) in [(0, 0..=3), (12, 9..=12)] {
            let mut strip = strip();
            let mut clock = ManualClock::new();
            let mut rng = ScriptedRandom::new(&[start, 1, 3], &[100.0, 100.0]);
            flash.run(&mut strip, &mut rng, &mut clock);

            let output = strip.output();
            assert_eq!(output.writes(), 2 * 4);
            for event in &output.events {
                if let Event::Set(index, _) = event {
                    assert!(touched.contains(index));
                }
            }
        }
    }

    #[test]
    fn test_trigger_chance() {
        let flash = SaberFlash::new(FLASH);
        assert!(flash.triggers(&mut ScriptedRandom::new(&[1], &[])));
        assert!(flash.triggers(&mut ScriptedRandom::new(&[2], &[])));
        assert!(!flash.triggers(&mut ScriptedRandom::new(&[3], &[])));
        assert!(!flash.triggers(&mut ScriptedRandom::new(&[1000], &[])));
    }

    #[test]
    fn test_disabled_flash_draws_nothing() {
        let flash = SaberFlash::new(FlashConfig {
            enabled: false,
            ..FLASH
        });
        let mut rng = ScriptedRandom::default();
        assert!(!flash.triggers(&mut rng));
    }
}
