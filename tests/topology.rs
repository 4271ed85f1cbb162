mod common;

mod tests {
    use saber_strip::config::{BACKGROUND, NUM_PIXELS, PIXEL_ORDER};
    use saber_strip::{Color, PixelOrder, Rgb, Strip, TopologyError};

    use super::common::{Event, RecordingOutput};

    #[test]
    fn test_default_order_is_bijection() {
        let mut hits = [0; NUM_PIXELS];
        for logical in 0..NUM_PIXELS {
            let physical = PIXEL_ORDER.physical(logical).unwrap();
            hits[physical] += 1;
        }
        assert_eq!(hits, [1; NUM_PIXELS]);
        assert_eq!(PIXEL_ORDER.physical(0), Some(9));
        assert_eq!(PIXEL_ORDER.physical(12), Some(2));
        assert_eq!(PIXEL_ORDER.physical(NUM_PIXELS), None);
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            PixelOrder::new([0, 1, 1, 3]),
            Err(TopologyError::Duplicate { physical: 1 })
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            PixelOrder::new([0, 4, 1, 2]),
            Err(TopologyError::OutOfRange {
                logical: 1,
                physical: 4
            })
        );
    }

    #[test]
    fn test_identity() {
        let order = PixelOrder::<5>::identity();
        assert_eq!(order.as_array(), &[0, 1, 2, 3, 4]);
        assert_eq!(PixelOrder::new([0, 1, 2, 3, 4]), Ok(order));
    }

    #[test]
    fn test_strip_maps_and_drops() {
        let mut strip = Strip::new(RecordingOutput::new(NUM_PIXELS), PIXEL_ORDER);
        assert!(strip.set(0, BACKGROUND));
        assert!(!strip.set(NUM_PIXELS, BACKGROUND));
        assert_eq!(
            strip.output().events,
            [Event::Set(9, Rgb::new(245, 255, 200))]
        );

        strip.fill(Color::OFF);
        strip.flush();
        assert_eq!(strip.output().writes(), 1 + NUM_PIXELS);
        assert_eq!(strip.output().flushes(), 1);
    }
}
