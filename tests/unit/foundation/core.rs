use super::*;

#[test]
fn fps_from_interval_matches_tick_rate() {
    let fps = Fps::from_interval_ms(50).unwrap();
    assert_eq!(fps.as_f64(), 20.0);
    assert!((fps.frames_to_secs(20) - 1.0).abs() < 1e-12);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(1, 0).is_err());
    assert!(Fps::from_interval_ms(0).is_err());
}

#[test]
fn canvas_validation_bounds() {
    assert!(Canvas::default().validate().is_ok());
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn rgba_from_hex_literal() {
    let c = Rgba8::opaque_hex(0x1b9ce5);
    assert_eq!(c.to_array(), [0x1b, 0x9c, 0xe5, 255]);
}
