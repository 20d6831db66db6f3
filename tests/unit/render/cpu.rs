use super::*;
use crate::animation::driver::Frame;
use crate::foundation::core::FrameIndex;
use crate::scene::geometry::compute;
use crate::scene::props::SceneParams;

fn small_canvas() -> Canvas {
    Canvas {
        width: 192,
        height: 64,
    }
}

fn quarter_turn() -> SceneGeometry {
    compute(
        &SceneParams::default(),
        &Frame {
            index: FrameIndex(0),
            phase: std::f64::consts::FRAC_PI_2,
            changed: false,
        },
    )
}

#[test]
fn view_transform_maps_corners_with_y_up() {
    let canvas = Canvas {
        width: 300,
        height: 100,
    };
    let t = view_transform(canvas, Rect::new(0.0, 0.0, 3.0, 1.0));
    let top_left = t * Point::new(0.0, 1.0);
    let bottom_right = t * Point::new(3.0, 0.0);
    assert!((top_left.x).abs() < 1e-9 && (top_left.y).abs() < 1e-9);
    assert!((bottom_right.x - 300.0).abs() < 1e-9);
    assert!((bottom_right.y - 100.0).abs() < 1e-9);
}

#[test]
fn view_transform_centers_letterboxed_view() {
    let canvas = Canvas {
        width: 200,
        height: 100,
    };
    // Square view in a 2:1 canvas: scale 100, 50px bars left and right.
    let t = view_transform(canvas, Rect::new(-1.0, -1.0, 1.0, 1.0));
    let origin = t * Point::ZERO;
    assert!((origin.x - 100.0).abs() < 1e-9);
    assert!((origin.y - 50.0).abs() < 1e-9);
    let left = t * Point::new(-1.0, 0.0);
    assert!((left.x - 50.0).abs() < 1e-9);
}

#[test]
fn rejects_empty_canvas() {
    assert!(
        CpuRasterizer::new(Canvas {
            width: 0,
            height: 10
        })
        .is_err()
    );
}

#[test]
fn render_clears_background_and_draws_scene() {
    let mut r = CpuRasterizer::new(small_canvas()).unwrap();
    let frame = r.render(&quarter_turn()).unwrap();
    assert_eq!(frame.width, 192);
    assert_eq!(frame.height, 64);
    assert_eq!(frame.data.len(), 192 * 64 * 4);

    let bg = style::BACKGROUND.to_array();
    assert_eq!(frame.pixel(0, 0), Some(bg));
    assert_eq!(frame.pixel(191, 0), Some(bg));
    assert_eq!(frame.pixel(192, 0), None);

    let drawn = frame
        .data
        .chunks_exact(4)
        .filter(|px| *px != bg.as_slice())
        .count();
    assert!(drawn > 100);
}

#[test]
fn period_wave_is_blue_near_the_point() {
    let scene = quarter_turn();
    let mut r = CpuRasterizer::new(small_canvas()).unwrap();
    let frame = r.render(&scene).unwrap();

    let p = r.to_pixels() * scene.point;
    let px = frame
        .pixel(p.x.floor() as u32 - 2, p.y.floor() as u32)
        .unwrap();
    assert!(u16::from(px[2]) > u16::from(px[0]) + 100, "{px:?}");
}

#[test]
fn render_is_deterministic_and_reuses_buffers() {
    let scene = quarter_turn();
    let mut r = CpuRasterizer::new(small_canvas()).unwrap();
    let a = r.render(&scene).unwrap();
    let b = r.render(&scene).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 0, 128, 128, 10, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 255, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[0, 0, 0, 0]);
}
