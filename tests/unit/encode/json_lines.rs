use super::*;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::scene::geometry::compute;
use crate::scene::props::SceneParams;

fn push(sink: &mut JsonLinesSink<Vec<u8>>, i: u64, changed: bool) {
    let f = Frame {
        index: FrameIndex(i),
        phase: 0.5,
        changed,
    };
    sink.push_frame(&f, &compute(&SceneParams::default(), &f))
        .unwrap();
}

#[test]
fn writes_one_object_per_line() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.begin(&SinkConfig {
        canvas: Canvas::default(),
        fps: Fps::from_interval_ms(50).unwrap(),
    })
    .unwrap();
    push(&mut sink, 0, true);
    push(&mut sink, 1, false);
    sink.end().unwrap();
    assert_eq!(sink.written(), 2);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[0]["changed"], true);
    assert!(lines[0]["scene"]["title"].is_string());
    assert!(lines[0]["scene"]["full_wave"].is_array());

    assert_eq!(lines[1]["index"], 1);
    assert_eq!(lines[1]["time_s"], 0.05);
    assert!(lines[1]["scene"]["title"].is_null());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = JsonLinesSink::new(Vec::new());
    let f = Frame {
        index: FrameIndex(0),
        phase: 0.0,
        changed: false,
    };
    let err = sink
        .push_frame(&f, &compute(&SceneParams::default(), &f))
        .unwrap_err();
    assert!(matches!(err, PhasorError::Validation(_)));
}
