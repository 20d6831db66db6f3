use super::*;

fn shared() -> SharedState<SceneProp, SceneValue> {
    let s = SharedState::new(SceneParams::default().into_state());
    s.acknowledge();
    s
}

#[test]
fn defaults_are_valid() {
    Controls::default().validate().unwrap();
}

#[test]
fn apply_writes_all_values_and_flags_change() {
    let state = shared();
    let c = Controls {
        trig_function: TrigFunction::Cosine,
        frequency: 2.0,
        ..Controls::default()
    };
    let all = c.apply(&state).unwrap();
    assert_eq!(all.len(), 5);
    assert!(state.has_changed());

    let p = SceneParams::from_values(&state.get_all()).unwrap();
    assert_eq!(p.trig_function, TrigFunction::Cosine);
    assert_eq!(p.horizontal_scalar, 2.0);
}

#[test]
fn applying_identical_controls_is_not_a_change() {
    let state = shared();
    Controls::default().apply(&state).unwrap();
    assert!(!state.has_changed());
}

#[test]
fn out_of_range_controls_are_rejected_without_writing() {
    let state = shared();
    for c in [
        Controls {
            frequency: 0.0,
            ..Controls::default()
        },
        Controls {
            amplitude: 2.5,
            ..Controls::default()
        },
        Controls {
            phase_shift: f64::NAN,
            ..Controls::default()
        },
    ] {
        assert!(matches!(
            c.apply(&state).unwrap_err(),
            PhasorError::Validation(_)
        ));
    }
    assert!(!state.has_changed());
}

#[test]
fn snapped_clamps_and_rounds_to_step() {
    let c = Controls {
        trig_function: TrigFunction::Sine,
        phase_shift: 0.123,
        vertical_shift: -9.0,
        frequency: 0.1,
        amplitude: 1.99,
    }
    .snapped();
    assert!((c.phase_shift - 0.1).abs() < 1e-9);
    assert_eq!(c.vertical_shift, -2.0);
    assert_eq!(c.frequency, 0.5);
    assert!((c.amplitude - 2.0).abs() < 1e-9);
    c.validate().unwrap();
}

#[test]
fn apply_stores_values_on_the_slider_grid() {
    let state = shared();
    Controls {
        phase_shift: 0.3,
        vertical_shift: -1.234,
        frequency: 1.07,
        ..Controls::default()
    }
    .apply(&state)
    .unwrap();

    let p = SceneParams::from_values(&state.get_all()).unwrap();
    assert_eq!(p.phase_shift, 0.3);
    assert_eq!(p.vertical_shift, -1.25);
    assert_eq!(p.horizontal_scalar, 1.05);
}

#[test]
fn json_fields_default_individually() {
    let c: Controls = serde_json::from_str(r#"{ "frequency": 1.5 }"#).unwrap();
    assert_eq!(c.frequency, 1.5);
    assert_eq!(c.trig_function, TrigFunction::Sine);
    assert!(serde_json::from_str::<Controls>(r#"{ "freq": 1.5 }"#).is_err());
}
