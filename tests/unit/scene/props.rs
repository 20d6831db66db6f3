use super::*;

#[test]
fn defaults_roundtrip_through_state() {
    let state = SceneParams::default().into_state();
    assert!(state.has_changed());
    let params = SceneParams::from_values(&state.get_all()).unwrap();
    assert_eq!(params, SceneParams::default());
}

#[test]
fn missing_property_is_key_not_found() {
    let mut values = SceneParams::default().into_state().get_all();
    values.remove(&SceneProp::VerticalShift);
    let err = SceneParams::from_values(&values).unwrap_err();
    assert!(matches!(err, PhasorError::KeyNotFound(ref k) if k == "VerticalShift"));
}

#[test]
fn wrong_variant_is_validation_error() {
    let mut values = SceneParams::default().into_state().get_all();
    values.insert(SceneProp::PhaseShift, SceneValue::Trig(TrigFunction::Cosine));
    assert!(matches!(
        SceneParams::from_values(&values).unwrap_err(),
        PhasorError::Validation(_)
    ));

    let mut values = SceneParams::default().into_state().get_all();
    values.insert(SceneProp::TrigFunction, SceneValue::Scalar(1.0));
    assert!(matches!(
        SceneParams::from_values(&values).unwrap_err(),
        PhasorError::Validation(_)
    ));
}

#[test]
fn title_shows_equation_and_period() {
    let p = SceneParams {
        trig_function: TrigFunction::Cosine,
        phase_shift: 0.5,
        vertical_shift: -1.0,
        horizontal_scalar: 2.0,
        vertical_scalar: 1.25,
    };
    assert_eq!(
        p.title(),
        "1.25 × cos(2.00 × (x - 0.50)) + -1.00; T = 2π/2.00"
    );
}

#[test]
fn scene_value_json_is_untagged() {
    let v: SceneValue = serde_json::from_str("\"cosine\"").unwrap();
    assert_eq!(v, SceneValue::Trig(TrigFunction::Cosine));
    let v: SceneValue = serde_json::from_str("1.5").unwrap();
    assert_eq!(v, SceneValue::Scalar(1.5));
    assert_eq!(v.as_scalar(), Some(1.5));
}

#[test]
fn prop_display_is_snake_case() {
    assert_eq!(SceneProp::HorizontalScalar.to_string(), "horizontal_scalar");
}
