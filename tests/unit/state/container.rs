use super::*;

fn freq_state() -> State<&'static str, f64> {
    let mut s = State::new();
    s.define([("freq", 1.0)]);
    s
}

#[test]
fn define_set_acknowledge_reset_walkthrough() {
    let mut s = freq_state();

    s.set("freq", 2.0);
    assert_eq!(*s.get(&"freq").unwrap(), 2.0);
    assert!(s.has_changed());

    s.acknowledge();
    assert!(!s.has_changed());

    s.reset();
    assert_eq!(*s.get(&"freq").unwrap(), 1.0);
}

#[test]
fn new_container_is_clean_and_seeded_container_is_modified() {
    let empty: State<&str, f64> = State::new();
    assert!(!empty.has_changed());

    let seeded = State::with_defaults([("freq", 1.0)]);
    assert!(seeded.has_changed());
    assert_eq!(seeded.initial().get("freq"), Some(&1.0));
}

#[test]
fn define_marks_modified_even_when_values_match() {
    let mut s = freq_state();
    s.acknowledge();
    s.define([("freq", 1.0)]);
    assert!(s.has_changed());
}

#[test]
fn define_merges_incrementally() {
    let mut s = freq_state();
    let all = s.define([("amp", 0.5)]).clone();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get("freq"), Some(&1.0));
    assert_eq!(all.get("amp"), Some(&0.5));
    assert_eq!(s.initial().len(), 2);
}

#[test]
fn get_unknown_key_fails() {
    let s = freq_state();
    let err = s.get(&"phase").unwrap_err();
    assert!(matches!(err, PhasorError::KeyNotFound(ref k) if k.contains("phase")));
}

#[test]
fn get_all_is_an_independent_copy() {
    let s = freq_state();
    let mut copy = s.get_all();
    copy.insert("freq", 9.0);
    copy.insert("extra", 1.0);
    assert_eq!(*s.get(&"freq").unwrap(), 1.0);
    assert!(!s.contains_key(&"extra"));
}

#[test]
fn writing_same_value_after_sync_is_not_a_change() {
    let mut s = freq_state();
    s.acknowledge();
    s.set("freq", 1.0);
    assert!(!s.has_changed());
}

#[test]
fn later_unchanged_write_clears_flag() {
    let mut s = freq_state();
    s.set("freq", 2.0);
    assert!(s.has_changed());
    // Previous snapshot was synced by the first write, so this one compares equal.
    s.set("freq", 2.0);
    assert!(!s.has_changed());
}

#[test]
fn empty_set_multiple_keeps_values_and_reports_no_change() {
    let mut s = freq_state();
    s.set("freq", 3.0);
    let before = s.get_all();
    s.set_multiple(std::iter::empty());
    assert_eq!(s.get_all(), before);
    assert!(!s.has_changed());
}

#[test]
fn set_multiple_compares_whole_mapping() {
    let mut s = State::with_defaults([("freq", 1.0), ("amp", 1.0)]);
    s.acknowledge();
    s.set_multiple([("freq", 1.0), ("amp", 2.0)]);
    assert!(s.has_changed());
    assert_eq!(s.get_all().len(), 2);
}

#[test]
fn acknowledge_leaves_values_untouched() {
    let mut s = freq_state();
    s.set("freq", 4.0);
    let before = s.get_all();
    let after = s.acknowledge().clone();
    assert_eq!(before, after);
    assert!(!s.has_changed());
}

#[test]
fn reset_restores_initial_regardless_of_history() {
    let mut s = State::with_defaults([("freq", 1.0), ("amp", 1.0)]);
    s.set("freq", 2.0);
    s.set_multiple([("amp", -1.5), ("freq", 0.5)]);
    s.reset();
    assert_eq!(&s.get_all(), s.initial());
}

#[test]
fn reset_keeps_flag_and_previous_snapshot() {
    let mut s = freq_state();
    s.set("freq", 2.0);
    s.acknowledge();

    s.reset();
    // Flag is untouched by reset.
    assert!(!s.has_changed());

    // Previous still holds 2.0, so writing it back is not seen as a change...
    s.set("freq", 2.0);
    assert!(!s.has_changed());

    // ...while writing the initial value back is.
    s.reset();
    s.set("freq", 1.0);
    assert!(s.has_changed());
}

#[test]
fn reset_does_not_clear_a_pending_change() {
    let mut s = freq_state();
    s.set("freq", 2.0);
    s.reset();
    assert!(s.has_changed());
    assert_eq!(*s.get(&"freq").unwrap(), 1.0);
}
