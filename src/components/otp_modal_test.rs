use leptos::prelude::*;

use super::countdown_after_tick;

#[test]
fn countdown_ticks_down_by_one_second() {
    assert_eq!(countdown_after_tick(Some(60)), Some(59));
    assert_eq!(countdown_after_tick(Some(2)), Some(1));
}

#[test]
fn countdown_bottoms_out_at_zero() {
    assert_eq!(countdown_after_tick(Some(1)), Some(0));
    assert_eq!(countdown_after_tick(Some(0)), Some(0));
}

#[test]
fn countdown_stops_once_the_signal_is_gone() {
    assert_eq!(countdown_after_tick(None), None);
}

#[test]
fn disposed_signal_writes_are_no_ops() {
    // Modal-local signals die with the modal when the flow closes.
    // In-flight tasks must land on no-ops, not panics.
    let owner = Owner::new();
    let countdown = owner.with(|| RwSignal::new(60u32));
    drop(owner);

    assert_eq!(countdown.try_get_untracked(), None);
    assert!(countdown.try_set(10).is_some());
}
