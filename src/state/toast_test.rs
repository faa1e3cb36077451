use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "first", None);
    let b = state.push(ToastLevel::Error, "second", None);
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "keep", None);
    let b = state.push(ToastLevel::Error, "drop", None);
    state.dismiss(b);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, a);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Info, "only", None);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_preserves_description() {
    let mut state = ToastState::default();
    state.push(
        ToastLevel::Error,
        "Invalid OTP",
        Some("Please check your email and try again.".to_owned()),
    );
    assert_eq!(
        state.items[0].description.as_deref(),
        Some("Please check your email and try again.")
    );
}
