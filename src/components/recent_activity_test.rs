use super::*;

#[test]
fn every_activity_row_is_renderable() {
    for item in recent_activities() {
        assert!(!item.title.is_empty());
        assert!(!item.description.is_empty());
        assert!(!item.time.is_empty());
        assert!(!kind_glyph(item.kind).is_empty());
    }
}

#[test]
fn conversation_rows_carry_the_customer_address() {
    for item in recent_activities() {
        if item.kind == ActivityKind::Conversation {
            assert!(item.user.is_some());
        }
    }
}
