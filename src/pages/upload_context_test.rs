use super::*;

fn item(files: Option<u32>, chars: Option<u64>) -> ContextItem {
    ContextItem {
        id: "ctx-1".to_owned(),
        context_name: "Docs".to_owned(),
        status: "ready".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        file_count: files,
        text_length: chars,
    }
}

#[test]
fn upload_ready_requires_name_and_a_source() {
    assert!(upload_ready("Docs", 1, ""));
    assert!(upload_ready("Docs", 0, "some text"));
    assert!(upload_ready("Docs", 2, "both"));
    assert!(!upload_ready("", 1, "text"));
    assert!(!upload_ready("   ", 1, "text"));
    assert!(!upload_ready("Docs", 0, ""));
    assert!(!upload_ready("Docs", 0, "   "));
}

#[test]
fn list_requests_a_single_page_of_fifty() {
    assert_eq!(
        crate::config::context_list_path(1, LIST_LIMIT),
        "/context?page=1&limit=50"
    );
}

#[test]
fn reload_after_leaving_the_page_is_a_no_op() {
    use crate::state::toast::ToastState;

    // A mutation can resolve after the user has navigated away. The page's
    // signals are disposed by then and the reload must bail out quietly.
    let owner = Owner::new();
    let (contexts, loading, toasts) = owner.with(|| {
        (
            RwSignal::new(Vec::<ContextItem>::new()),
            RwSignal::new(false),
            RwSignal::new(ToastState::default()),
        )
    });
    drop(owner);

    load_contexts(contexts, loading, toasts);
    assert_eq!(loading.try_get_untracked(), None);
}

#[test]
fn source_summary_prefers_combined_counts() {
    assert_eq!(source_summary(&item(Some(3), Some(120))), "3 file(s) + 120 chars");
    assert_eq!(source_summary(&item(Some(2), None)), "2 file(s)");
    assert_eq!(source_summary(&item(None, Some(500))), "500 chars of text");
    assert_eq!(source_summary(&item(None, None)), "empty");
    assert_eq!(source_summary(&item(Some(0), Some(0))), "empty");
}
