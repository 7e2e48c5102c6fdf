//! Scroll State Store
//!
//! Uses Leptos reactive_stores so readers of one field are not woken by
//! writes to another: the header only cares about `past_header`, the
//! scroll-to-top button only about `past_top_button`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::scroll::{ScrollState, ScrollStateStoreFields};

/// Type alias for the store
pub type ScrollStore = Store<ScrollState>;

/// Get the scroll store from context
pub fn use_scroll_store() -> ScrollStore {
    expect_context::<ScrollStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fields written by one [`store_apply_scroll`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWrites {
    pub past_header: bool,
    pub past_top_button: bool,
    pub progress: bool,
}

/// Write a fresh sample, touching only the fields that changed
pub fn store_apply_scroll(store: &ScrollStore, next: ScrollState) -> ScrollWrites {
    let mut writes = ScrollWrites::default();
    let past_header = store.past_header();
    if past_header.get_untracked() != next.past_header {
        past_header.set(next.past_header);
        writes.past_header = true;
    }
    let past_top_button = store.past_top_button();
    if past_top_button.get_untracked() != next.past_top_button {
        past_top_button.set(next.past_top_button);
        writes.past_top_button = true;
    }
    let progress = store.progress();
    if progress.get_untracked() != next.progress {
        progress.set(next.progress);
        writes.progress = true;
    }
    writes
}

pub fn store_past_header(store: &ScrollStore) -> bool {
    store.past_header().get()
}

pub fn store_past_top_button(store: &ScrollStore) -> bool {
    store.past_top_button().get()
}

pub fn store_progress(store: &ScrollStore) -> f64 {
    store.progress().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(past_header: bool, past_top_button: bool, progress: f64) -> ScrollState {
        ScrollState { past_header, past_top_button, progress }
    }

    #[test]
    fn test_progress_only_change_leaves_flags_untouched() {
        let owner = Owner::new();
        owner.with(|| {
            let store: ScrollStore = Store::new(ScrollState::default());

            let writes = store_apply_scroll(&store, sample(false, false, 0.1));
            assert_eq!(writes, ScrollWrites { progress: true, ..ScrollWrites::default() });
            assert_eq!(store.progress().get_untracked(), 0.1);
            assert!(!store.past_header().get_untracked());

            // same sample again writes nothing
            assert_eq!(store_apply_scroll(&store, sample(false, false, 0.1)), ScrollWrites::default());
        });
    }

    #[test]
    fn test_thresholds_flip_independently_through_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store: ScrollStore = Store::new(ScrollState::default());

            // between the two thresholds
            let writes = store_apply_scroll(&store, sample(true, false, 0.2));
            assert!(writes.past_header);
            assert!(!writes.past_top_button);
            assert!(store.past_header().get_untracked());
            assert!(!store.past_top_button().get_untracked());

            // past both
            let writes = store_apply_scroll(&store, sample(true, true, 0.5));
            assert!(!writes.past_header);
            assert!(writes.past_top_button);

            // back under the button threshold only
            let writes = store_apply_scroll(&store, sample(true, false, 0.3));
            assert!(!writes.past_header);
            assert!(writes.past_top_button);
            assert!(store.past_header().get_untracked());
            assert!(!store.past_top_button().get_untracked());
        });
    }
}
