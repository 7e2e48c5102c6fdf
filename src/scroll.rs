//! Scroll Tracker
//!
//! Samples the window's scroll position on every scroll/resize event and
//! derives the header flag, the scroll-to-top flag and the document
//! progress ratio. Last value wins; handlers do O(1) work.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ScrollConfig;
use crate::lifecycle::MountGuard;
use crate::store::{store_apply_scroll, ScrollStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Store)]
pub struct ScrollState {
    pub past_header: bool,
    pub past_top_button: bool,
    /// Unsmoothed document scroll fraction in `[0, 1]`
    pub progress: f64,
}

/// Raw viewport measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// 0 when the document does not scroll
    pub fn progress_ratio(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable.is_nan() || scrollable <= 0.0 || !self.scroll_y.is_finite() {
            return 0.0;
        }
        (self.scroll_y / scrollable).clamp(0.0, 1.0)
    }

    pub fn state(&self, config: &ScrollConfig) -> ScrollState {
        ScrollState {
            past_header: self.scroll_y > config.header_threshold,
            past_top_button: self.scroll_y > config.top_button_threshold,
            progress: self.progress_ratio(),
        }
    }

    pub fn read() -> Option<Self> {
        let win = web_sys::window()?;
        let scroll_y = win.scroll_y().ok()?;
        let viewport_height = win.inner_height().ok()?.as_f64()?;
        let scroll_height = win.document()?.document_element()?.scroll_height() as f64;
        Some(Self { scroll_y, scroll_height, viewport_height })
    }
}

/// Keep `store` in sync with the window for the lifetime of the calling
/// component.
pub fn use_scroll_tracker(store: ScrollStore, config: ScrollConfig) {
    let guard = MountGuard::mounted();
    let sample = {
        let guard = guard.clone();
        move || {
            guard.run(|| {
                if let Some(metrics) = ScrollMetrics::read() {
                    let next = metrics.state(&config);
                    let writes = store_apply_scroll(&store, next);
                    if writes.past_header || writes.past_top_button {
                        log::debug!(
                            "[SCROLL] thresholds: header={} top_button={}",
                            next.past_header,
                            next.past_top_button
                        );
                    }
                }
            });
        }
    };
    sample();

    let on_scroll = window_event_listener(ev::scroll, {
        let sample = sample.clone();
        move |_| sample()
    });
    let on_resize = window_event_listener(ev::resize, move |_| sample());
    let handles = StoredValue::new_local(vec![on_scroll, on_resize]);
    log::debug!("[SCROLL] listeners attached");

    on_cleanup(move || {
        guard.unmount();
        handles.try_update_value(|hs| {
            for handle in hs.drain(..) {
                handle.remove();
            }
        });
        log::debug!("[SCROLL] listeners removed");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics { scroll_y, scroll_height: 3000.0, viewport_height: 1000.0 }
    }

    #[test]
    fn test_thresholds_are_independent() {
        let config = ScrollConfig::default();
        for y in [0.0, 49.0, 50.0, 51.0, 299.0, 300.0, 301.0, 1500.0] {
            let state = at(y).state(&config);
            assert_eq!(state.past_header, y > 50.0, "header at {y}");
            assert_eq!(state.past_top_button, y > 300.0, "top button at {y}");
        }
    }

    #[test]
    fn test_progress_ratio_in_unit_range() {
        assert_eq!(at(0.0).progress_ratio(), 0.0);
        assert_eq!(at(1000.0).progress_ratio(), 0.5);
        assert_eq!(at(2000.0).progress_ratio(), 1.0);
        // overscroll bounce on some platforms
        assert_eq!(at(2100.0).progress_ratio(), 1.0);
        assert_eq!(at(-40.0).progress_ratio(), 0.0);
    }

    #[test]
    fn test_progress_zero_when_nothing_to_scroll() {
        let flat = ScrollMetrics { scroll_y: 0.0, scroll_height: 800.0, viewport_height: 800.0 };
        assert_eq!(flat.progress_ratio(), 0.0);
        let short = ScrollMetrics { scroll_y: 10.0, scroll_height: 600.0, viewport_height: 800.0 };
        assert_eq!(short.progress_ratio(), 0.0);
        let broken = ScrollMetrics { scroll_y: f64::NAN, scroll_height: 3000.0, viewport_height: 800.0 };
        assert_eq!(broken.progress_ratio(), 0.0);
    }
}
