//! Shared-Layout (FLIP) Transitions
//!
//! First, Last, Invert, Play: snapshot an element's box in one layout,
//! render the other layout, then animate the new element from the old box
//! to its own by transforming it back and releasing the transform.
//! Snapshots are keyed by a stable identity so two renders of the same
//! entity can find each other.

use std::collections::HashMap;
use std::hash::Hash;

use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Transform that makes an element laid out at `last` appear at `first`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl FlipTransform {
    pub const IDENTITY: FlipTransform = FlipTransform { translate_x: 0.0, translate_y: 0.0, scale_x: 1.0, scale_y: 1.0 };

    /// Computed with `transform-origin: top left`
    pub fn invert(first: Rect, last: Rect) -> Self {
        Self {
            translate_x: first.x - last.x,
            translate_y: first.y - last.y,
            scale_x: ratio(first.width, last.width),
            scale_y: ratio(first.height, last.height),
        }
    }

    pub fn is_identity(&self) -> bool {
        const EPS: f64 = 0.5;
        self.translate_x.abs() < EPS
            && self.translate_y.abs() < EPS
            && (self.scale_x - 1.0).abs() < 0.005
            && (self.scale_y - 1.0).abs() < 0.005
    }

    /// Interpolate from this transform (progress 0) to identity (progress 1)
    pub fn at(&self, progress: f64) -> Self {
        let t = progress.clamp(0.0, 1.0);
        Self {
            translate_x: self.translate_x * (1.0 - t),
            translate_y: self.translate_y * (1.0 - t),
            scale_x: self.scale_x + (1.0 - self.scale_x) * t,
            scale_y: self.scale_y + (1.0 - self.scale_y) * t,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4}, {:.4})",
            self.translate_x, self.translate_y, self.scale_x, self.scale_y
        )
    }
}

fn ratio(first: f64, last: f64) -> f64 {
    if last.abs() < f64::EPSILON || !first.is_finite() || !last.is_finite() {
        1.0
    } else {
        first / last
    }
}

/// Last known boxes of shared elements, keyed by identity
#[derive(Debug, Clone)]
pub struct LayoutSnapshots<K> {
    rects: HashMap<K, Rect>,
}

impl<K> Default for LayoutSnapshots<K> {
    fn default() -> Self {
        Self { rects: HashMap::new() }
    }
}

impl<K: Eq + Hash> LayoutSnapshots<K> {
    pub fn record(&mut self, key: K, rect: Rect) {
        self.rects.insert(key, rect);
    }

    /// Snapshots are single-use: the element that consumes one owns the
    /// identity from then on.
    pub fn take(&mut self, key: &K) -> Option<Rect> {
        self.rects.remove(key)
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

// ========================
// DOM
// ========================

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Viewport box of the element with `id`
pub fn measure(id: &str) -> Option<Rect> {
    let el = element_by_id(id)?;
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

/// Animate the element with `id` from `first` to wherever it is laid out now.
/// Returns false when the element is missing or already in place.
pub fn play_from(id: &str, first: Rect, duration_secs: f64) -> bool {
    let Some(el) = element_by_id(id) else {
        return false;
    };
    let r = el.get_bounding_client_rect();
    let last = Rect::new(r.left(), r.top(), r.width(), r.height());
    let invert = FlipTransform::invert(first, last);
    if invert.is_identity() {
        return false;
    }

    let style = el.style();
    let _ = style.set_property("transform-origin", "top left");
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("transform", &invert.to_css());
    // force layout so the inverted transform is committed before release
    let _ = el.offset_width();
    let _ = style.set_property(
        "transition",
        &format!("transform {duration_secs}s cubic-bezier(0.4, 0, 0.2, 1)"),
    );
    let _ = style.set_property("transform", "none");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_maps_last_box_onto_first() {
        let card = Rect::new(100.0, 400.0, 300.0, 192.0);
        let modal = Rect::new(200.0, 80.0, 768.0, 256.0);
        let t = FlipTransform::invert(card, modal);
        assert_eq!(t.translate_x, -100.0);
        assert_eq!(t.translate_y, 320.0);
        assert!((t.scale_x - 300.0 / 768.0).abs() < 1e-12);
        assert!((t.scale_y - 0.75).abs() < 1e-12);

        // with a top-left origin the transformed modal box lands on the card box
        let x = modal.x + t.translate_x;
        let w = modal.width * t.scale_x;
        assert!((x - card.x).abs() < 1e-9);
        assert!((w - card.width).abs() < 1e-9);
    }

    #[test]
    fn test_identical_boxes_need_no_animation() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(FlipTransform::invert(r, r).is_identity());
        assert_eq!(FlipTransform::invert(r, r).at(0.3), FlipTransform::IDENTITY);
    }

    #[test]
    fn test_zero_sized_box_does_not_divide_by_zero() {
        let t = FlipTransform::invert(Rect::new(0.0, 0.0, 50.0, 50.0), Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(t.scale_x, 1.0);
        assert_eq!(t.scale_y, 1.0);
    }

    #[test]
    fn test_interpolation_ends_at_identity() {
        let t = FlipTransform::invert(Rect::new(0.0, 0.0, 100.0, 50.0), Rect::new(40.0, 20.0, 200.0, 100.0));
        assert_eq!(t.at(0.0), t);
        assert_eq!(t.at(1.0), FlipTransform::IDENTITY);
        let mid = t.at(0.5);
        assert_eq!(mid.translate_x, -20.0);
        assert_eq!(mid.scale_x, 0.75);
    }

    #[test]
    fn test_snapshots_are_single_use() {
        let mut snaps = LayoutSnapshots::default();
        snaps.record((1u32, "image"), Rect::new(1.0, 2.0, 3.0, 4.0));
        snaps.record((1u32, "title"), Rect::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps.take(&(1, "image")), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(snaps.take(&(1, "image")), None);
        snaps.clear();
        assert!(snaps.is_empty());
    }
}
