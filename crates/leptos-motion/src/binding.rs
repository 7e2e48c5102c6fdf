//! Drag Binding
//!
//! Pointer handlers wiring a [`DragController`] to one element. Pointer
//! capture keeps move/up events on the element, so no document-level
//! listeners are registered and nothing outlives the component.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::drag::{DragConfig, DragController, Point};
use crate::frame::FrameLoop;

/// Scale applied while the element is held
const PRESSED_SCALE: f64 = 1.1;

#[derive(Clone, Copy)]
pub struct DragBinding {
    controller: StoredValue<DragController, LocalStorage>,
    frames: StoredValue<Option<FrameLoop>, LocalStorage>,
    offset: RwSignal<Point>,
    pressed: RwSignal<bool>,
}

/// Create the drag state for one element. The offset starts at the origin
/// on every mount.
pub fn use_drag(config: DragConfig) -> DragBinding {
    let controller = StoredValue::new_local(DragController::new(config));
    let offset = RwSignal::new(Point::ORIGIN);
    let pressed = RwSignal::new(false);

    let frames = FrameLoop::new(move |dt| {
        let Some((moving, now)) = controller.try_update_value(|c| (c.step(dt), c.offset())) else {
            return false;
        };
        offset.try_set(now);
        moving
    });
    let frames = StoredValue::new_local(Some(frames));

    on_cleanup(move || {
        frames.try_update_value(|f| {
            f.take();
        });
        log::debug!("[DRAG] frame loop released");
    });

    DragBinding { controller, frames, offset, pressed }
}

impl DragBinding {
    pub fn offset(&self) -> Point {
        self.offset.get()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    /// CSS transform for the current offset and press state
    pub fn transform(&self) -> String {
        let p = self.offset.get();
        let scale = if self.pressed.get() { PRESSED_SCALE } else { 1.0 };
        format!("transform: translate({:.2}px, {:.2}px) scale({scale});", p.x, p.y)
    }

    pub fn on_pointerdown(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |ev: web_sys::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
            self.frames.with_value(|f| {
                if let Some(f) = f {
                    f.stop();
                }
            });
            let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            self.controller.update_value(|c| c.press(pointer, ev.time_stamp()));
            self.pressed.set(true);
        }
    }

    pub fn on_pointermove(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |ev: web_sys::PointerEvent| {
            if !self.pressed.get_untracked() {
                return;
            }
            let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            if let Some(shown) = self.controller.try_update_value(|c| c.drag_to(pointer, ev.time_stamp())) {
                self.offset.set(shown);
            }
        }
    }

    /// Also bind to `pointercancel`
    pub fn on_pointerup(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |ev: web_sys::PointerEvent| {
            if !self.pressed.get_untracked() {
                return;
            }
            self.pressed.set(false);
            if let Some(target) = self.controller.try_update_value(|c| c.release(ev.time_stamp())) {
                log::debug!("[DRAG] released, settling toward ({:.0}, {:.0})", target.x, target.y);
            }
            self.frames.with_value(|f| {
                if let Some(f) = f {
                    f.wake();
                }
            });
        }
    }
}
