//! Animation Frame Loop
//!
//! Runs a step function once per `requestAnimationFrame` until it reports
//! that it has come to rest. `wake` restarts a resting loop. Dropping the
//! loop cancels the pending frame and releases the callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Frame delta used for the very first frame after a wake
const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
    last_ms: Rc<Cell<Option<f64>>>,
}

impl FrameLoop {
    /// `step` receives the elapsed seconds since the previous frame and
    /// returns true to be called again next frame.
    pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let last_ms: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

        let callback_inner = Rc::clone(&callback);
        let pending_inner = Rc::clone(&pending);
        let last_inner = Rc::clone(&last_ms);
        let tick = Closure::<dyn FnMut(f64)>::new(move |now_ms: f64| {
            pending_inner.set(None);
            let dt = last_inner
                .get()
                .map(|last| (now_ms - last) / 1000.0)
                .unwrap_or(FIRST_FRAME_SECS);
            if step(dt) {
                last_inner.set(Some(now_ms));
                if let Some(cb) = callback_inner.borrow().as_ref() {
                    pending_inner.set(request_frame(cb));
                }
            } else {
                last_inner.set(None);
            }
        });
        *callback.borrow_mut() = Some(tick);

        Self { callback, pending, last_ms }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Schedule a frame if none is pending
    pub fn wake(&self) {
        if self.is_running() {
            return;
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            self.pending.set(request_frame(cb));
        }
    }

    /// Cancel the pending frame; a later `wake` resumes
    pub fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(win) = web_sys::window() {
                let _ = win.cancel_animation_frame(handle);
            }
        }
        self.last_ms.set(None);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // The closure holds a clone of `callback`; break the cycle.
        self.callback.borrow_mut().take();
    }
}

fn request_frame(cb: &FrameCallback) -> Option<i32> {
    web_sys::window().and_then(|win| win.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
