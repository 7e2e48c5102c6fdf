//! Hover/Press Gestures
//!
//! Tracks whether the pointer is over an element and whether it is held
//! down on it. The most recent intent wins: a press shows over a hover,
//! and releasing while still over the element returns to the hover.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Hover,
    Tap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureState {
    hovered: bool,
    pressed: bool,
}

impl GestureState {
    pub fn active(&self) -> Option<Gesture> {
        if self.pressed {
            Some(Gesture::Tap)
        } else if self.hovered {
            Some(Gesture::Hover)
        } else {
            None
        }
    }

    // transitions return whether anything changed

    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.hovered, true)
    }

    /// Leaving also cancels a press in progress
    pub fn leave(&mut self) -> bool {
        let changed = self.hovered || self.pressed;
        self.hovered = false;
        self.pressed = false;
        changed
    }

    pub fn press(&mut self) -> bool {
        !std::mem::replace(&mut self.pressed, true)
    }

    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.pressed, false)
    }
}

/// Pointer handlers feeding one element's [`GestureState`]
#[derive(Clone, Copy)]
pub struct GestureBinding {
    state: RwSignal<GestureState>,
}

pub fn use_gesture() -> GestureBinding {
    GestureBinding { state: RwSignal::new(GestureState::default()) }
}

impl GestureBinding {
    pub fn active(&self) -> Option<Gesture> {
        self.state.with(|s| s.active())
    }

    pub fn on_pointerenter(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |_| self.state.maybe_update(|s| s.enter())
    }

    /// Also bind to `pointercancel`
    pub fn on_pointerleave(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |_| self.state.maybe_update(|s| s.leave())
    }

    pub fn on_pointerdown(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |ev: web_sys::PointerEvent| {
            if ev.button() == 0 {
                self.state.maybe_update(|s| s.press());
            }
        }
    }

    pub fn on_pointerup(self) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
        move |_| self.state.maybe_update(|s| s.release())
    }
}
