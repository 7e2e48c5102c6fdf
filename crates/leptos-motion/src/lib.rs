//! Leptos Motion Utilities
//!
//! Animation primitives for Leptos: damped springs, constrained drag with
//! elastic edges, hover/press gestures, enter/exit presence, FLIP
//! shared-layout transitions and an animation-frame loop that cancels
//! itself on drop.

pub mod binding;
pub mod drag;
pub mod flip;
pub mod frame;
pub mod gesture;
pub mod presence;
pub mod spring;

pub use binding::{use_drag, DragBinding};
pub use drag::{Constraints, DragConfig, DragController, Point};
pub use flip::{FlipTransform, LayoutSnapshots, Rect};
pub use frame::FrameLoop;
pub use gesture::{use_gesture, Gesture, GestureBinding, GestureState};
pub use presence::{use_presence, Phase, Presence, PresenceSignal, VisualState};
pub use spring::{Spring, SpringConfig};
