//! Animation Variants
//!
//! Named visual states mapped to inline styles. An element renders the
//! style for its current [`VisualState`] and the browser's CSS transition
//! carries it from whatever it shows now, so a new state retargets a
//! running animation instead of queueing behind it.

use std::fmt::Write;

pub use leptos_motion::{Gesture, VisualState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f64),
    /// Percent of the element's own height
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: Offset,
    /// Degrees
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, scale: 1.0, translate_y: Offset::Px(0.0), rotate: 0.0 };

    pub const fn faded(scale: f64, translate_y: Offset) -> Self {
        Self { opacity: 0.0, scale, translate_y, rotate: 0.0 }
    }

    /// Fully opaque pose reached through a gesture
    pub const fn gesture(scale: f64, lift_px: f64, rotate: f64) -> Self {
        Self { opacity: 1.0, scale, translate_y: Offset::Px(lift_px), rotate }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Bezier(f64, f64, f64, f64),
}

impl Easing {
    fn css(self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::Bezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, delay: 0.0, easing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub enter: Timing,
    /// `None` snaps to hidden with no transition
    pub exit: Option<Timing>,
    /// Shown over `visible` while the pointer is over the element
    pub hover: Option<Pose>,
    /// Shown over `hover` while the element is held down
    pub tap: Option<Pose>,
}

/// Transition into and out of gesture poses
const GESTURE_TIMING: Timing = Timing::new(0.2, Easing::EaseOut);

impl Variants {
    pub fn style(&self, state: VisualState) -> String {
        self.style_delayed(state, 0.0)
    }

    /// Style with `delay` seconds added to the enter transition
    pub fn style_delayed(&self, state: VisualState, delay: f64) -> String {
        let (pose, timing) = match state {
            VisualState::Visible => (self.visible, Some(Timing { delay: self.enter.delay + delay, ..self.enter })),
            VisualState::Hidden => (self.hidden, self.exit),
        };
        compose(&pose, timing)
    }

    /// Pose for `state` under the active gesture. Gestures only apply to a
    /// visible element; a tap without its own pose keeps the hover pose.
    pub fn pose(&self, state: VisualState, gesture: Option<Gesture>) -> Pose {
        let lifted = match (state, gesture) {
            (VisualState::Hidden, _) | (_, None) => None,
            (VisualState::Visible, Some(Gesture::Hover)) => self.hover,
            (VisualState::Visible, Some(Gesture::Tap)) => self.tap.or(self.hover),
        };
        lifted.unwrap_or(match state {
            VisualState::Visible => self.visible,
            VisualState::Hidden => self.hidden,
        })
    }

    pub fn style_gesture(&self, state: VisualState, gesture: Option<Gesture>) -> String {
        match (state, gesture) {
            (VisualState::Visible, Some(_)) => compose(&self.pose(state, gesture), Some(GESTURE_TIMING)),
            _ => self.style(state),
        }
    }

    /// Seconds the exit transition runs; 0 when it snaps
    pub fn exit_duration(&self) -> f64 {
        self.exit.map(|t| t.duration + t.delay).unwrap_or(0.0)
    }
}

fn compose(pose: &Pose, timing: Option<Timing>) -> String {
    let mut css = String::new();
    let _ = write!(css, "opacity: {}; transform: {};", pose.opacity, transform(pose));
    match timing {
        Some(t) => {
            let ease = t.easing.css();
            let (dur, del) = (secs(t.duration), secs(t.delay));
            let _ = write!(css, " transition: opacity {dur} {ease} {del}, transform {dur} {ease} {del};");
        }
        None => css.push_str(" transition: none;"),
    }
    css
}

fn transform(pose: &Pose) -> String {
    let y = match pose.translate_y {
        Offset::Px(v) => format!("{v}px"),
        Offset::Percent(v) => format!("{v}%"),
    };
    if pose.rotate == 0.0 {
        format!("translateY({y}) scale({})", pose.scale)
    } else {
        format!("translateY({y}) scale({}) rotate({}deg)", pose.scale, pose.rotate)
    }
}

/// Seconds rounded to the millisecond, as CSS
fn secs(v: f64) -> String {
    format!("{}s", (v.max(0.0) * 1000.0).round() / 1000.0)
}

/// Delay for the `index`th item of a staggered list
pub fn stagger_delay(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

// ========================
// Variant Sets
// ========================

/// Mobile nav overlay: fade + scale
pub fn menu_panel(duration: f64) -> Variants {
    Variants {
        hidden: Pose::faded(0.95, Offset::Px(0.0)),
        visible: Pose::REST,
        enter: Timing::new(duration, Easing::EaseOut),
        exit: Some(Timing::new(duration, Easing::EaseOut)),
        hover: None,
        tap: None,
    }
}

/// Mobile nav link: staggered entry only
pub const NAV_LINK: Variants = Variants {
    hidden: Pose::faded(1.0, Offset::Px(-20.0)),
    visible: Pose::REST,
    enter: Timing::new(0.3, Easing::EaseOut),
    exit: None,
    hover: None,
    tap: None,
};

/// Section body and its children
pub const SECTION: Variants = Variants {
    hidden: Pose::faded(1.0, Offset::Px(50.0)),
    visible: Pose::REST,
    enter: Timing::new(0.6, Easing::EaseOut),
    exit: None,
    hover: None,
    tap: None,
};

pub const HEADING: Variants = Variants {
    hidden: Pose::faded(1.0, Offset::Px(-20.0)),
    visible: Pose::REST,
    enter: Timing::new(0.5, Easing::EaseOut),
    exit: None,
    hover: None,
    tap: None,
};

/// Hero tagline and chips
pub const FADE_UP: Variants = Variants {
    hidden: Pose::faded(1.0, Offset::Px(20.0)),
    visible: Pose::REST,
    enter: Timing::new(0.8, Easing::EaseOut),
    exit: None,
    hover: None,
    tap: None,
};

/// One character of the hero headline
pub const CHARACTER: Variants = Variants {
    hidden: Pose::faded(1.0, Offset::Percent(100.0)),
    visible: Pose::REST,
    enter: Timing::new(0.8, Easing::Bezier(0.2, 0.65, 0.3, 0.9)),
    exit: None,
    hover: None,
    tap: None,
};

/// Scroll-to-top button: pops in, tilts on hover
pub const POP: Variants = Variants {
    hidden: Pose::faded(0.5, Offset::Px(0.0)),
    visible: Pose::REST,
    enter: Timing::new(0.2, Easing::EaseOut),
    exit: Some(Timing::new(0.2, Easing::EaseOut)),
    hover: Some(Pose::gesture(1.1, 0.0, -15.0)),
    // keeps the hover tilt
    tap: Some(Pose::gesture(0.9, 0.0, -15.0)),
};

/// Header brand link
pub const BRAND: Variants = Variants {
    hidden: Pose::REST,
    visible: Pose::REST,
    enter: GESTURE_TIMING,
    exit: None,
    hover: Some(Pose::gesture(1.05, 0.0, 0.0)),
    tap: Some(Pose::gesture(0.95, 0.0, 0.0)),
};

/// Footer social icon: grows and rises on hover
pub const SOCIAL_ICON: Variants = Variants {
    hidden: Pose::REST,
    visible: Pose::REST,
    enter: GESTURE_TIMING,
    exit: None,
    hover: Some(Pose::gesture(1.2, -5.0, 0.0)),
    tap: Some(Pose::gesture(0.9, -5.0, 0.0)),
};

/// Project card lift; pressing keeps the lift
pub const CARD_LIFT: Variants = Variants {
    hidden: Pose::REST,
    visible: Pose::REST,
    enter: GESTURE_TIMING,
    exit: None,
    hover: Some(Pose::gesture(1.0, -5.0, 0.0)),
    tap: None,
};

pub fn backdrop(duration: f64) -> Variants {
    Variants {
        hidden: Pose::faded(1.0, Offset::Px(0.0)),
        visible: Pose::REST,
        enter: Timing::new(duration, Easing::EaseInOut),
        exit: Some(Timing::new(duration, Easing::EaseInOut)),
        hover: None,
        tap: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_index_proportional() {
        let delays: Vec<f64> = (0..4).map(|i| stagger_delay(i, 0.2, 0.1)).collect();
        for (i, d) in delays.iter().enumerate() {
            assert!((d - (i as f64 * 0.1 + 0.2)).abs() < 1e-12);
        }
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_nav_link_entry_is_staggered_exit_is_not() {
        let third = NAV_LINK.style_delayed(VisualState::Visible, stagger_delay(2, 0.2, 0.1));
        assert!(third.contains("opacity: 1;"));
        assert!(third.contains("0.3s ease-out 0.4s"));

        let hidden = NAV_LINK.style_delayed(VisualState::Hidden, stagger_delay(2, 0.2, 0.1));
        assert!(hidden.contains("translateY(-20px)"));
        assert!(hidden.ends_with("transition: none;"));
    }

    #[test]
    fn test_menu_panel_fades_and_scales() {
        let panel = menu_panel(0.2);
        assert_eq!(
            panel.style(VisualState::Hidden),
            "opacity: 0; transform: translateY(0px) scale(0.95); \
             transition: opacity 0.2s ease-out 0s, transform 0.2s ease-out 0s;"
        );
        assert!(panel.style(VisualState::Visible).contains("scale(1)"));
    }

    #[test]
    fn test_gesture_pose_resolution_order() {
        use VisualState::{Hidden, Visible};
        assert_eq!(POP.pose(Visible, None), Pose::REST);
        assert_eq!(POP.pose(Visible, Some(Gesture::Hover)).scale, 1.1);
        assert_eq!(POP.pose(Visible, Some(Gesture::Tap)).scale, 0.9);
        // an exiting button drops its gesture pose
        assert_eq!(POP.pose(Hidden, Some(Gesture::Tap)), POP.hidden);
        // no tap pose: pressing keeps the hover lift
        assert_eq!(CARD_LIFT.pose(Visible, Some(Gesture::Tap)), CARD_LIFT.pose(Visible, Some(Gesture::Hover)));
        // no gesture poses at all
        assert_eq!(SECTION.pose(Visible, Some(Gesture::Hover)), Pose::REST);
    }

    #[test]
    fn test_gesture_styles() {
        let hover = POP.style_gesture(VisualState::Visible, Some(Gesture::Hover));
        assert!(hover.contains("transform: translateY(0px) scale(1.1) rotate(-15deg);"));
        assert!(hover.contains("0.2s ease-out 0s"));

        let lifted = SOCIAL_ICON.style_gesture(VisualState::Visible, Some(Gesture::Tap));
        assert!(lifted.contains("translateY(-5px) scale(0.9)"));

        let hidden = POP.style_gesture(VisualState::Hidden, Some(Gesture::Hover));
        assert_eq!(hidden, POP.style(VisualState::Hidden));
        assert_eq!(BRAND.style_gesture(VisualState::Visible, None), BRAND.style(VisualState::Visible));
    }

    #[test]
    fn test_exit_duration() {
        assert_eq!(POP.exit_duration(), 0.2);
        assert_eq!(NAV_LINK.exit_duration(), 0.0);
        assert_eq!(backdrop(0.3).exit_duration(), 0.3);
    }

    #[test]
    fn test_character_uses_percent_offset_and_curve() {
        let css = CHARACTER.style(VisualState::Hidden);
        assert!(css.contains("translateY(100%)"));
        let css = CHARACTER.style_delayed(VisualState::Visible, 0.15);
        assert!(css.contains("cubic-bezier(0.2, 0.65, 0.3, 0.9) 0.15s"));
    }
}
