//! Enter/Exit Presence
//!
//! Keeps an element mounted for the duration of its exit transition.
//! Every transition bumps a generation counter so completions scheduled
//! by an earlier toggle are ignored instead of stacking.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Named visual states an element animates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Absent,
    /// Mounted in the hidden state, waiting a frame before becoming visible
    Entering,
    Present,
    /// Still mounted, transitioning to hidden
    Exiting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    phase: Phase,
    generation: u64,
}

impl Presence {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Absent
    }

    pub fn visual_state(&self) -> VisualState {
        match self.phase {
            Phase::Present => VisualState::Visible,
            _ => VisualState::Hidden,
        }
    }

    /// Returns the generation to pass to [`Presence::entered`] when a fresh
    /// mount needs an entering frame. An element caught mid-exit goes straight
    /// back to present and transitions from wherever it is.
    pub fn show(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Absent => {
                self.generation += 1;
                self.phase = Phase::Entering;
                Some(self.generation)
            }
            Phase::Exiting => {
                self.generation += 1;
                self.phase = Phase::Present;
                None
            }
            Phase::Entering | Phase::Present => None,
        }
    }

    pub fn entered(&mut self, generation: u64) -> bool {
        if self.phase == Phase::Entering && self.generation == generation {
            self.phase = Phase::Present;
            true
        } else {
            false
        }
    }

    /// Returns the generation to pass to [`Presence::exited`] once the exit
    /// transition has had time to run.
    pub fn hide(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Entering | Phase::Present => {
                self.generation += 1;
                self.phase = Phase::Exiting;
                Some(self.generation)
            }
            Phase::Absent | Phase::Exiting => None,
        }
    }

    pub fn exited(&mut self, generation: u64) -> bool {
        if self.phase == Phase::Exiting && self.generation == generation {
            self.phase = Phase::Absent;
            true
        } else {
            false
        }
    }
}

/// Reactive handle returned by [`use_presence`]
#[derive(Clone, Copy)]
pub struct PresenceSignal(RwSignal<Presence>);

impl PresenceSignal {
    pub fn is_mounted(&self) -> bool {
        self.0.with(|p| p.is_mounted())
    }

    pub fn state(&self) -> VisualState {
        self.0.with(|p| p.visual_state())
    }
}

/// Drive a [`Presence`] from `show`, unmounting `exit_ms` after it turns false
pub fn use_presence(show: impl Fn() -> bool + Send + Sync + 'static, exit_ms: u32) -> PresenceSignal {
    let presence = RwSignal::new(Presence::default());
    let exit_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        if show() {
            exit_timer.update_value(|timer| {
                timer.take();
            });
            let entering = presence.try_maybe_update(|p| {
                let before = *p;
                let generation = p.show();
                (*p != before, generation)
            });
            if let Some(Some(generation)) = entering {
                // one frame to commit the hidden style, one to leave it
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        presence.try_maybe_update(|p| (p.entered(generation), ()));
                    });
                });
            }
        } else {
            let exiting = presence.try_maybe_update(|p| {
                let generation = p.hide();
                (generation.is_some(), generation)
            });
            if let Some(Some(generation)) = exiting {
                let timer = Timeout::new(exit_ms, move || {
                    presence.try_maybe_update(|p| (p.exited(generation), ()));
                });
                exit_timer.set_value(Some(timer));
            }
        }
    });

    on_cleanup(move || {
        exit_timer.try_update_value(|timer| {
            timer.take();
        });
    });

    PresenceSignal(presence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_exit_unmounts() {
        let mut p = Presence::default();
        assert!(!p.is_mounted());

        let enter = p.show().unwrap();
        assert_eq!(p.phase(), Phase::Entering);
        assert_eq!(p.visual_state(), VisualState::Hidden);
        assert!(p.entered(enter));
        assert_eq!(p.visual_state(), VisualState::Visible);

        let exit = p.hide().unwrap();
        assert!(p.is_mounted());
        assert_eq!(p.visual_state(), VisualState::Hidden);
        assert!(p.exited(exit));
        assert!(!p.is_mounted());
    }

    #[test]
    fn test_reshow_during_exit_ignores_stale_completion() {
        let mut p = Presence::default();
        let enter = p.show().unwrap();
        p.entered(enter);
        let exit = p.hide().unwrap();

        assert_eq!(p.show(), None);
        assert_eq!(p.phase(), Phase::Present);
        assert!(!p.exited(exit));
        assert!(p.is_mounted());
    }

    #[test]
    fn test_hide_before_entered_frame() {
        let mut p = Presence::default();
        let enter = p.show().unwrap();
        let exit = p.hide().unwrap();
        assert!(!p.entered(enter));
        assert_eq!(p.phase(), Phase::Exiting);
        assert!(p.exited(exit));
        assert_eq!(p.phase(), Phase::Absent);
    }

    #[test]
    fn test_repeated_show_and_hide_are_idempotent() {
        let mut p = Presence::default();
        assert_eq!(p.hide(), None);
        let enter = p.show().unwrap();
        assert_eq!(p.show(), None);
        assert!(p.entered(enter));
        assert_eq!(p.show(), None);
        let exit = p.hide().unwrap();
        assert_eq!(p.hide(), None);
        assert!(p.exited(exit));
    }
}
