//! Mobile Menu State
//!
//! Two states, changed only by explicit user intent. Following a nav link
//! closes the menu as a side effect of navigating.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuIntent {
    /// Menu button
    Toggle,
    /// Close button inside the overlay
    Close,
    /// A nav link was followed
    Navigate(String),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, intent: &MenuIntent) -> MenuState {
        match intent {
            MenuIntent::Toggle => match self {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            },
            MenuIntent::Close | MenuIntent::Navigate(_) => MenuState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        let state = MenuState::default();
        assert!(!state.is_open());
        let state = state.apply(&MenuIntent::Toggle);
        assert!(state.is_open());
        assert_eq!(state.apply(&MenuIntent::Close), MenuState::Closed);
        assert_eq!(state.apply(&MenuIntent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_navigation_closes_open_menu() {
        let state = MenuState::Open.apply(&MenuIntent::Navigate("#projects".to_string()));
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_navigation_never_opens_menu() {
        let state = MenuState::Closed.apply(&MenuIntent::Navigate("#about".to_string()));
        assert_eq!(state, MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(&MenuIntent::Close), MenuState::Closed);
    }

    #[test]
    fn test_rapid_toggles_land_on_last_intent() {
        let state = (0..7).fold(MenuState::Closed, |s, _| s.apply(&MenuIntent::Toggle));
        assert_eq!(state, MenuState::Open);
    }
}
