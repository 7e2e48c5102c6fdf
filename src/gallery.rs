//! Project Gallery Selection
//!
//! At most one project is selected. The selection holds the project id and
//! resolves it against the catalog on read, so it never holds a stale copy.

use crate::content::Portfolio;
use crate::models::Project;

/// User input while the modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    BackdropClick,
    /// Click anywhere inside the modal panel
    BodyClick,
    CloseButton,
    Escape,
}

impl ModalEvent {
    pub fn dismisses(self) -> bool {
        !matches!(self, ModalEvent::BodyClick)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GallerySelection {
    selected: Option<u32>,
}

impl GallerySelection {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    /// Select `id`, replacing any current selection. Returns the replaced id.
    pub fn select(&mut self, id: u32) -> Option<u32> {
        self.selected.replace(id)
    }

    /// Returns the id that was selected
    pub fn clear(&mut self) -> Option<u32> {
        self.selected.take()
    }

    /// Clears on dismissing events; clicks on the modal body never do.
    /// Returns the id that was dismissed.
    pub fn handle(&mut self, event: ModalEvent) -> Option<u32> {
        if event.dismisses() {
            self.clear()
        } else {
            None
        }
    }

    pub fn project<'a>(&self, portfolio: &'a Portfolio) -> Option<&'a Project> {
        self.selected.and_then(|id| portfolio.project(id))
    }
}

/// Parts of a project shown both on its card and in its modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedPart {
    Container,
    Image,
    Title,
    Category,
}

impl SharedPart {
    pub const ALL: [SharedPart; 4] = [SharedPart::Container, SharedPart::Image, SharedPart::Title, SharedPart::Category];

    fn slug(self) -> &'static str {
        match self {
            SharedPart::Container => "container",
            SharedPart::Image => "image",
            SharedPart::Title => "title",
            SharedPart::Category => "category",
        }
    }
}

/// Which of the two layouts an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Card,
    Modal,
}

/// Stable identity of a shared element: project id plus part
pub type SharedKey = (u32, SharedPart);

/// DOM id of a shared element in one layout
pub fn shared_dom_id(layout: Layout, (id, part): SharedKey) -> String {
    let prefix = match layout {
        Layout::Card => "card",
        Layout::Modal => "modal",
    };
    format!("{prefix}-{}-{id}", part.slug())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_read_title() {
        let portfolio = Portfolio::bundled().unwrap();
        for p in &portfolio.projects {
            let mut gallery = GallerySelection::default();
            gallery.select(p.id);
            assert_eq!(gallery.project(&portfolio).map(|shown| shown.title.as_str()), Some(p.title.as_str()));
            assert_eq!(gallery.clear(), Some(p.id));
            assert!(gallery.project(&portfolio).is_none());
        }
    }

    #[test]
    fn test_body_click_never_clears() {
        let mut gallery = GallerySelection::default();
        gallery.select(2);
        for _ in 0..3 {
            assert_eq!(gallery.handle(ModalEvent::BodyClick), None);
        }
        assert!(gallery.is_selected(2));
        assert_eq!(gallery.handle(ModalEvent::BackdropClick), Some(2));
        assert_eq!(gallery.selected(), None);
    }

    #[test]
    fn test_every_other_event_dismisses() {
        for event in [ModalEvent::BackdropClick, ModalEvent::CloseButton, ModalEvent::Escape] {
            let mut gallery = GallerySelection::default();
            gallery.select(4);
            assert_eq!(gallery.handle(event), Some(4));
            assert_eq!(gallery.handle(event), None);
        }
    }

    #[test]
    fn test_select_replaces_without_queueing() {
        let mut gallery = GallerySelection::default();
        assert_eq!(gallery.select(1), None);
        assert_eq!(gallery.select(3), Some(1));
        assert!(gallery.is_selected(3));
        assert!(!gallery.is_selected(1));
        assert_eq!(gallery.clear(), Some(3));
        assert_eq!(gallery.clear(), None);
    }

    #[test]
    fn test_shared_ids_pair_card_and_modal() {
        let key = (7, SharedPart::Title);
        assert_eq!(shared_dom_id(Layout::Card, key), "card-title-7");
        assert_eq!(shared_dom_id(Layout::Modal, key), "modal-title-7");
        assert_ne!(shared_dom_id(Layout::Card, (7, SharedPart::Image)), shared_dom_id(Layout::Card, (8, SharedPart::Image)));
    }
}
