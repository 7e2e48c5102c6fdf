//! UI Components
//!
//! Page sections and the pieces they share.

mod about;
mod contact;
mod draggable_card;
mod header;
mod hero;
mod live_chart;
mod progress_bar;
mod projects;
mod reveal;
mod sandbox;
mod scroll_to_top;

pub use about::About;
pub use contact::Contact;
pub use header::SiteHeader;
pub use hero::Hero;
pub use progress_bar::ScrollProgressBar;
pub use projects::ProjectGallery;
pub use sandbox::Sandbox;
pub use scroll_to_top::ScrollToTopButton;
