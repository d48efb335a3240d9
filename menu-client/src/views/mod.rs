//! Menu views
//!
//! | View | Role |
//! |------|------|
//! | [`MenuBrowser`] | read-only sections → items → detail |
//! | [`AdminPanel`] | section/item management with modal editors |
//! | [`PageShell`] | routing, admin toggle and loading state |
//!
//! Views hold only navigation and draft state. Menu data always comes from
//! the [`MenuStore`](crate::MenuStore) snapshot passed to `render`.

pub mod admin;
pub mod browser;
pub mod screen;
pub mod shell;

pub use admin::{AdminPanel, ItemEditor, SectionEditor};
pub use browser::{MenuBrowser, Navigation};
pub use screen::{Header, Page, Screen};
pub use shell::{PageShell, Route};
