//! Render output
//!
//! Views produce plain data; a front end decides how to draw it. The
//! [`Display`](fmt::Display) impls give a text rendering used by tests and
//! terminal front ends.

use std::fmt;

use shared::{ItemFields, SectionFields};

/// Shown while the first load is pending
pub const LOADING_TEXT: &str = "Cargando...";

/// A full page: optional header bar plus the active screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub header: Option<Header>,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    /// Label of the admin-mode toggle button
    pub toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    SectionGrid {
        title: &'static str,
        sections: Vec<SectionCard>,
    },
    ItemList {
        back_label: &'static str,
        title: String,
        items: Vec<ItemCard>,
    },
    ItemDetail {
        back_label: &'static str,
        detail: ItemDetail,
    },
    Admin(AdminScreen),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCard {
    pub id: i64,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub name: String,
    pub price: String,
    /// Full-size image URL
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminScreen {
    pub title: &'static str,
    pub body: AdminBody,
    pub section_dialog: Option<SectionDialog>,
    pub item_dialog: Option<ItemDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminBody {
    Sections {
        rows: Vec<AdminRow>,
        add_label: &'static str,
    },
    Items {
        back_label: &'static str,
        heading: String,
        rows: Vec<AdminRow>,
        add_label: &'static str,
    },
}

/// One editable entity in the admin lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub id: i64,
    pub name: String,
    /// Secondary line (the price, for items)
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDialog {
    pub title: &'static str,
    pub draft: SectionFields,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDialog {
    pub title: &'static str,
    pub draft: ItemFields,
    pub submit_label: &'static str,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            writeln!(f, "{}  [{}]", header.title, header.toggle_label)?;
        }
        write!(f, "{}", self.screen)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Loading => writeln!(f, "{LOADING_TEXT}"),
            Screen::SectionGrid { title, sections } => {
                writeln!(f, "# {title}")?;
                for card in sections {
                    writeln!(f, "- {}", card.name)?;
                }
                Ok(())
            }
            Screen::ItemList {
                back_label,
                title,
                items,
            } => {
                writeln!(f, "[{back_label}]")?;
                writeln!(f, "# {title}")?;
                for card in items {
                    writeln!(f, "- {} {}", card.name, card.price)?;
                }
                Ok(())
            }
            Screen::ItemDetail { back_label, detail } => {
                writeln!(f, "[{back_label}]")?;
                writeln!(f, "# {}", detail.name)?;
                writeln!(f, "{}", detail.price)?;
                writeln!(f, "{}", detail.description)
            }
            Screen::Admin(admin) => write!(f, "{admin}"),
        }
    }
}

impl fmt::Display for AdminScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        let (rows, add_label) = match &self.body {
            AdminBody::Sections { rows, add_label } => (rows, add_label),
            AdminBody::Items {
                back_label,
                heading,
                rows,
                add_label,
            } => {
                writeln!(f, "[{back_label}]")?;
                writeln!(f, "## {heading}")?;
                (rows, add_label)
            }
        };
        for row in rows {
            match &row.detail {
                Some(detail) => writeln!(f, "- {} {}", row.name, detail)?,
                None => writeln!(f, "- {}", row.name)?,
            }
        }
        writeln!(f, "[+ {add_label}]")?;

        if let Some(dialog) = &self.section_dialog {
            writeln!(
                f,
                "<{}> {} | {} [{}]",
                dialog.title, dialog.draft.name, dialog.draft.image, dialog.submit_label
            )?;
        }
        if let Some(dialog) = &self.item_dialog {
            writeln!(
                f,
                "<{}> {} | {} | {} | {} [{}]",
                dialog.title,
                dialog.draft.name,
                dialog.draft.price,
                dialog.draft.image,
                dialog.draft.description,
                dialog.submit_label
            )?;
        }
        Ok(())
    }
}
