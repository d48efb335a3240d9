//! Read-only menu browser
//!
//! Sections → items of a section → one item, and back again.

use shared::{Item, MenuSnapshot, Section};

use super::screen::{ItemCard, ItemDetail, Screen, SectionCard};

pub const MENU_TITLE: &str = "Nuestro Menú";
pub const BACK_TO_MENU_LABEL: &str = "Volver al Menú Principal";
pub const BACK_LABEL: &str = "Volver";

const THUMBNAIL_SIZE: &str = "80&width=80";
const DETAIL_SIZE: &str = "300&width=300";

/// Browser position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Navigation {
    #[default]
    Sections,
    Items(Section),
    Item { section: Section, item: Item },
}

#[derive(Debug, Clone, Default)]
pub struct MenuBrowser {
    nav: Navigation,
}

impl MenuBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    /// Open a section, dropping any open item
    pub fn select_section(&mut self, section: &Section) {
        self.nav = Navigation::Items(section.clone());
    }

    /// Open an item of the current section. Ignored outside an item list.
    pub fn select_item(&mut self, item: &Item) -> bool {
        match &self.nav {
            Navigation::Items(section) => {
                self.nav = Navigation::Item {
                    section: section.clone(),
                    item: item.clone(),
                };
                true
            }
            _ => false,
        }
    }

    pub fn back(&mut self) {
        self.nav = match std::mem::take(&mut self.nav) {
            Navigation::Item { section, .. } => Navigation::Items(section),
            Navigation::Items(_) | Navigation::Sections => Navigation::Sections,
        };
    }

    pub fn render(&self, snapshot: &MenuSnapshot) -> Screen {
        match &self.nav {
            Navigation::Sections => Screen::SectionGrid {
                title: MENU_TITLE,
                sections: snapshot
                    .sections
                    .iter()
                    .map(|s| SectionCard {
                        id: s.id,
                        name: s.name.clone(),
                        image: s.image.clone(),
                    })
                    .collect(),
            },
            Navigation::Items(section) => Screen::ItemList {
                back_label: BACK_TO_MENU_LABEL,
                title: section.name.clone(),
                items: snapshot
                    .items_in(section.id)
                    .iter()
                    .map(|i| ItemCard {
                        id: i.id,
                        name: i.name.clone(),
                        price: i.price.clone(),
                        image: i.image.clone(),
                    })
                    .collect(),
            },
            Navigation::Item { item, .. } => Screen::ItemDetail {
                back_label: BACK_LABEL,
                detail: ItemDetail {
                    name: item.name.clone(),
                    price: item.price.clone(),
                    image: detail_image(&item.image),
                    description: item.description.clone(),
                },
            },
        }
    }
}

/// Swap the thumbnail size in a placeholder URL for the detail size
pub fn detail_image(image: &str) -> String {
    image.replacen(THUMBNAIL_SIZE, DETAIL_SIZE, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MenuSnapshot {
        MenuSnapshot::from_rows(
            vec![
                Section {
                    id: 1,
                    name: "Bebidas".to_string(),
                    image: "/b.png".to_string(),
                },
                Section {
                    id: 2,
                    name: "Postres".to_string(),
                    image: "/p.png".to_string(),
                },
            ],
            vec![Item {
                id: 10,
                section_id: 1,
                name: "Agua".to_string(),
                price: "$1.00".to_string(),
                image: "/placeholder.svg?height=80&width=80".to_string(),
                description: "Agua mineral".to_string(),
            }],
        )
    }

    #[test]
    fn test_navigation_cycle() {
        let menu = snapshot();
        let mut browser = MenuBrowser::new();
        assert_eq!(browser.navigation(), &Navigation::Sections);

        browser.back();
        assert_eq!(browser.navigation(), &Navigation::Sections);

        assert!(!browser.select_item(&menu.items_in(1)[0]));

        browser.select_section(&menu.sections[0]);
        assert!(browser.select_item(&menu.items_in(1)[0]));
        assert!(matches!(browser.navigation(), Navigation::Item { item, .. } if item.id == 10));

        browser.back();
        assert_eq!(browser.navigation(), &Navigation::Items(menu.sections[0].clone()));
        browser.back();
        assert_eq!(browser.navigation(), &Navigation::Sections);
    }

    #[test]
    fn test_select_section_clears_item() {
        let menu = snapshot();
        let mut browser = MenuBrowser::new();
        browser.select_section(&menu.sections[0]);
        browser.select_item(&menu.items_in(1)[0]);

        browser.select_section(&menu.sections[1]);
        assert_eq!(browser.navigation(), &Navigation::Items(menu.sections[1].clone()));
    }

    #[test]
    fn test_render_screens() {
        let menu = snapshot();
        let mut browser = MenuBrowser::new();

        match browser.render(&menu) {
            Screen::SectionGrid { title, sections } => {
                assert_eq!(title, "Nuestro Menú");
                assert_eq!(sections.len(), 2);
            }
            other => panic!("unexpected screen: {other:?}"),
        }

        browser.select_section(&menu.sections[1]);
        match browser.render(&menu) {
            Screen::ItemList {
                back_label,
                title,
                items,
            } => {
                assert_eq!(back_label, "Volver al Menú Principal");
                assert_eq!(title, "Postres");
                assert!(items.is_empty());
            }
            other => panic!("unexpected screen: {other:?}"),
        }

        browser.select_section(&menu.sections[0]);
        browser.select_item(&menu.items_in(1)[0]);
        match browser.render(&menu) {
            Screen::ItemDetail { back_label, detail } => {
                assert_eq!(back_label, "Volver");
                assert_eq!(detail.image, "/placeholder.svg?height=300&width=300");
                assert_eq!(detail.description, "Agua mineral");
            }
            other => panic!("unexpected screen: {other:?}"),
        }
    }

    #[test]
    fn test_detail_image_leaves_other_urls() {
        assert_eq!(detail_image("/a.png"), "/a.png");
        assert_eq!(
            detail_image("/x.svg?height=80&width=80&v=80&width=80"),
            "/x.svg?height=300&width=300&v=80&width=80"
        );
    }

    #[test]
    fn test_text_rendering() {
        let menu = snapshot();
        let mut browser = MenuBrowser::new();
        browser.select_section(&menu.sections[0]);

        let text = browser.render(&menu).to_string();
        assert!(text.starts_with("[Volver al Menú Principal]\n# Bebidas\n"));
        assert!(text.contains("- Agua $1.00"));
    }
}
