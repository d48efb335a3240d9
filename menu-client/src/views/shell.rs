//! Page shell: routing and the admin-mode toggle

use super::screen::{Header, Page, Screen};
use super::{AdminPanel, MenuBrowser};
use crate::{HttpClient, MenuStore};

pub const RESTAURANT_TITLE: &str = "Nuestro Restaurante";
pub const ADMIN_MODE_LABEL: &str = "Modo Admin";
pub const VIEW_MENU_LABEL: &str = "Ver Menú";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/admin`
    Admin,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Admin => "/admin",
        }
    }
}

/// Top-level page owning the store and both views
pub struct PageShell<C> {
    store: MenuStore<C>,
    browser: MenuBrowser,
    admin: AdminPanel,
    route: Route,
    admin_mode: bool,
}

impl<C: HttpClient> PageShell<C> {
    pub fn new(store: MenuStore<C>, route: Route) -> Self {
        Self {
            store,
            browser: MenuBrowser::new(),
            admin: AdminPanel::new(),
            route,
            admin_mode: false,
        }
    }

    /// Shell for a request path, `None` when no page lives there
    pub fn open(store: MenuStore<C>, path: &str) -> Option<Self> {
        Route::parse(path).map(|route| Self::new(store, route))
    }

    pub fn store(&self) -> &MenuStore<C> {
        &self.store
    }

    pub fn is_admin_mode(&self) -> bool {
        self.admin_mode
    }

    pub fn browser_mut(&mut self) -> &mut MenuBrowser {
        &mut self.browser
    }

    /// Admin panel together with the store its actions run against
    pub fn admin_with_store(&mut self) -> (&mut AdminPanel, &MenuStore<C>) {
        (&mut self.admin, &self.store)
    }

    /// Initial fetch
    pub async fn load(&self) -> bool {
        self.store.load().await
    }

    pub fn toggle_mode(&mut self) {
        self.admin_mode = !self.admin_mode;
    }

    pub fn render(&self) -> Page {
        let state = self.store.state();
        if state.loading {
            return Page {
                header: None,
                screen: Screen::Loading,
            };
        }

        match self.route {
            Route::Admin => Page {
                header: None,
                screen: self.admin.render(&state.snapshot),
            },
            Route::Home => {
                let (toggle_label, screen) = if self.is_admin_mode() {
                    (VIEW_MENU_LABEL, self.admin.render(&state.snapshot))
                } else {
                    (ADMIN_MODE_LABEL, self.browser.render(&state.snapshot))
                };
                Page {
                    header: Some(Header {
                        title: RESTAURANT_TITLE,
                        toggle_label,
                    }),
                    screen,
                }
            }
        }
    }
}
