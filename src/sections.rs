//! View switcher.
//!
//! Shows one page section at a time by moving the active class. A screen
//! whose section is not in the current document is reached by a full-page
//! redirect instead, so the same script serves a single-page shell and the
//! separate landing, login, and registration templates.
//!
//! Which screens are in the page is decided once, when the switcher is built.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::config::{Config, NavigationMode, Paths, Screen, Sections};
use crate::host::Host;

/// What a navigation call ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The section with this id is now the only active one.
    Shown(String),
    /// A full-page navigation to this path was issued.
    Redirected(String),
    /// The section id was not in the document; nothing changed.
    Missing(String),
}

/// How one screen is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Toggle the screen's section in this document.
    InPage,
    /// Navigate to the screen's path.
    Redirect,
}

/// Route per screen, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Routes {
    pub landing: Route,
    pub login: Route,
    pub register: Route,
}

impl Routes {
    /// Resolve every screen's route. A forced mode applies to all screens;
    /// otherwise each screen is in-page exactly when its section exists.
    pub fn resolve<H: Host>(host: &H, config: &Config) -> Self {
        let route = |screen: Screen| match config.mode {
            Some(NavigationMode::SinglePage) => Route::InPage,
            Some(NavigationMode::MultiPage) => Route::Redirect,
            None if host.element_by_id(config.sections.get(screen)).is_some() => Route::InPage,
            None => Route::Redirect,
        };
        Self {
            landing: route(Screen::Landing),
            login: route(Screen::Login),
            register: route(Screen::Register),
        }
    }

    #[must_use]
    pub fn get(&self, screen: Screen) -> Route {
        match screen {
            Screen::Landing => self.landing,
            Screen::Login => self.login,
            Screen::Register => self.register,
        }
    }
}

pub struct ViewSwitcher<H: Host> {
    host: H,
    routes: Routes,
    section_class: String,
    active_class: String,
    sections: Sections,
    paths: Paths,
}

impl<H: Host> ViewSwitcher<H> {
    /// Build the switcher, probing the document for each section once.
    pub fn new(host: H, config: &Config) -> Self {
        let routes = Routes::resolve(&host, config);
        Self {
            host,
            routes,
            section_class: config.classes.section.clone(),
            active_class: config.classes.active.clone(),
            sections: config.sections.clone(),
            paths: config.paths.clone(),
        }
    }

    pub fn routes(&self) -> Routes {
        self.routes
    }

    /// Make `id` the only active section.
    ///
    /// The lookup happens before anything is deactivated, so an unknown id
    /// leaves the current screen as it was.
    pub fn show_section(&self, id: &str) -> Navigation {
        let Some(target) = self.host.element_by_id(id) else {
            log::warn!("page section not found: {id}");
            return Navigation::Missing(id.to_owned());
        };
        for section in self.host.elements_with_class(&self.section_class) {
            self.host.remove_class(&section, &self.active_class);
        }
        self.host.add_class(&target, &self.active_class);
        Navigation::Shown(id.to_owned())
    }

    pub fn navigate_to(&self, screen: Screen) -> Navigation {
        match self.routes.get(screen) {
            Route::InPage => self.show_section(self.sections.get(screen)),
            Route::Redirect => {
                let path = self.paths.get(screen);
                self.host.navigate(path);
                Navigation::Redirected(path.to_owned())
            }
        }
    }

    pub fn navigate_to_landing(&self) -> Navigation {
        self.navigate_to(Screen::Landing)
    }

    pub fn navigate_to_login(&self) -> Navigation {
        self.navigate_to(Screen::Login)
    }

    pub fn navigate_to_register(&self) -> Navigation {
        self.navigate_to(Screen::Register)
    }
}
