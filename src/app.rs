//! The gate a page builds once at startup.
//!
//! [`Gate::init`] does all document probing up front: it fixes each screen's
//! navigation route, binds whichever forms the page contains, and wires error
//! clearing on text inputs. Handlers afterwards only read values and flip
//! classes.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;

use crate::config::Config;
use crate::cookie;
use crate::error::GateError;
use crate::forms::{self, LoginForm, RegistrationForm};
use crate::host::{Cancelable, Host};
use crate::password::{self, Visibility};
use crate::sections::{Navigation, ViewSwitcher};

pub struct Gate<H: Host> {
    host: H,
    config: Config,
    switcher: ViewSwitcher<H>,
    login: Option<LoginForm<H>>,
    registration: Option<RegistrationForm<H>>,
}

impl<H: Host> Gate<H> {
    /// Bind to the current document. Forms missing from the page stay unbound.
    pub fn init(host: H, config: Config) -> Self {
        let switcher = ViewSwitcher::new(host.clone(), &config);
        log::debug!("navigation routes: {:?}", switcher.routes());

        let login = match LoginForm::bind(&host, &config.login) {
            Ok(form) => Some(form),
            Err(err) => {
                log::debug!("login form not bound: {err}");
                None
            }
        };
        let registration = match RegistrationForm::bind(&host, &config.register) {
            Ok(form) => Some(form),
            Err(err) => {
                log::debug!("registration form not bound: {err}");
                None
            }
        };

        let wired = forms::wire_error_clearing(&host, &config.classes);
        log::debug!("error clearing wired on {wired} inputs");

        Self { host, config, switcher, login, registration }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_login_form(&self) -> bool {
        self.login.is_some()
    }

    pub fn has_registration_form(&self) -> bool {
        self.registration.is_some()
    }

    // --- View switcher ---

    pub fn switcher(&self) -> &ViewSwitcher<H> {
        &self.switcher
    }

    pub fn show_section(&self, id: &str) -> Navigation {
        self.switcher.show_section(id)
    }

    pub fn navigate_to_landing(&self) -> Navigation {
        self.switcher.navigate_to_landing()
    }

    pub fn navigate_to_login(&self) -> Navigation {
        self.switcher.navigate_to_login()
    }

    pub fn navigate_to_register(&self) -> Navigation {
        self.switcher.navigate_to_register()
    }

    // --- Form gatekeeper ---

    /// Gate the login submit. An unbound form is let through for the server
    /// to judge.
    pub fn submit_login(&self, event: &impl Cancelable) -> bool {
        let Some(form) = &self.login else {
            log::warn!("login submit with no bound login form");
            return true;
        };
        form.submit(&self.host, &self.config.classes, event)
    }

    /// Gate the registration submit. An unbound form is let through.
    pub fn submit_registration(&self, event: &impl Cancelable) -> bool {
        let Some(form) = &self.registration else {
            log::warn!("registration submit with no bound registration form");
            return true;
        };
        form.submit(&self.host, &self.config.classes, event)
    }

    /// # Errors
    ///
    /// [`GateError::MissingElement`] when any of the ids is not in the page.
    pub fn toggle_password_visibility(
        &self,
        input_id: &str,
        masked_icon_id: &str,
        revealed_icon_id: &str,
    ) -> Result<Visibility, GateError> {
        password::toggle_password_visibility(&self.host, input_id, masked_icon_id, revealed_icon_id)
    }

    /// Toggle the login password using the configured icon ids.
    ///
    /// # Errors
    ///
    /// Same as [`Gate::toggle_password_visibility`].
    pub fn toggle_login_password(&self) -> Result<Visibility, GateError> {
        let ids = &self.config.login;
        self.toggle_password_visibility(&ids.password, &ids.masked_icon, &ids.revealed_icon)
    }

    // --- Cookies ---

    pub fn read_cookie(&self, name: &str) -> Option<String> {
        cookie::host_cookie(&self.host, name)
    }

    pub fn csrf_token(&self) -> Option<String> {
        cookie::host_cookie(&self.host, &self.config.csrf_cookie)
    }
}

/// Build a gate into `slot` unless one is already there. Returns whether a
/// new gate was installed.
///
/// Input listeners are never removed, so a second build would stack another
/// set on every field.
pub fn install_once<H: Host>(slot: &RefCell<Option<Gate<H>>>, host: H, config: Config) -> bool {
    if slot.borrow().is_some() {
        log::warn!("gate already initialized; ignoring repeated init");
        return false;
    }
    let gate = Gate::init(host, config);
    *slot.borrow_mut() = Some(gate);
    true
}
