//! Page configuration passed to `initGate`.
//!
//! Every field has a default matching the stock templates, so pages only
//! supply the pieces they rename. The JSON form uses camelCase keys since it
//! is written inline in the page markup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::GateError;

/// Forces how `navigate_to_*` reaches every screen.
///
/// Without a forced mode, each screen is routed by whether its own section
/// was in the document at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// All sections live in one document; navigation toggles the active one.
    SinglePage,
    /// Each screen is its own document; navigation is a full redirect.
    MultiPage,
}

/// One of the fixed screens the view switcher knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Register,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Classes {
    pub section: String,
    pub active: String,
    pub error: String,
    pub input_group: String,
    pub text_input: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            section: consts::SECTION_CLASS.to_owned(),
            active: consts::ACTIVE_CLASS.to_owned(),
            error: consts::ERROR_CLASS.to_owned(),
            input_group: consts::INPUT_GROUP_CLASS.to_owned(),
            text_input: consts::TEXT_INPUT_CLASS.to_owned(),
        }
    }
}

/// Element id of each screen's section.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub landing: String,
    pub login: String,
    pub register: String,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            landing: consts::LANDING_SECTION.to_owned(),
            login: consts::LOGIN_SECTION.to_owned(),
            register: consts::REGISTER_SECTION.to_owned(),
        }
    }
}

impl Sections {
    #[must_use]
    pub fn get(&self, screen: Screen) -> &str {
        match screen {
            Screen::Landing => &self.landing,
            Screen::Login => &self.login,
            Screen::Register => &self.register,
        }
    }
}

/// Redirect target of each screen when its section is not in the document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub landing: String,
    pub login: String,
    pub register: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            landing: consts::LANDING_PATH.to_owned(),
            login: consts::LOGIN_PATH.to_owned(),
            register: consts::REGISTER_PATH.to_owned(),
        }
    }
}

impl Paths {
    #[must_use]
    pub fn get(&self, screen: Screen) -> &str {
        match screen {
            Screen::Landing => &self.landing,
            Screen::Login => &self.login,
            Screen::Register => &self.register,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginIds {
    pub email: String,
    pub password: String,
    pub masked_icon: String,
    pub revealed_icon: String,
}

impl Default for LoginIds {
    fn default() -> Self {
        Self {
            email: consts::LOGIN_EMAIL.to_owned(),
            password: consts::LOGIN_PASSWORD.to_owned(),
            masked_icon: consts::LOGIN_MASKED_ICON.to_owned(),
            revealed_icon: consts::LOGIN_REVEALED_ICON.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterIds {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for RegisterIds {
    fn default() -> Self {
        Self {
            name: consts::REGISTER_NAME.to_owned(),
            email: consts::REGISTER_EMAIL.to_owned(),
            password: consts::REGISTER_PASSWORD.to_owned(),
            confirm_password: consts::REGISTER_CONFIRM_PASSWORD.to_owned(),
        }
    }
}

/// Everything the gate needs to know about the host page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// `None` routes each screen by whether its section is in the document.
    pub mode: Option<NavigationMode>,
    pub classes: Classes,
    pub sections: Sections,
    pub paths: Paths,
    pub login: LoginIds,
    pub register: RegisterIds,
    pub csrf_cookie: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            classes: Classes::default(),
            sections: Sections::default(),
            paths: Paths::default(),
            login: LoginIds::default(),
            register: RegisterIds::default(),
            csrf_cookie: consts::CSRF_COOKIE.to_owned(),
        }
    }
}

impl Config {
    /// Parse a config from page-supplied JSON. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Config`] when the JSON is malformed or a value has
    /// the wrong shape.
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse optional JSON, falling back to defaults when absent or blank.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_json`].
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, GateError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }
}
