//! Browser bindings: the web-sys [`Host`] and the functions the page calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates load the WASM module and call `initGate` once the document is ready,
//! then reference the exported handlers from inline attributes, e.g.
//! `<form onsubmit="return submitLogin(event)">`. The gate it builds
//! lives in a thread-local slot for the lifetime of the page.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that can throw are logged and skipped; a failed class toggle
//! should never take the page down. Only `initGate` reports errors to JavaScript.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlDocument, HtmlElement, HtmlInputElement, Window};

use crate::app::{self, Gate};
use crate::config::Config;
use crate::cookie;
use crate::error::GateError;
use crate::host::{Cancelable, Host};
use crate::consts::CSRF_HEADER;
use crate::validate;

thread_local! {
    static GATE: RefCell<Option<Gate<BrowserHost>>> = const { RefCell::new(None) };
}

fn log_js_error(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

/// [`Host`] backed by the live `window.document`.
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// # Errors
    ///
    /// [`GateError::NoDocument`] outside a browser window.
    pub fn new() -> Result<Self, GateError> {
        let window = web_sys::window().ok_or(GateError::NoDocument)?;
        let document = window.document().ok_or(GateError::NoDocument)?;
        Ok(Self { window, document })
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("query {selector} failed: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }
}

impl Host for BrowserHost {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        self.query_all(&format!(".{class}"))
    }

    fn text_inputs(&self, text_input_class: &str) -> Vec<Element> {
        self.query_all(&format!(".{text_input_class}, input"))
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn closest_with_class(&self, element: &Element, class: &str) -> Option<Element> {
        match element.closest(&format!(".{class}")) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("closest .{class} failed: {err:?}");
                None
            }
        }
    }

    fn add_class(&self, element: &Element, class: &str) {
        log_js_error("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&self, element: &Element, class: &str) {
        log_js_error("classList.remove", element.class_list().remove_1(class));
    }

    fn value(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn input_type(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::type_)
            .unwrap_or_default()
    }

    fn set_input_type(&self, element: &Element, kind: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_type(kind);
        }
    }

    fn set_shown(&self, element: &Element, shown: bool) {
        // Icons are usually SVG, which is not an HtmlElement; fall back to the
        // style attribute for those.
        let display = if shown { "block" } else { "none" };
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => log_js_error("style.display", html.style().set_property("display", display)),
            None => log_js_error("style attribute", element.set_attribute("style", &format!("display: {display}"))),
        }
    }

    fn cookies(&self) -> String {
        let Some(html) = self.document.dyn_ref::<HtmlDocument>() else {
            return String::new();
        };
        match html.cookie() {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("document.cookie failed: {err:?}");
                String::new()
            }
        }
    }

    fn navigate(&self, path: &str) {
        log_js_error("location.href", self.window.location().set_href(path));
    }

    fn on_input(&self, element: &Element, handler: Box<dyn Fn()>) {
        let cb = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        log_js_error(
            "addEventListener(input)",
            element.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref()),
        );
        // Listeners live as long as the page.
        cb.forget();
    }
}

impl Cancelable for Event {
    fn cancel(&self) {
        self.prevent_default();
    }
}

fn with_gate<T>(fallback: T, f: impl FnOnce(&Gate<BrowserHost>) -> T) -> T {
    GATE.with(|slot| match slot.borrow().as_ref() {
        Some(gate) => f(gate),
        None => {
            log::warn!("helpline-client used before initGate()");
            fallback
        }
    })
}

/// Build the gate for the current document. Call once when the DOM is ready;
/// later calls keep the first gate and wire nothing new.
///
/// `config` is optional JSON; see [`Config`] for keys.
///
/// # Errors
///
/// Throws when the config does not parse or there is no document.
#[wasm_bindgen(js_name = initGate)]
pub fn init(config: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        // Already initialized by an earlier call.
        log::debug!("console logger: {err}");
    }

    let config = Config::from_optional_json(config.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let host = BrowserHost::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    GATE.with(|slot| app::install_once(slot, host, config));
    Ok(())
}

#[wasm_bindgen(js_name = showSection)]
pub fn show_section(id: &str) {
    with_gate((), |gate| {
        gate.show_section(id);
    });
}

#[wasm_bindgen(js_name = navigateToLanding)]
pub fn navigate_to_landing() {
    with_gate((), |gate| {
        gate.navigate_to_landing();
    });
}

#[wasm_bindgen(js_name = navigateToLogin)]
pub fn navigate_to_login() {
    with_gate((), |gate| {
        gate.navigate_to_login();
    });
}

#[wasm_bindgen(js_name = navigateToRegister)]
pub fn navigate_to_register() {
    with_gate((), |gate| {
        gate.navigate_to_register();
    });
}

/// Returns whether the login form may submit; cancels `event` otherwise.
#[wasm_bindgen(js_name = submitLogin)]
pub fn submit_login(event: &Event) -> bool {
    with_gate(true, |gate| gate.submit_login(event))
}

/// Returns whether the registration form may submit; cancels `event` otherwise.
#[wasm_bindgen(js_name = submitRegistration)]
pub fn submit_registration(event: &Event) -> bool {
    with_gate(true, |gate| gate.submit_registration(event))
}

#[wasm_bindgen(js_name = togglePasswordVisibility)]
pub fn toggle_password_visibility(input_id: &str, shown_icon_id: &str, hidden_icon_id: &str) {
    with_gate((), |gate| {
        if let Err(err) = gate.toggle_password_visibility(input_id, shown_icon_id, hidden_icon_id) {
            log::warn!("password toggle: {err}");
        }
    });
}

/// Login-page shortcut using the configured password and icon ids.
#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password() {
    with_gate((), |gate| {
        if let Err(err) = gate.toggle_login_password() {
            log::warn!("password toggle: {err}");
        }
    });
}

/// Usable before `init`; reads `document.cookie` directly.
#[wasm_bindgen(js_name = readCookie)]
pub fn read_cookie(name: &str) -> Option<String> {
    match BrowserHost::new() {
        Ok(host) => cookie::host_cookie(&host, name),
        Err(err) => {
            log::warn!("readCookie: {err}");
            None
        }
    }
}

#[wasm_bindgen(js_name = csrfToken)]
pub fn csrf_token() -> Option<String> {
    with_gate(None, Gate::csrf_token)
}

/// Request header the server reads the `csrfToken()` value from.
#[wasm_bindgen(js_name = csrfHeaderName)]
pub fn csrf_header_name() -> String {
    CSRF_HEADER.to_owned()
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(email: &str) -> bool {
    validate::is_valid_email(email)
}
