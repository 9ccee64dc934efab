use super::*;
use crate::config::NavigationMode;
use crate::memory::{MemoryEvent, MemoryHost, NodeId};
use crate::sections::{Route, Routes};

// =============================================================
// Helpers
// =============================================================

/// Single-page shell with all three sections and both forms.
struct Shell {
    host: MemoryHost,
    landing: NodeId,
    login: NodeId,
    register: NodeId,
    login_email: NodeId,
    login_password: NodeId,
    eye: NodeId,
    eye_off: NodeId,
}

fn field(host: &MemoryHost, parent: NodeId, id: &str) -> NodeId {
    let group = host.append(Some(parent), "div");
    host.add_class(&group, "input-group");
    host.append_with_id(Some(group), "input", id)
}

fn shell() -> Shell {
    let host = MemoryHost::new();
    let body = host.append(None, "body");
    let landing = host.append_with_id(Some(body), "section", "landingPage");
    let login = host.append_with_id(Some(body), "section", "loginPage");
    let register = host.append_with_id(Some(body), "section", "registerPage");
    for section in [landing, login, register] {
        host.add_class(&section, "page");
    }
    host.add_class(&landing, "active");

    let login_email = field(&host, login, "loginEmail");
    let login_password = field(&host, login, "loginPassword");
    host.set_input_type(&login_password, "password");
    let eye = host.append_with_id(Some(login), "svg", "eyeIcon");
    let eye_off = host.append_with_id(Some(login), "svg", "eyeOffIcon");
    host.set_shown(&eye_off, false);

    for id in ["registerName", "registerEmail", "registerPassword", "registerConfirmPassword"] {
        field(&host, register, id);
    }
    Shell { host, landing, login, register, login_email, login_password, eye, eye_off }
}

/// Standalone login document, as served at `/login/`.
fn login_only() -> (MemoryHost, NodeId, NodeId) {
    let host = MemoryHost::new();
    let form = host.append_with_id(None, "form", "loginForm");
    let email = field(&host, form, "loginEmail");
    let password = field(&host, form, "loginPassword");
    (host, email, password)
}

// =============================================================
// init
// =============================================================

#[test]
fn init_binds_everything_in_a_shell() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    assert!(gate.has_login_form());
    assert!(gate.has_registration_form());
    assert_eq!(
        gate.switcher().routes(),
        Routes { landing: Route::InPage, login: Route::InPage, register: Route::InPage }
    );
}

#[test]
fn init_on_login_page_leaves_registration_unbound() {
    let (host, _, _) = login_only();
    let gate = Gate::init(host, Config::default());
    assert!(gate.has_login_form());
    assert!(!gate.has_registration_form());
    assert_eq!(
        gate.switcher().routes(),
        Routes { landing: Route::Redirect, login: Route::Redirect, register: Route::Redirect }
    );
}

#[test]
fn init_wires_error_clearing() {
    let (host, email, _) = login_only();
    let gate = Gate::init(host.clone(), Config::default());
    gate.submit_login(&MemoryEvent::new());
    let Some(group) = host.parent(&email) else {
        panic!("email has a parent");
    };
    assert!(host.has_class(group, "error"));
    host.type_text(email, "x");
    assert!(!host.has_class(group, "error"));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn shell_navigation_toggles_sections() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    gate.navigate_to_register();
    assert!(shell.host.has_class(shell.register, "active"));
    assert!(!shell.host.has_class(shell.landing, "active"));
    gate.navigate_to_login();
    assert!(shell.host.has_class(shell.login, "active"));
    assert!(!shell.host.has_class(shell.register, "active"));
    assert!(shell.host.navigations().is_empty());
}

#[test]
fn standalone_page_navigation_redirects() {
    let (host, _, _) = login_only();
    let gate = Gate::init(host.clone(), Config::default());
    assert_eq!(gate.navigate_to_register(), Navigation::Redirected("/register/".to_owned()));
    assert_eq!(gate.navigate_to_landing(), Navigation::Redirected("/".to_owned()));
    assert_eq!(host.navigations(), vec!["/register/".to_owned(), "/".to_owned()]);
}

/// Landing template served on its own: only the landing section is present.
fn landing_only() -> (MemoryHost, NodeId) {
    let host = MemoryHost::new();
    let body = host.append(None, "body");
    let landing = host.append_with_id(Some(body), "section", "landingPage");
    host.add_class(&landing, "page");
    host.add_class(&landing, "active");
    (host, landing)
}

#[test]
fn landing_only_page_redirects_to_login() {
    let (host, landing) = landing_only();
    let gate = Gate::init(host.clone(), Config::default());
    assert_eq!(gate.navigate_to_login(), Navigation::Redirected("/login/".to_owned()));
    assert_eq!(host.navigations(), vec!["/login/".to_owned()]);
    assert!(host.has_class(landing, "active"));
}

#[test]
fn landing_only_page_redirects_to_register() {
    let (host, _) = landing_only();
    let gate = Gate::init(host.clone(), Config::default());
    assert_eq!(gate.navigate_to_register(), Navigation::Redirected("/register/".to_owned()));
    assert_eq!(host.navigations(), vec!["/register/".to_owned()]);
}

#[test]
fn landing_only_page_keeps_landing_in_page() {
    let (host, landing) = landing_only();
    let gate = Gate::init(host.clone(), Config::default());
    assert_eq!(gate.navigate_to_landing(), Navigation::Shown("landingPage".to_owned()));
    assert!(host.navigations().is_empty());
    assert!(host.has_class(landing, "active"));
}

#[test]
fn configured_mode_overrides_present_sections() {
    let shell = shell();
    let config = Config { mode: Some(NavigationMode::MultiPage), ..Config::default() };
    let gate = Gate::init(shell.host.clone(), config);
    gate.navigate_to_login();
    assert_eq!(shell.host.navigations(), vec!["/login/".to_owned()]);
    assert!(shell.host.has_class(shell.landing, "active"));
}

#[test]
fn show_section_unknown_id_keeps_current_screen() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    assert_eq!(gate.show_section("nowhere"), Navigation::Missing("nowhere".to_owned()));
    assert!(shell.host.has_class(shell.landing, "active"));
    assert!(!shell.host.has_class(shell.login, "active"));
}

// =============================================================
// Submits
// =============================================================

#[test]
fn login_submit_gates_on_values() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    shell.host.set_value(shell.login_email, "x@y.com");
    shell.host.set_value(shell.login_password, "secret");
    let event = MemoryEvent::new();
    assert!(gate.submit_login(&event));
    assert!(!event.cancelled());
}

#[test]
fn unbound_forms_submit_natively() {
    let host = MemoryHost::new();
    let gate = Gate::init(host, Config::default());
    let event = MemoryEvent::new();
    assert!(gate.submit_login(&event));
    assert!(gate.submit_registration(&event));
    assert!(!event.cancelled());
}

#[test]
fn registration_submit_rejects_mismatch() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    for (id, value) in [
        ("registerName", "Ada"),
        ("registerEmail", "ada@x.io"),
        ("registerPassword", "abcdefgh"),
        ("registerConfirmPassword", "abcdefgx"),
    ] {
        let Some(node) = shell.host.element_by_id(id) else {
            panic!("{id} present");
        };
        shell.host.set_value(node, value);
    }
    let event = MemoryEvent::new();
    assert!(!gate.submit_registration(&event));
    assert!(event.cancelled());
}

// =============================================================
// Password and cookies
// =============================================================

#[test]
fn login_password_toggle_uses_configured_icons() {
    let shell = shell();
    let gate = Gate::init(shell.host.clone(), Config::default());
    assert_eq!(gate.toggle_login_password().unwrap(), Visibility::Revealed);
    assert_eq!(shell.host.input_type(&shell.login_password), "text");
    assert!(!shell.host.is_shown(shell.eye));
    assert!(shell.host.is_shown(shell.eye_off));
    assert_eq!(gate.toggle_login_password().unwrap(), Visibility::Masked);
    assert_eq!(shell.host.input_type(&shell.login_password), "password");
}

#[test]
fn toggle_on_page_without_icons_errors() {
    let (host, _, _) = login_only();
    let gate = Gate::init(host, Config::default());
    assert!(matches!(gate.toggle_login_password(), Err(GateError::MissingElement(_))));
}

#[test]
fn csrf_token_uses_configured_cookie_name() {
    let host = MemoryHost::new();
    host.set_cookies("csrftoken=default; xsrf=custom");
    let config = Config { csrf_cookie: "xsrf".to_owned(), ..Config::default() };
    let gate = Gate::init(host, config);
    assert_eq!(gate.csrf_token(), Some("custom".to_owned()));
    assert_eq!(gate.read_cookie("csrftoken"), Some("default".to_owned()));
}

// =============================================================
// install_once
// =============================================================

#[test]
fn install_once_fills_an_empty_slot() {
    let (host, _, _) = login_only();
    let slot = RefCell::new(None);
    assert!(install_once(&slot, host, Config::default()));
    assert!(slot.borrow().as_ref().is_some_and(Gate::has_login_form));
}

#[test]
fn repeated_install_keeps_first_gate_and_its_listeners() {
    let (host, email, _) = login_only();
    let slot = RefCell::new(None);
    install_once(&slot, host.clone(), Config::default());
    let wired = host.listener_count(email);
    assert_eq!(wired, 1);

    let other = Config { csrf_cookie: "xsrf".to_owned(), ..Config::default() };
    assert!(!install_once(&slot, host.clone(), other));
    assert_eq!(host.listener_count(email), wired);
    assert!(slot.borrow().as_ref().is_some_and(|gate| gate.config().csrf_cookie == "csrftoken"));
}
