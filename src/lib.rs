//! Browser-side form gate for the Help Line web application.
//!
//! This crate is compiled to WebAssembly and loaded by the server-rendered
//! landing, login, and registration pages. It owns only presentation glue:
//! switching page sections, gating form submission behind synchronous field
//! checks, toggling password visibility, and reading the CSRF cookie. The
//! server re-validates everything; nothing here is a security boundary.
//!
//! All document access goes through the [`host::Host`] trait so the gate logic
//! runs unchanged against the real DOM (`browser`, feature `hydrate`) and
//! against [`memory::MemoryHost`] in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | [`app::Gate`], built once at page load and shared by every handler |
//! | [`config`] | Element ids, class names, paths, and navigation mode |
//! | [`sections`] | View switcher: page sections and redirects |
//! | [`forms`] | Login/registration bindings and submit gating |
//! | [`validate`] | Pure field checks |
//! | [`password`] | Password visibility toggle |
//! | [`cookie`] | Cookie jar parsing and CSRF token lookup |
//! | [`host`] | Document abstraction |
//! | [`memory`] | In-memory document |
//! | [`consts`] | Default ids, classes, and limits |

pub mod app;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod cookie;
pub mod error;
pub mod forms;
pub mod host;
pub mod memory;
pub mod password;
pub mod sections;
pub mod validate;

pub use app::Gate;
pub use config::{Config, NavigationMode};
pub use error::GateError;
pub use host::{Cancelable, Host};
