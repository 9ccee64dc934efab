//! Default element ids, class names, and limits shared with the page markup.

// --- Classes ---

/// Marks every togglable page section.
pub const SECTION_CLASS: &str = "page";
/// Marks the section currently on screen.
pub const ACTIVE_CLASS: &str = "active";
/// Set on a field container while its input is invalid.
pub const ERROR_CLASS: &str = "error";
/// Wrapper around a label/input pair in the form markup.
pub const INPUT_GROUP_CLASS: &str = "input-group";
/// Styled text inputs that are not plain `<input>` elements.
pub const TEXT_INPUT_CLASS: &str = "input";

// --- Sections ---

pub const LANDING_SECTION: &str = "landingPage";
pub const LOGIN_SECTION: &str = "loginPage";
pub const REGISTER_SECTION: &str = "registerPage";

// --- Paths ---

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login/";
pub const REGISTER_PATH: &str = "/register/";

// --- Login form ---

pub const LOGIN_EMAIL: &str = "loginEmail";
pub const LOGIN_PASSWORD: &str = "loginPassword";
pub const LOGIN_MASKED_ICON: &str = "eyeIcon";
pub const LOGIN_REVEALED_ICON: &str = "eyeOffIcon";

// --- Registration form ---

pub const REGISTER_NAME: &str = "registerName";
pub const REGISTER_EMAIL: &str = "registerEmail";
pub const REGISTER_PASSWORD: &str = "registerPassword";
pub const REGISTER_CONFIRM_PASSWORD: &str = "registerConfirmPassword";

// --- Limits ---

/// Minimum registration password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

// --- CSRF ---

/// Cookie the server sets with the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the server expects the token echoed in for non-form requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

// --- Input types ---

pub const INPUT_TYPE_PASSWORD: &str = "password";
pub const INPUT_TYPE_TEXT: &str = "text";
