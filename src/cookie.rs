//! Cookie jar lookup and the CSRF token.
//!
//! The jar is parsed on every call; `document.cookie` can change between
//! events and nothing here caches it.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::host::Host;

/// Find `name` in a raw `document.cookie` string and URL-decode its value.
///
/// Entries are `;`-separated and trimmed. The first entry whose key is exactly
/// `name` wins. Malformed escapes decode lossily rather than failing.
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    raw.split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(name)?.strip_prefix('='))
        .map(|value| String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned())
}

/// Read `name` from the host's current cookies.
pub fn host_cookie<H: Host>(host: &H, name: &str) -> Option<String> {
    read_cookie(&host.cookies(), name)
}
