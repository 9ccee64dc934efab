//! Password visibility toggle.
//!
//! Flips an input between `password` and `text` and keeps two icons in step
//! with it: the masked icon is shown while the value is hidden, the revealed
//! icon while it is readable.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use crate::consts::{INPUT_TYPE_PASSWORD, INPUT_TYPE_TEXT};
use crate::error::GateError;
use crate::host::Host;

/// Display mode of the input after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Revealed,
}

pub struct PasswordToggle<H: Host> {
    input: H::Element,
    masked_icon: H::Element,
    revealed_icon: H::Element,
}

impl<H: Host> PasswordToggle<H> {
    /// # Errors
    ///
    /// [`GateError::MissingElement`] for the first id not in the page.
    pub fn bind(host: &H, input_id: &str, masked_icon_id: &str, revealed_icon_id: &str) -> Result<Self, GateError> {
        let find = |id: &str| {
            host.element_by_id(id)
                .ok_or_else(|| GateError::MissingElement(id.to_owned()))
        };
        Ok(Self {
            input: find(input_id)?,
            masked_icon: find(masked_icon_id)?,
            revealed_icon: find(revealed_icon_id)?,
        })
    }

    /// Switch modes. Anything other than `password` counts as revealed, so a
    /// second call always lands back where the first started.
    pub fn toggle(&self, host: &H) -> Visibility {
        let next = if host.input_type(&self.input) == INPUT_TYPE_PASSWORD {
            Visibility::Revealed
        } else {
            Visibility::Masked
        };
        self.apply(host, next);
        next
    }

    pub fn apply(&self, host: &H, visibility: Visibility) {
        let revealed = visibility == Visibility::Revealed;
        host.set_input_type(&self.input, if revealed { INPUT_TYPE_TEXT } else { INPUT_TYPE_PASSWORD });
        host.set_shown(&self.masked_icon, !revealed);
        host.set_shown(&self.revealed_icon, revealed);
    }
}

/// Resolve the three ids and toggle once.
///
/// # Errors
///
/// [`GateError::MissingElement`] when any id is absent; nothing is changed.
pub fn toggle_password_visibility<H: Host>(
    host: &H,
    input_id: &str,
    masked_icon_id: &str,
    revealed_icon_id: &str,
) -> Result<Visibility, GateError> {
    Ok(PasswordToggle::bind(host, input_id, masked_icon_id, revealed_icon_id)?.toggle(host))
}
