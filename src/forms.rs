//! Login and registration submit gating.
//!
//! DESIGN
//! ======
//! Each form's fields are resolved once into a binding struct when the gate
//! starts. A submit reads the current values, runs the checks from
//! [`crate::validate`], and rewrites every field's error class from scratch,
//! so the page always reflects exactly the latest submit.
//!
//! The error class lives on the input's parent element. Typing into any text
//! input clears the class on both that parent and the nearest `.input-group`
//! wrapper, since the markup uses either convention.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::config::{Classes, LoginIds, RegisterIds};
use crate::error::GateError;
use crate::host::{Cancelable, Host};
use crate::validate::{LoginCheck, RegistrationCheck};

/// An input and the container that carries its error class.
#[derive(Clone)]
pub struct Field<H: Host> {
    pub input: H::Element,
    pub container: Option<H::Element>,
}

impl<H: Host> Field<H> {
    /// # Errors
    ///
    /// [`GateError::MissingElement`] when no element has `id`.
    pub fn bind(host: &H, id: &str) -> Result<Self, GateError> {
        let input = host
            .element_by_id(id)
            .ok_or_else(|| GateError::MissingElement(id.to_owned()))?;
        let container = host.parent(&input);
        Ok(Self { input, container })
    }

    pub fn value(&self, host: &H) -> String {
        host.value(&self.input)
    }

    /// Set the error class on failure, clear it on success.
    pub fn mark(&self, host: &H, valid: bool, error_class: &str) {
        let Some(container) = &self.container else {
            return;
        };
        if valid {
            host.remove_class(container, error_class);
        } else {
            host.add_class(container, error_class);
        }
    }
}

/// Cancel `event` unless `passed`; returns `passed`.
fn gate(passed: bool, event: &impl Cancelable) -> bool {
    if !passed {
        event.cancel();
    }
    passed
}

pub struct LoginForm<H: Host> {
    pub email: Field<H>,
    pub password: Field<H>,
}

impl<H: Host> LoginForm<H> {
    /// # Errors
    ///
    /// [`GateError::MissingElement`] naming the first field not in the page.
    pub fn bind(host: &H, ids: &LoginIds) -> Result<Self, GateError> {
        Ok(Self {
            email: Field::bind(host, &ids.email)?,
            password: Field::bind(host, &ids.password)?,
        })
    }

    /// Check the current values, flag bad fields, and cancel `event` on any
    /// failure. Returns whether native submission may proceed.
    pub fn submit(&self, host: &H, classes: &Classes, event: &impl Cancelable) -> bool {
        let check = LoginCheck::evaluate(&self.email.value(host), &self.password.value(host));
        self.email.mark(host, check.email, &classes.error);
        self.password.mark(host, check.password, &classes.error);
        gate(check.passed(), event)
    }
}

pub struct RegistrationForm<H: Host> {
    pub name: Field<H>,
    pub email: Field<H>,
    pub password: Field<H>,
    pub confirm_password: Field<H>,
}

impl<H: Host> RegistrationForm<H> {
    /// # Errors
    ///
    /// [`GateError::MissingElement`] naming the first field not in the page.
    pub fn bind(host: &H, ids: &RegisterIds) -> Result<Self, GateError> {
        Ok(Self {
            name: Field::bind(host, &ids.name)?,
            email: Field::bind(host, &ids.email)?,
            password: Field::bind(host, &ids.password)?,
            confirm_password: Field::bind(host, &ids.confirm_password)?,
        })
    }

    /// Same gating as [`LoginForm::submit`]; every rule runs even after one
    /// fails, so several fields can be flagged at once.
    pub fn submit(&self, host: &H, classes: &Classes, event: &impl Cancelable) -> bool {
        let check = RegistrationCheck::evaluate(
            &self.name.value(host),
            &self.email.value(host),
            &self.password.value(host),
            &self.confirm_password.value(host),
        );
        self.name.mark(host, check.name, &classes.error);
        self.email.mark(host, check.email, &classes.error);
        self.password.mark(host, check.password, &classes.error);
        self.confirm_password.mark(host, check.confirm_password, &classes.error);
        gate(check.passed(), event)
    }
}

/// Drop the error class around `input` after an edit.
pub fn clear_field_error<H: Host>(host: &H, input: &H::Element, classes: &Classes) {
    if let Some(group) = host.closest_with_class(input, &classes.input_group) {
        host.remove_class(&group, &classes.error);
    }
    if let Some(parent) = host.parent(input) {
        host.remove_class(&parent, &classes.error);
    }
}

/// Attach [`clear_field_error`] to the input event of every text input.
/// Returns how many inputs were wired.
pub fn wire_error_clearing<H: Host>(host: &H, classes: &Classes) -> usize {
    let inputs = host.text_inputs(&classes.text_input);
    for input in &inputs {
        let host_in_cb = host.clone();
        let input_in_cb = input.clone();
        let classes_in_cb = classes.clone();
        host.on_input(
            input,
            Box::new(move || clear_field_error(&host_in_cb, &input_in_cb, &classes_in_cb)),
        );
    }
    inputs.len()
}
