//! Document abstraction.
//!
//! The gate only needs a small slice of the DOM. Putting that slice behind a
//! trait lets the same handlers drive the browser document and the in-memory
//! one used by tests. Implementations are cheap handles: cloning a host or an
//! element never copies document state.

/// The document operations the gate relies on.
///
/// Element handles are opaque. Mutations take `&self` because the underlying
/// document is shared, mutable state owned by the page.
pub trait Host: Clone + 'static {
    type Element: Clone + 'static;

    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;

    /// Every `<input>` plus any element carrying `text_input_class`.
    fn text_inputs(&self, text_input_class: &str) -> Vec<Self::Element>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The element itself or its nearest ancestor carrying `class`.
    fn closest_with_class(&self, element: &Self::Element, class: &str) -> Option<Self::Element>;

    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Current value of an input; empty for anything that is not an input.
    fn value(&self, element: &Self::Element) -> String;

    /// The input's `type` attribute.
    fn input_type(&self, element: &Self::Element) -> String;
    fn set_input_type(&self, element: &Self::Element, kind: &str);

    /// Show or hide an element via its inline display style.
    fn set_shown(&self, element: &Self::Element, shown: bool);

    /// Raw `document.cookie` string.
    fn cookies(&self) -> String;

    /// Full-page navigation to `path`.
    fn navigate(&self, path: &str);

    /// Run `handler` after every user edit of `element`.
    fn on_input(&self, element: &Self::Element, handler: Box<dyn Fn()>);
}

/// A submit event whose default action can be suppressed.
pub trait Cancelable {
    fn cancel(&self);
}
