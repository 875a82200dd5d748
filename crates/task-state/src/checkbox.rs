//! Checkbox abstraction
//!
//! Implemented by the frontend for `HtmlInputElement` and by test fakes.

/// A checkbox inside a task-list item
pub trait TaskCheckbox {
    /// Make the checkbox interactive (drop any `disabled` attribute)
    fn enable(&self);

    fn is_checked(&self) -> bool;

    fn set_checked(&self, checked: bool);
}
