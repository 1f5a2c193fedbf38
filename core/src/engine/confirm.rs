// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Identity confirmation title
pub const IDENTITY_TITLE: &str = "Your\naddress";

/// Parameters for a confirmation prompt
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ConfirmParams<'a> {
    /// Prompt title
    pub title: &'a str,
    /// Prompt body
    pub body: &'a str,
    /// Body may be scrolled where it exceeds the display
    pub scrollable: bool,
}

impl<'a> ConfirmParams<'a> {
    /// Create new confirmation parameters
    pub const fn new(title: &'a str, body: &'a str, scrollable: bool) -> Self {
        Self {
            title,
            body,
            scrollable,
        }
    }
}

/// [`Confirm`] trait provides blocking user confirmation for [`Engine`][super::Engine] operations.
///
/// Implementations render the provided parameters and block until the user
/// accepts (`true`) or rejects (`false`). Abandoned prompts must report `false`.
pub trait Confirm {
    /// Display a prompt, returning `true` where the user approves
    fn confirm(&mut self, params: &ConfirmParams<'_>) -> bool;
}

impl<T: Confirm + ?Sized> Confirm for &mut T {
    fn confirm(&mut self, params: &ConfirmParams<'_>) -> bool {
        T::confirm(self, params)
    }
}
