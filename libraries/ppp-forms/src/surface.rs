//! The page the controller drives.

use crate::form::FormId;

/// The UI collaborator the controller talks to.
///
/// Implementations own the actual document: they decide how a form is
/// shown, where output text lands and how submissions reach
/// [`FormController::submit`](crate::FormController::submit).
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface: Send + Sync {
    /// Route future submissions of `form` to the controller instead of the
    /// default page navigation.
    fn intercept(&self, form: FormId);

    /// Show or hide the section holding `form`.
    fn set_visible(&self, form: FormId, visible: bool);

    /// Replace the text of the element `output_id`.
    fn render(&self, output_id: &str, text: &str);
}
