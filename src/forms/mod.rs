//! Form state for the create/edit screens.
//!
//! Each form keeps its raw input values, validates synchronously and builds the
//! request payload. [`submit`] ties validation to the network call so a form
//! with errors never reaches the backend.

mod expense;
mod house;
mod house_resident;
mod payment;
mod resident;

pub use expense::{ExpenseForm, MESSAGES as EXPENSE_MESSAGES};
pub use house::{HouseForm, MESSAGES as HOUSE_MESSAGES};
pub use house_resident::{
    available_residents, replace_errors, scope_server_errors, AddResidentForm, RemoveResidentForm,
};
pub use payment::{link_current_residents, PaymentForm, ResidentOption, MESSAGES as PAYMENT_MESSAGES};
pub use resident::{ResidentForm, MESSAGES as RESIDENT_MESSAGES};

use std::future::Future;

use crate::error::ApiError;
use crate::toast::Toast;
use crate::validation::FieldErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u64),
}

impl FormMode {
    pub fn from_id(id: Option<u64>) -> Self {
        match id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Toast texts of one form screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub invalid: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    /// Local validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend answered 422 with per-field messages.
    Rejected(FieldErrors),
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Error map the form should display, if this outcome replaces it.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) | Self::Rejected(errors) => Some(errors),
            Self::Saved | Self::Failed(_) => None,
        }
    }

    pub fn toast(&self, messages: &FormMessages, mode: FormMode) -> Option<Toast> {
        match self {
            Self::Saved if mode.is_editing() => Some(Toast::success(messages.updated)),
            Self::Saved => Some(Toast::success(messages.created)),
            Self::Invalid(_) => None,
            Self::Rejected(_) => Some(Toast::error(messages.invalid)),
            Self::Failed(err) if err.is_aborted() => None,
            Self::Failed(_) if mode.is_editing() => Some(Toast::error(messages.update_failed)),
            Self::Failed(_) => Some(Toast::error(messages.create_failed)),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Runs `send` only when `errors` is empty and classifies its result.
pub async fn submit<F, Fut>(errors: FieldErrors, send: F) -> SubmitOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }
    match send().await {
        Ok(()) => SubmitOutcome::Saved,
        Err(ApiError::Validation(errors)) => SubmitOutcome::Rejected(errors),
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::toast::ToastLevel;

    const MESSAGES: FormMessages = FormMessages {
        created: "created",
        updated: "updated",
        invalid: "fix the form",
        create_failed: "create failed",
        update_failed: "update failed",
    };

    #[test]
    fn empty_required_field_never_reaches_the_network() {
        let calls = Cell::new(0);
        let form = ResidentForm {
            name: String::new(),
            phone_number: "081234567890".to_string(),
            has_photo: true,
            ..ResidentForm::default()
        };

        let outcome = block_on(submit(form.validate(FormMode::Create), || async {
            calls.set(calls.get() + 1);
            Ok(())
        }));

        assert_eq!(calls.get(), 0);
        let errors = outcome.field_errors().expect("validation errors");
        assert!(errors.has("name"));
        assert_eq!(outcome.toast(&MESSAGES, FormMode::Create), None);
    }

    #[test]
    fn server_validation_maps_into_field_errors() {
        let form = ResidentForm {
            name: "Budi".to_string(),
            phone_number: "081234567890".to_string(),
            has_photo: true,
            ..ResidentForm::default()
        };
        let before = form.clone();
        let body = r#"{"errors":{"phone_number":["msg"]}}"#;

        let outcome = block_on(submit(form.validate(FormMode::Create), || async {
            Err(ApiError::from_status(422, body))
        }));

        assert_eq!(
            outcome.field_errors().and_then(|e| e.get("phone_number")),
            Some("msg")
        );
        let toast = outcome.toast(&MESSAGES, FormMode::Create).unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.message, "fix the form");
        assert_eq!(form, before);
    }

    #[test]
    fn other_failures_toast_per_mode() {
        let outcome = block_on(submit(FieldErrors::new(), || async { Err(ApiError::Server(500)) }));

        assert_eq!(outcome.field_errors(), None);
        assert_eq!(
            outcome.toast(&MESSAGES, FormMode::Edit(3)).map(|t| t.message),
            Some("update failed".to_string())
        );
        assert_eq!(
            outcome.toast(&MESSAGES, FormMode::Create).map(|t| t.message),
            Some("create failed".to_string())
        );
    }

    #[test]
    fn success_toasts_per_mode() {
        let calls = Cell::new(0);
        let outcome = block_on(submit(FieldErrors::new(), || async {
            calls.set(calls.get() + 1);
            Ok(())
        }));

        assert_eq!(calls.get(), 1);
        assert!(outcome.is_saved());
        assert_eq!(
            outcome.toast(&MESSAGES, FormMode::Edit(1)).map(|t| t.level),
            Some(ToastLevel::Success)
        );
        assert_eq!(
            outcome.toast(&MESSAGES, FormMode::Create).map(|t| t.message),
            Some("created".to_string())
        );
    }

    #[test]
    fn aborted_submission_is_silent() {
        let outcome = SubmitOutcome::Failed(ApiError::Aborted);
        assert_eq!(outcome.toast(&MESSAGES, FormMode::Create), None);
    }
}
