// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.
//!
//! The form never delivers mail. A successful submission yields a
//! [`MailDraft`] that the application turns into a `mailto:` link and hands
//! to the platform mail client.

use std::time::{Duration, Instant};

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subject,
    Message,
}

/// Validation failure of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty after trimming.
    Required(Field),
}

impl FieldError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::Required(Field::Subject) => "contact-error-subject-required",
            FieldError::Required(Field::Message) => "contact-error-message-required",
        }
    }
}

/// Inline errors, at most one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub subject: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.subject.is_some()) + usize::from(self.message.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Lifecycle of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Waiting for the submit delay to elapse.
    Submitting,
    /// The mail client was opened.
    Success,
    /// The mail client could not be opened.
    Error,
}

/// Subject and body captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    subject: String,
    message: String,
    errors: FieldErrors,
    status: SubmitStatus,
    succeeded_at: Option<Instant>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a field value and clears that field's error.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
        self.errors.clear(field);
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Empties the message field.
    pub fn clear_message(&mut self) {
        self.set_field(Field::Message, String::new());
    }

    /// The clear action is only offered for a non-blank message.
    #[must_use]
    pub fn can_clear_message(&self) -> bool {
        !self.message.trim().is_empty()
    }

    /// Checks both fields without changing state.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let required = |value: &str, field| value.trim().is_empty().then_some(FieldError::Required(field));
        FieldErrors {
            subject: required(&self.subject, Field::Subject),
            message: required(&self.message, Field::Message),
        }
    }

    /// Attempts a submission.
    ///
    /// On validation failure the inline errors are set and `None` is returned.
    /// On success the form moves to [`SubmitStatus::Submitting`] and returns
    /// the draft as entered. Ignored while a submission is in flight or after
    /// a failure that has not been dismissed.
    pub fn submit(&mut self) -> Option<MailDraft> {
        if !self.can_submit() {
            return None;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Submitting;
        self.succeeded_at = None;
        Some(MailDraft {
            subject: self.subject.clone(),
            body: self.message.clone(),
        })
    }

    /// Records that the mail client opened. Clears the fields.
    pub fn complete(&mut self, now: Instant) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.status = SubmitStatus::Success;
        self.succeeded_at = Some(now);
        self.subject.clear();
        self.message.clear();
    }

    /// Records that the mail client could not be opened. Keeps the fields.
    pub fn fail(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Error;
        }
    }

    /// Returns to [`SubmitStatus::Idle`] from a settled state.
    pub fn reset_status(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
            self.succeeded_at = None;
        }
    }

    /// Returns to idle once the success banner has been visible for `after`.
    ///
    /// Returns `true` if the status changed.
    pub fn tick(&mut self, now: Instant, after: Duration) -> bool {
        match (self.status, self.succeeded_at) {
            (SubmitStatus::Success, Some(since)) if now.saturating_duration_since(since) >= after => {
                self.reset_status();
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.status, SubmitStatus::Idle | SubmitStatus::Success)
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Whether a success banner is waiting for its automatic reset.
    #[must_use]
    pub fn awaiting_reset(&self) -> bool {
        self.status == SubmitStatus::Success && self.succeeded_at.is_some()
    }
}
