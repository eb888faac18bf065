//! RSVP and contact forms: field specs, validation, simulated submission.
//!
//! Submission never leaves the process. A valid form is held for a fixed
//! delay, then logged as JSON and reset; the caller shows the success banner.

use crate::state::text_input::{apply_edit_key, EditOutcome, TextInput};
use crossterm::event::{KeyCode, KeyEvent};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Default simulated network delay.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+251|0)?9[0-9]{8}$").expect("phone regex should compile"));

/// Reasons offered by the contact form.
pub const CONTACT_REASONS: &[&str] = &["general", "event", "partnership", "feedback"];

/// How a field is edited and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free single-line text.
    Text,
    /// Email address.
    Email,
    /// Ethiopian mobile number; spaces and dashes are ignored.
    Phone,
    /// Free multi-line text.
    LongText,
    /// One of a fixed list, changed with Left/Right.
    Choice(&'static [&'static str]),
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the submitted payload.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    /// Input style and format check.
    pub kind: FieldKind,
    /// Empty values are rejected.
    pub required: bool,
    /// Value after reset.
    pub default: &'static str,
}

/// Fields of the RSVP form.
pub const RSVP_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Full name",
        kind: FieldKind::Text,
        required: true,
        default: "",
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        default: "",
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        kind: FieldKind::Phone,
        required: true,
        default: "",
    },
    FieldSpec {
        name: "attendees",
        label: "Attendees",
        kind: FieldKind::Text,
        required: true,
        default: "1",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::LongText,
        required: false,
        default: "",
    },
];

/// Fields of the contact form.
pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        default: "",
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
        default: "",
    },
    FieldSpec {
        name: "reason",
        label: "Reason",
        kind: FieldKind::Choice(CONTACT_REASONS),
        required: true,
        default: "general",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::LongText,
        required: true,
        default: "",
    },
];

/// Per-field validation failure. The message is shown under the field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field left blank.
    #[error("This field is required")]
    Required,
    /// Value does not look like an email address.
    #[error("Please enter a valid email")]
    InvalidEmail,
    /// Value is not a valid mobile number.
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// True for a plausible email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// True for a valid phone number once spaces and dashes are removed.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    PHONE_REGEX.is_match(&compact)
}

/// Validate one value.
///
/// The required check looks at the trimmed value; the format check runs on
/// any non-empty raw value. When both fail, the format error is reported.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<FieldError> {
    let mut error = None;
    if spec.required && value.trim().is_empty() {
        error = Some(FieldError::Required);
    }
    if !value.is_empty() {
        match spec.kind {
            FieldKind::Email if !is_valid_email(value) => error = Some(FieldError::InvalidEmail),
            FieldKind::Phone if !is_valid_phone(value) => error = Some(FieldError::InvalidPhone),
            _ => {}
        }
    }
    error
}

/// Which form this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Event registration.
    Rsvp,
    /// Message to the organizers.
    Contact,
}

impl FormKind {
    /// Field specs for this form.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Rsvp => RSVP_FIELDS,
            FormKind::Contact => CONTACT_FIELDS,
        }
    }

    /// Label of the submit action, idle and busy.
    pub fn submit_labels(self) -> (&'static str, &'static str) {
        match self {
            FormKind::Rsvp => ("Confirm RSVP", "Submitting..."),
            FormKind::Contact => ("Send Message", "Sending..."),
        }
    }
}

/// A field's live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Static description.
    pub spec: FieldSpec,
    /// Text being edited.
    pub input: TextInput,
    /// Set by the last validation.
    pub error: Option<FieldError>,
}

impl Field {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            input: TextInput::with_text(spec.default),
            error: None,
        }
    }

    /// Current value.
    pub fn value(&self) -> &str {
        self.input.text()
    }
}

/// Collected values of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Which form was sent.
    pub form: FormKind,
    /// Field name to value as entered.
    pub fields: BTreeMap<String, String>,
}

/// Result of pressing submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are set on the fields.
    Invalid {
        /// Number of fields with an error.
        errors: usize,
    },
    /// A submission is already in flight.
    Busy,
    /// The submission completes at `due`.
    Scheduled {
        /// When the simulated send completes.
        due: Instant,
    },
}

#[derive(Debug, Clone)]
struct Pending {
    due: Instant,
    submission: Submission,
}

/// Live state of one form.
#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<Field>,
    focus: usize,
    pending: Option<Pending>,
}

impl FormState {
    /// Empty form with every field at its default.
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: kind.fields().iter().copied().map(Field::new).collect(),
            focus: 0,
            pending: None,
        }
    }

    /// Which form this is.
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Value of the field named `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.spec.name == name)
            .map(Field::value)
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Focus the next field, wrapping.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Focus the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Replace the value of the field named `name`.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.spec.name == name) {
            field.input = TextInput::with_text(value);
        }
    }

    /// Route a key to the focused field.
    ///
    /// Choice fields step with Left/Right and ignore typing. Input is locked
    /// while a submission is in flight.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditOutcome {
        if self.pending.is_some() {
            return EditOutcome::Ignored;
        }
        let Some(field) = self.fields.get_mut(self.focus) else {
            return EditOutcome::Ignored;
        };

        if let FieldKind::Choice(options) = field.spec.kind {
            let step = match key.code {
                KeyCode::Right => 1,
                KeyCode::Left => options.len().saturating_sub(1),
                _ => return EditOutcome::Ignored,
            };
            if options.is_empty() {
                return EditOutcome::Ignored;
            }
            let current = options
                .iter()
                .position(|o| *o == field.input.text())
                .unwrap_or(0);
            field.input = TextInput::with_text(options[(current + step) % options.len()]);
            return EditOutcome::Changed;
        }

        apply_edit_key(&mut field.input, key)
    }

    /// Validate every field, storing the errors on the fields.
    ///
    /// Returns the number of invalid fields.
    pub fn validate(&mut self) -> usize {
        for field in &mut self.fields {
            field.error = validate_field(&field.spec, field.input.text());
        }
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }

    /// Validate and, when valid, schedule the submission `delay` from `now`.
    pub fn submit(&mut self, now: Instant, delay: Duration) -> SubmitOutcome {
        if self.pending.is_some() {
            return SubmitOutcome::Busy;
        }
        let errors = self.validate();
        if errors > 0 {
            debug!(form = ?self.kind, errors, "Form validation failed");
            return SubmitOutcome::Invalid { errors };
        }

        let submission = Submission {
            form: self.kind,
            fields: self
                .fields
                .iter()
                .map(|f| (f.spec.name.to_string(), f.value().to_string()))
                .collect(),
        };
        let due = now + delay;
        self.pending = Some(Pending { due, submission });
        SubmitOutcome::Scheduled { due }
    }

    /// Complete a due submission: log it, reset the form, return it.
    pub fn poll(&mut self, now: Instant) -> Option<Submission> {
        if !self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return None;
        }
        let pending = self.pending.take()?;
        match serde_json::to_string(&pending.submission) {
            Ok(json) => info!(form = ?self.kind, payload = %json, "Form submitted"),
            Err(err) => info!(form = ?self.kind, "Form submitted (payload not serializable: {err})"),
        }
        self.reset();
        Some(pending.submission)
    }

    /// Restore defaults and clear errors. Focus returns to the first field.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
