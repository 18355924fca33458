#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Simulated network delay for a submission (ms).
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// How long the error shake animation runs before its class is removed (ms).
pub const SHAKE_MS: u32 = 500;

/// Delay before a successful response modal hides itself (ms).
pub const RESPONSE_AUTO_HIDE_MS: u32 = 5000;

/// Minimum message length enforced on the message field.
pub const MESSAGE_MIN_LEN: usize = 10;

/// The contact form's fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Minimum trimmed length, where one applies.
    fn min_len(self) -> Option<usize> {
        match self {
            Self::Message => Some(MESSAGE_MIN_LEN),
            _ => None,
        }
    }
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    TooShort(usize),
}

impl FieldError {
    pub fn message(self) -> String {
        match self {
            Self::Required => "This field is required".to_owned(),
            Self::Email => "Please enter a valid email address".to_owned(),
            Self::TooShort(min) => format!("Please enter at least {min} characters"),
        }
    }
}

/// Validate one field value against the field's rules. `None` means valid.
///
/// Checks run in a fixed order (required, then shape, then length) and
/// the first failure wins.
pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    if field == Field::Email && !email_is_valid(trimmed) {
        return Some(FieldError::Email);
    }
    if let Some(min) = field.min_len() {
        if trimmed.chars().count() < min {
            return Some(FieldError::TooShort(min));
        }
    }
    None
}

/// Email shape check: exactly one `@`, no whitespace, non-empty local
/// part, and a domain with at least one interior dot. Matches what the
/// static site accepted.
pub fn email_is_valid(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// One field's live state: its value, current error, and the presentation
/// flags that drive the float-label and shake classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
    pub focused: bool,
    pub has_content: bool,
    pub shaking: bool,
}

/// Where the simulated submission stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Contact form state machine: field values, per-field validation, and the
/// simulated submission lifecycle. No network is involved; the submit
/// path sleeps for [`SUBMIT_DELAY_MS`] and then reports the injected
/// outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; 4],
    pub status: SubmitStatus,
}

impl FormState {
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Typing updates the value and clears any standing error on the field.
    pub fn input(&mut self, field: Field, value: String) {
        let slot = &mut self.fields[field.index()];
        slot.value = value;
        slot.error = None;
    }

    pub fn focus(&mut self, field: Field) {
        self.fields[field.index()].focused = true;
    }

    /// Leaving a field validates it and records whether the float label
    /// should stay up. Returns `true` when the field failed and should
    /// shake.
    pub fn blur(&mut self, field: Field) -> bool {
        let slot = &mut self.fields[field.index()];
        slot.focused = false;
        slot.has_content = !slot.value.trim().is_empty();
        self.validate_field(field)
    }

    /// Validate one field in place. Returns `true` when it failed.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let slot = &mut self.fields[field.index()];
        slot.error = validate(field, &slot.value);
        if slot.error.is_some() {
            slot.shaking = true;
            true
        } else {
            false
        }
    }

    /// The shake animation finished for a field.
    pub fn settle_shake(&mut self, field: Field) {
        self.fields[field.index()].shaking = false;
    }

    /// Validate every field. Returns `true` when the whole form is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in Field::ALL {
            if self.validate_field(field) {
                valid = false;
            }
        }
        valid
    }

    /// Submit attempt: validates everything and, when clean, enters
    /// `Sending`. Returns `true` when a (simulated) request should start.
    /// Re-entrant submits while `Sending` are refused.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmitStatus::Sending {
            return false;
        }
        if !self.validate_all() {
            return false;
        }
        self.status = SubmitStatus::Sending;
        true
    }

    /// The simulated request finished. Success clears the form; failure
    /// keeps the values so the visitor can retry.
    pub fn finish_submit(&mut self, success: bool) {
        if success {
            self.fields = Default::default();
            self.status = SubmitStatus::Sent;
        } else {
            self.status = SubmitStatus::Failed;
        }
    }

    /// Close the response modal.
    pub fn close_response(&mut self) {
        if matches!(self.status, SubmitStatus::Sent | SubmitStatus::Failed) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn response_open(&self) -> bool {
        matches!(self.status, SubmitStatus::Sent | SubmitStatus::Failed)
    }
}
