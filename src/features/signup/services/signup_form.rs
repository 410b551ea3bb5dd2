use std::sync::Arc;

use validator::Validate;

use crate::features::signup::models::{SignupDraft, SignupField};
use crate::modules::sink::{RegistrationReceipt, RegistrationSink};
use crate::shared::validation::{FormErrors, FormState, SubmitError};

/// Lowest accepted age on the quick form
const MINIMUM_AGE: i64 = 18;

/// Rules shared by both signup variants
#[derive(Debug, Validate)]
struct CredentialRules {
    #[validate(contains(pattern = "@", message = "Invalid email."))]
    email: String,
    #[validate(length(equal = 14, message = "National ID must be 14 digits."))]
    national_id: String,
    #[validate(length(equal = 11, message = "Phone number must be 11 digits."))]
    phone: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    password: String,
}

impl CredentialRules {
    fn from_draft(draft: &SignupDraft) -> Self {
        let text = |field| draft.value(field).unwrap_or_default().to_string();
        Self {
            email: text(SignupField::Email),
            national_id: text(SignupField::NationalId),
            phone: text(SignupField::Phone),
            password: text(SignupField::Password),
        }
    }

    fn field(rule: &str) -> Option<SignupField> {
        match rule {
            "email" => Some(SignupField::Email),
            "national_id" => Some(SignupField::NationalId),
            "phone" => Some(SignupField::Phone),
            "password" => Some(SignupField::Password),
            _ => None,
        }
    }
}

/// How a single field is checked
enum Rule {
    /// Non-empty after trimming
    Required(&'static str),
    /// Checked together in [`CredentialRules`]
    Credential,
    Adult,
}

impl SignupField {
    fn rule(self) -> Rule {
        match self {
            SignupField::Name => Rule::Required("Name is required."),
            SignupField::FirstName => Rule::Required("First name is required."),
            SignupField::LastName => Rule::Required("Last name is required."),
            SignupField::Address => Rule::Required("Address is required."),
            SignupField::City => Rule::Required("City is required."),
            SignupField::Governorate => Rule::Required("Governorate is required."),
            SignupField::Email
            | SignupField::NationalId
            | SignupField::Phone
            | SignupField::Password => Rule::Credential,
            SignupField::Age => Rule::Adult,
        }
    }
}

pub struct SignupFormModel {
    draft: SignupDraft,
    errors: FormErrors<SignupField>,
    state: FormState,
    sink: Arc<dyn RegistrationSink>,
}

impl SignupFormModel {
    pub fn new(draft: SignupDraft, sink: Arc<dyn RegistrationSink>) -> Self {
        Self {
            draft,
            errors: FormErrors::new(),
            state: FormState::Editing,
            sink,
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FormErrors<SignupField> {
        &self.errors
    }

    #[cfg(test)]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Set a field and clear its error. Returns `false` when the current
    /// variant has no such field.
    pub fn update_field(&mut self, field: SignupField, value: impl Into<String>) -> bool {
        self.state = FormState::Editing;
        self.errors.clear(field);
        self.draft.set(field, value)
    }

    /// Check every field of the current variant, replacing the stored error map
    pub fn validate(&mut self) -> &FormErrors<SignupField> {
        let mut errors = FormErrors::new();

        for &field in self.draft.fields() {
            let value = self.draft.value(field).unwrap_or_default();
            match field.rule() {
                Rule::Required(message) if value.trim().is_empty() => {
                    errors.insert(field, message);
                }
                Rule::Adult if !is_adult(value) => {
                    errors.insert(field, "Age must be 18 or older.");
                }
                _ => {}
            }
        }

        if let Err(e) = CredentialRules::from_draft(&self.draft).validate() {
            for (rule, failures) in e.field_errors() {
                let message = failures.first().and_then(|f| f.message.as_ref());
                if let (Some(field), Some(message)) = (CredentialRules::field(&rule), message) {
                    errors.insert(field, message.to_string());
                }
            }
        }

        self.errors = errors;
        &self.errors
    }

    /// Validate and hand the draft to the registration sink. No retry.
    pub async fn submit(&mut self) -> Result<RegistrationReceipt, SubmitError<SignupField>> {
        self.state = FormState::Validating;
        if !self.validate().is_empty() {
            self.state = FormState::Editing;
            tracing::debug!(
                variant = self.draft.variant(),
                fields = self.errors.len(),
                "Signup form has errors"
            );
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        match self.sink.register(self.draft.clone()).await {
            Ok(receipt) => {
                self.state = FormState::Submitted;
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!("Registration sink failed: {}", e);
                self.state = FormState::Editing;
                Err(SubmitError::Sink(e))
            }
        }
    }
}

fn is_adult(age: &str) -> bool {
    age.trim()
        .parse::<i64>()
        .is_ok_and(|years| years >= MINIMUM_AGE)
}
