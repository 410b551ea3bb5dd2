use serde::Deserialize;
use utoipa::ToSchema;

use crate::features::users::models::User;
use crate::shared::validation::FormField;

/// Full registration form with a postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResidentSignup {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub national_id: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub governorate: String,
}

/// Short registration form: one name field plus age
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickSignup {
    pub name: String,
    pub email: String,
    pub national_id: String,
    /// Raw text from the age input
    pub age: String,
    pub phone: String,
    pub password: String,
}

/// Registration form state, one of the two page variants
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SignupDraft {
    Resident(ResidentSignup),
    Quick(QuickSignup),
}

impl SignupDraft {
    pub fn national_id(&self) -> &str {
        match self {
            SignupDraft::Resident(d) => &d.national_id,
            SignupDraft::Quick(d) => &d.national_id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            SignupDraft::Resident(d) => &d.email,
            SignupDraft::Quick(d) => &d.email,
        }
    }

    pub fn variant(&self) -> &'static str {
        match self {
            SignupDraft::Resident(_) => "resident",
            SignupDraft::Quick(_) => "quick",
        }
    }

    /// Fields shown by this variant, in form order
    pub fn fields(&self) -> &'static [SignupField] {
        use SignupField::*;
        match self {
            SignupDraft::Resident(_) => &[
                FirstName,
                LastName,
                Email,
                NationalId,
                Phone,
                Password,
                Address,
                City,
                Governorate,
            ],
            SignupDraft::Quick(_) => &[Name, Email, NationalId, Age, Phone, Password],
        }
    }

    /// Current text of a field; `None` when this variant has no such field
    pub fn value(&self, field: SignupField) -> Option<&str> {
        self.slot(field).map(String::as_str)
    }

    /// Overwrite a field's text. Returns `false` when this variant has no such field.
    pub fn set(&mut self, field: SignupField, value: impl Into<String>) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    fn slot(&self, field: SignupField) -> Option<&String> {
        match self {
            SignupDraft::Resident(d) => match field {
                SignupField::FirstName => Some(&d.first_name),
                SignupField::LastName => Some(&d.last_name),
                SignupField::Email => Some(&d.email),
                SignupField::NationalId => Some(&d.national_id),
                SignupField::Phone => Some(&d.phone),
                SignupField::Password => Some(&d.password),
                SignupField::Address => Some(&d.address),
                SignupField::City => Some(&d.city),
                SignupField::Governorate => Some(&d.governorate),
                SignupField::Name | SignupField::Age => None,
            },
            SignupDraft::Quick(d) => match field {
                SignupField::Name => Some(&d.name),
                SignupField::Email => Some(&d.email),
                SignupField::NationalId => Some(&d.national_id),
                SignupField::Age => Some(&d.age),
                SignupField::Phone => Some(&d.phone),
                SignupField::Password => Some(&d.password),
                _ => None,
            },
        }
    }

    fn slot_mut(&mut self, field: SignupField) -> Option<&mut String> {
        match self {
            SignupDraft::Resident(d) => match field {
                SignupField::FirstName => Some(&mut d.first_name),
                SignupField::LastName => Some(&mut d.last_name),
                SignupField::Email => Some(&mut d.email),
                SignupField::NationalId => Some(&mut d.national_id),
                SignupField::Phone => Some(&mut d.phone),
                SignupField::Password => Some(&mut d.password),
                SignupField::Address => Some(&mut d.address),
                SignupField::City => Some(&mut d.city),
                SignupField::Governorate => Some(&mut d.governorate),
                SignupField::Name | SignupField::Age => None,
            },
            SignupDraft::Quick(d) => match field {
                SignupField::Name => Some(&mut d.name),
                SignupField::Email => Some(&mut d.email),
                SignupField::NationalId => Some(&mut d.national_id),
                SignupField::Age => Some(&mut d.age),
                SignupField::Phone => Some(&mut d.phone),
                SignupField::Password => Some(&mut d.password),
                _ => None,
            },
        }
    }
}

impl ResidentSignup {
    /// New directory entry: unverified, no points yet
    pub fn into_user(self) -> User {
        User {
            national_id: self.national_id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email,
            password: self.password,
            phone: self.phone,
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            governorate: self.governorate.trim().to_string(),
            verified: false,
            points: 0,
        }
    }
}

/// Fields across both signup variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Name,
    FirstName,
    LastName,
    Email,
    NationalId,
    Age,
    Phone,
    Password,
    Address,
    City,
    Governorate,
}

impl FormField for SignupField {
    fn name(self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::FirstName => "firstName",
            SignupField::LastName => "lastName",
            SignupField::Email => "email",
            SignupField::NationalId => "nationalId",
            SignupField::Age => "age",
            SignupField::Phone => "phone",
            SignupField::Password => "password",
            SignupField::Address => "address",
            SignupField::City => "city",
            SignupField::Governorate => "governorate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_tag_selects_fields() {
        let draft: SignupDraft = serde_json::from_value(serde_json::json!({
            "variant": "quick",
            "name": "Mona",
            "age": "22"
        }))
        .unwrap();

        assert_eq!(draft.variant(), "quick");
        assert_eq!(draft.value(SignupField::Age), Some("22"));
        assert_eq!(draft.value(SignupField::Email), Some(""));
        assert_eq!(draft.value(SignupField::City), None);
    }

    #[test]
    fn test_set_ignores_fields_of_other_variant() {
        let mut draft = SignupDraft::Resident(ResidentSignup::default());
        assert!(!draft.set(SignupField::Age, "30"));
        assert!(draft.set(SignupField::City, "Giza"));
        assert_eq!(draft.value(SignupField::City), Some("Giza"));
    }

    #[test]
    fn test_resident_into_user_is_unverified() {
        let user = ResidentSignup {
            first_name: " Mona ".to_string(),
            last_name: "Hassan".to_string(),
            national_id: "29708200104567".to_string(),
            ..Default::default()
        }
        .into_user();

        assert_eq!(user.first_name, "Mona");
        assert!(!user.verified);
        assert_eq!(user.points, 0);
    }
}
