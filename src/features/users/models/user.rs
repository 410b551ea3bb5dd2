use serde::{Deserialize, Serialize};

/// 14-character national identity number, the user's identity key
pub type NationalId = String;

/// A registered citizen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub national_id: NationalId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext; only present in sample data and never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub governorate: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub points: u32,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::fake_user;

    #[test]
    fn test_password_is_never_serialized() {
        let user = fake_user("28504199501234");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["nationalId"], "28504199501234");
        assert_eq!(json["verified"], false);
    }

    #[test]
    fn test_full_name() {
        let mut user = fake_user("28504199501234");
        user.first_name = "Ahmed".to_string();
        user.last_name = "Saleh".to_string();
        assert_eq!(user.full_name(), "Ahmed Saleh");
    }
}
