use serde::{Deserialize, Serialize};

/// Persistence schema for a future user-account collaborator. Nothing in the
/// widget reads or writes these yet; the field names and validation rules are
/// a fixed external contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
    pub verify_code: bool,
    /// Milliseconds since the Unix epoch.
    pub verify_code_expiry: f64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default = "default_accepting")]
    pub is_accepting_message: bool,
    #[serde(default)]
    pub messages: Vec<StoredMessage>,
}

fn default_accepting() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    MissingUsername,
    MissingPassword,
    InvalidEmail,
}

impl std::fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserValidationError::MissingUsername => write!(f, "username is required"),
            UserValidationError::MissingPassword => write!(f, "password is required"),
            UserValidationError::InvalidEmail => write!(f, "please use valid email address"),
        }
    }
}

impl User {
    /// Required-field and email-shape checks the persistence layer enforces.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.username.trim().is_empty() {
            return Err(UserValidationError::MissingUsername);
        }
        if !is_valid_email(&self.email) {
            return Err(UserValidationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(UserValidationError::MissingPassword);
        }
        Ok(())
    }
}

/// `local@domain` shape: no whitespace, exactly one `@`, non-empty local
/// part, and a dot in the domain with at least one character on each side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            verify_code: true,
            verify_code_expiry: 1_700_000_000_000.0,
            is_verified: false,
            is_accepting_message: true,
            messages: Vec::new(),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert_eq!(sample_user().validate(), Ok(()));
    }

    #[test]
    fn test_missing_required_fields() {
        let mut user = sample_user();
        user.username = "  ".to_string();
        assert_eq!(user.validate(), Err(UserValidationError::MissingUsername));

        let mut user = sample_user();
        user.password = String::new();
        assert_eq!(user.validate(), Err(UserValidationError::MissingPassword));
    }

    #[test]
    fn test_email_shape() {
        for good in ["a@b.c", "first.last@mail.example.org", "x@sub.domain.io"] {
            assert!(is_valid_email(good), "{} should be valid", good);
        }
        for bad in [
            "",
            "plain",
            "@b.c",
            "a@",
            "a@nodot",
            "a@.c",
            "a@b.",
            "a b@c.d",
            "a@b@c.d",
        ] {
            assert!(!is_valid_email(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_rejects_malformed_email() {
        let mut user = sample_user();
        user.email = "not-an-email".to_string();
        assert_eq!(user.validate(), Err(UserValidationError::InvalidEmail));
    }

    #[test]
    fn test_wire_field_names_and_defaults() {
        // The persistence contract uses camelCase keys and defaults
        // isVerified=false / isAcceptingMessage=true.
        let user: User = serde_json::from_str(
            r#"{
                "username": "ada",
                "email": "ada@example.com",
                "password": "hunter2",
                "verifyCode": false,
                "verifyCodeExpiry": 0.0
            }"#,
        )
        .unwrap();

        assert!(!user.is_verified);
        assert!(user.is_accepting_message);
        assert!(user.messages.is_empty());

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"isAcceptingMessage\":true"));
        assert!(json.contains("\"verifyCodeExpiry\":0.0"));
    }
}
