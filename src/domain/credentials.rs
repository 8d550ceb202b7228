//! Login payload and its field-presence schema

use serde::{Deserialize, Serialize};

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    /// Translation key of the inline "required" message
    pub fn required_key(self) -> &'static str {
        match self {
            LoginField::Username => "login.username_required",
            LoginField::Password => "login.password_required",
        }
    }
}

/// Username/password pair as typed by the user
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Inline, per-field validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Message key for a field, if it has an error
    pub fn get(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Username => self.username,
            LoginField::Password => self.password,
        }
    }

    pub fn clear(&mut self, field: LoginField) {
        match field {
            LoginField::Username => self.username = None,
            LoginField::Password => self.password = None,
        }
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty strings
    ///
    /// Whitespace is a value here; a blank username is left for the RUT check.
    pub fn check_required(&self) -> FieldErrors {
        let required =
            |value: &str, field: LoginField| value.is_empty().then(|| field.required_key());

        FieldErrors {
            username: required(&self.username, LoginField::Username),
            password: required(&self.password, LoginField::Password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_present() {
        let creds = Credentials::new("12345678-5", "secret");
        assert!(creds.check_required().is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let errors = Credentials::new("", "secret").check_required();
        assert_eq!(errors.get(LoginField::Username), Some("login.username_required"));
        assert_eq!(errors.get(LoginField::Password), None);

        let errors = Credentials::new("12345678-5", "").check_required();
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, Some("login.password_required"));

        let mut errors = Credentials::default().check_required();
        assert!(errors.username.is_some() && errors.password.is_some());
        errors.clear(LoginField::Username);
        assert_eq!(errors.username, None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(Credentials::new("12345678-5", "   ").check_required().is_empty());
        assert!(Credentials::new("  ", "secret").check_required().is_empty());
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", Credentials::new("12345678-5", "hunter2"));
        assert!(rendered.contains("12345678-5"));
        assert!(!rendered.contains("hunter2"));
    }
}
