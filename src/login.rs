//! Login form
//!
//! Local validation only. A valid form produces a [`LoginRequest`]; nothing
//! is sent anywhere.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn looks_like_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .map_or(false, |re| re.is_match(email))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMethod {
    #[default]
    Email,
    Social,
}

impl FromStr for LoginMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(LoginMethod::Email),
            "social" => Ok(LoginMethod::Social),
            _ => Err(format!("Unknown login method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub fn all() -> &'static [SocialProvider] {
        &[
            SocialProvider::Google,
            SocialProvider::Facebook,
            SocialProvider::Apple,
        ]
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialProvider::Google => write!(f, "Google"),
            SocialProvider::Facebook => write!(f, "Facebook"),
            SocialProvider::Apple => write!(f, "Apple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: LoginField,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{}", join_messages(.0))]
    Invalid(Vec<FieldError>),

    #[error("Continue with {0} is not available yet")]
    SocialUnavailable(SocialProvider),

    #[error("Switch to the email form first")]
    WrongMethod,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validated credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Only the email is shown; no sign-in happens
impl fmt::Display for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Login form valid for {}", self.email)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub method: LoginMethod,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn set_method(&mut self, method: LoginMethod) {
        self.method = method;
    }

    /// Every field problem, in form order
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !looks_like_email(self.email.trim()) {
            errors.push(FieldError {
                field: LoginField::Email,
                message: "Enter a valid email address",
            });
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: LoginField::Password,
                message: "Password must contain at least 6 characters",
            });
        }
        errors
    }

    pub fn submit(&self) -> Result<LoginRequest, LoginError> {
        if self.method != LoginMethod::Email {
            return Err(LoginError::WrongMethod);
        }

        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(LoginError::Invalid(errors));
        }

        let request = LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        tracing::info!(email = %request.email, "Login submitted");
        Ok(request)
    }

    pub fn continue_with(&self, provider: SocialProvider) -> Result<LoginRequest, LoginError> {
        tracing::info!(%provider, "Social login requested");
        Err(LoginError::SocialUnavailable(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let request = LoginForm::new()
            .email(" ada@example.com ")
            .password("secret1")
            .submit()
            .unwrap();

        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "secret1");
        assert_eq!(request.to_string(), "Login form valid for ada@example.com");
    }

    #[test]
    fn test_field_errors() {
        let form = LoginForm::new().email("ada@example").password("12345");
        let fields: Vec<LoginField> = form.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![LoginField::Email, LoginField::Password]);

        let err = form.submit().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Enter a valid email address; Password must contain at least 6 characters"
        );
    }

    #[test]
    fn test_password_counts_characters() {
        let form = LoginForm::new().email("a@b.co").password("ééééé");
        assert_eq!(form.field_errors().len(), 1);

        let form = form.password("éééééé");
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn test_social_method() {
        let mut form = LoginForm::new().email("a@b.co").password("longenough");
        form.set_method(LoginMethod::Social);

        assert_eq!(form.submit(), Err(LoginError::WrongMethod));
        assert_eq!(
            form.continue_with(SocialProvider::Apple).unwrap_err().to_string(),
            "Continue with Apple is not available yet"
        );
    }

    #[test]
    fn test_password_not_serialized() {
        let request = LoginRequest {
            email: "a@b.co".into(),
            password: "hunter22".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hunter22"));
    }
}
