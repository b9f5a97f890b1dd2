use serde::{Deserialize, Serialize};

/// Registration draft as sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,

    /// Empty until the CAPTCHA challenge is solved.
    #[serde(rename = "recaptchaToken")]
    pub captcha_token: String,
}

/// Session identity handed over after registration and used to fetch secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

impl LoginValues {
    pub fn new<S1, S2>(email: S1, password: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Principal identifier, if one is present. Any non-empty email counts.
    pub fn principal(&self) -> Option<&str> {
        (!self.email.is_empty()).then_some(self.email.as_str())
    }
}
