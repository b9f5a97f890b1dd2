use crate::{error::*, util, SecretId, Url};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

const SECRETS_BY_EMAIL_PATH: &str = "secrets/byemail";
const SECRETS_PATH: &str = "secrets";
const USERS_PATH: &str = "users";

/// Endpoint layout of the vault REST API below a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base: Url,
}

impl ApiUrls {
    pub fn new(base: Url) -> Self {
        Self {
            base: util::with_trailing_slash(base),
        }
    }

    pub fn parse(base: &str) -> Result<Self> {
        util::parse_url(base).map(Self::new)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn secrets_by_email(&self) -> Result<Url> {
        util::join_url(&self.base, SECRETS_BY_EMAIL_PATH)
    }

    pub fn secret(&self, id: SecretId) -> Result<Url> {
        util::join_url(&self.base, &format!("{}/{}", SECRETS_PATH, id))
    }

    pub fn users(&self) -> Result<Url> {
        util::join_url(&self.base, USERS_PATH)
    }
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base URL must be valid"))
    }
}
