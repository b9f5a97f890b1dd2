use ::async_trait::async_trait;
use ::std::time::Duration;
use serde::Serialize;

use super::urls::ApiUrls;
use crate::{error::*, model::*, util};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SecretsQuery<'a> {
    email: &'a str,
    encrypt_password: &'a str,
}

/// HTTP client for the vault REST API.
pub struct TresorClient {
    http: crate::http::Client,
    urls: ApiUrls,
}

impl TresorClient {
    pub fn new(urls: ApiUrls) -> Result<Self> {
        Self::with_timeout(urls, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(urls: ApiUrls, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: crate::http::Client::new(timeout)?,
            urls,
        })
    }

    pub fn urls(&self) -> &ApiUrls {
        &self.urls
    }
}

#[async_trait]
impl SecretStore for TresorClient {
    async fn fetch_secrets(&self, identity: &LoginValues) -> Result<Vec<RawSecret>> {
        let url = self.urls.secrets_by_email()?;
        let query = SecretsQuery {
            email: &identity.email,
            encrypt_password: &identity.password,
        };
        let resp = self.http.post(url).json(&query).send().await?;
        let resp = util::ensure_success(resp).await?;

        let body = resp.text().await?;
        let secrets: Vec<RawSecret> = serde_json::from_str(&body)?;
        log::info!("Fetched {} secrets", secrets.len());
        Ok(secrets)
    }

    async fn delete_secret(&self, id: SecretId) -> Result<()> {
        let url = self.urls.secret(id)?;
        let resp = self.http.delete(url).send().await?;
        util::ensure_success(resp).await?;
        log::info!("Deleted secret {}", id);
        Ok(())
    }
}

#[async_trait]
impl UserStore for TresorClient {
    async fn create_user(&self, credentials: &Credentials) -> Result<()> {
        let url = self.urls.users()?;
        let resp = self.http.post(url).json(credentials).send().await?;
        util::ensure_success(resp).await?;
        log::info!("Registered user {}", credentials.email);
        Ok(())
    }
}
