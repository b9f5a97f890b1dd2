pub mod atom;
pub mod content;
pub mod credential;
pub mod secret;

pub use atom::*;
pub use content::*;
pub use credential::*;
pub use secret::*;

use async_trait::async_trait;

use crate::error::*;

/// Remote store holding the user's secrets.
#[async_trait]
pub trait SecretStore {
    async fn fetch_secrets(&self, identity: &LoginValues) -> Result<Vec<RawSecret>>;

    async fn delete_secret(&self, id: SecretId) -> Result<()>;
}

/// Remote store for user accounts.
#[async_trait]
pub trait UserStore {
    async fn create_user(&self, credentials: &Credentials) -> Result<()>;
}
