//! Fetch, decode, hold and delete the secrets of one identity.
//!
//! [`SecretsList::next`] is the pure transition function; the async methods
//! drive a [`SecretStore`] and feed its outcome back in as events. Both
//! methods take `&mut self`, so at most one request per list is in flight.

use tresor_webclient::{DecodeError, LoginValues, RawSecret, Secret, SecretId, SecretStore};

pub const NO_IDENTITY_MESSAGE: &str = "No valid email, please log in first.";

#[derive(thiserror::Error, Debug)]
pub enum ListError {
    #[error("No valid email, please log in first.")]
    NoIdentity,

    #[error("{0}")]
    Fetch(#[source] tresor_webclient::Error),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("Could not delete secret: {0}")]
    Delete(#[source] tresor_webclient::Error),

    #[error("Secrets are not loaded")]
    NotLoaded,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Secret>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Reset,
    LoadStarted,
    Fetched(Vec<Secret>),
    Failed(String),
    Deleted(SecretId),
    DeleteFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretsList {
    state: ListState,
    /// Message of a failed delete; the list itself stays loaded.
    notice: Option<String>,
}

impl SecretsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(self, event: ListEvent) -> Self {
        use ListEvent::*;
        use ListState::*;

        let SecretsList { state, notice } = self;
        match (state, event) {
            (_, Reset) => Self::default(),
            (_, LoadStarted) => Self {
                state: Loading,
                notice: None,
            },
            (Loading, Fetched(secrets)) => Self {
                state: Loaded(secrets),
                notice,
            },
            (_, Failed(message)) => Self {
                state: Error(message),
                notice: None,
            },
            (Loaded(mut secrets), Deleted(id)) => {
                secrets.retain(|s| s.id != id);
                Self {
                    state: Loaded(secrets),
                    notice,
                }
            }
            (state, DeleteFailed(message)) => Self {
                state,
                notice: Some(message),
            },
            // late or out-of-order outcomes leave the list as it is
            (state, Fetched(_) | Deleted(_)) => Self { state, notice },
        }
    }

    fn apply(&mut self, event: ListEvent) {
        *self = std::mem::take(self).next(event);
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ListState::Loaded(_))
    }

    /// Held secrets; empty unless loaded.
    pub fn secrets(&self) -> &[Secret] {
        match &self.state {
            ListState::Loaded(secrets) => secrets,
            _ => &[],
        }
    }

    /// The one message to show, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            ListState::Error(message) => Some(message),
            _ => self.notice.as_deref(),
        }
    }

    /// Discards what is held and loads the secrets of `identity`.
    ///
    /// Returns the number of secrets loaded.
    pub async fn load<S>(&mut self, store: &S, identity: &LoginValues) -> Result<usize>
    where
        S: SecretStore + ?Sized,
    {
        self.apply(ListEvent::Reset);

        let Some(email) = identity.principal() else {
            log::warn!("Refusing to load secrets without an email");
            self.apply(ListEvent::Failed(NO_IDENTITY_MESSAGE.to_owned()));
            return Err(ListError::NoIdentity);
        };

        log::debug!("Loading secrets of {}", email);
        self.apply(ListEvent::LoadStarted);

        let decoded = match store.fetch_secrets(identity).await {
            Ok(raws) => raws
                .into_iter()
                .map(RawSecret::decode)
                .collect::<Result<Vec<_>, _>>()
                .map_err(ListError::from),
            Err(e) => Err(ListError::Fetch(e)),
        };

        match decoded {
            Ok(secrets) => {
                let n = secrets.len();
                log::info!("Loaded {} secrets", n);
                self.apply(ListEvent::Fetched(secrets));
                Ok(n)
            }
            Err(e) => {
                log::warn!("Failed to load secrets: {}", e);
                self.apply(ListEvent::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Deletes `id` remotely, then drops it from the held list.
    ///
    /// A failed delete leaves the list untouched and sets the message.
    pub async fn delete<S>(&mut self, store: &S, id: SecretId) -> Result<()>
    where
        S: SecretStore + ?Sized,
    {
        if !self.is_loaded() {
            return Err(ListError::NotLoaded);
        }

        match store.delete_secret(id).await {
            Ok(()) => {
                self.apply(ListEvent::Deleted(id));
                Ok(())
            }
            Err(e) => {
                let e = ListError::Delete(e);
                log::warn!("{}", e);
                self.apply(ListEvent::DeleteFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
