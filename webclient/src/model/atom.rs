pub use reqwest::{StatusCode, Url};

/// Server-assigned secret identifier.
pub type SecretId = i64;

/// Server-assigned user identifier.
pub type UserId = i64;
