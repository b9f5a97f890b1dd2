use reqwest::{Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::*;

pub const FALLBACK_ERROR_MESSAGE: &str = "Server response failed.";

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

/// Ensures the base URL ends with '/' so that relative joins stay below it.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

pub fn join_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::InvalidSyntaxUrl {
            url: format!("{}{}", base, path),
            source: e,
        })
}

/// Pulls the user-facing message out of an error response body.
///
/// The server sends `{"message": "..."}` or, for field validation,
/// `{"message": ["field: msg", ...]}`.
pub fn extract_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return FALLBACK_ERROR_MESSAGE.to_owned();
    };
    match value.get("message") {
        Some(Value::String(s)) if !s.is_empty() => s.to_owned(),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.to_owned(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => FALLBACK_ERROR_MESSAGE.to_owned(),
    }
}

pub fn error_from_status(status: StatusCode, message: String) -> Error {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Error::Unauthorized { message }
    } else if status == StatusCode::NOT_FOUND {
        Error::NotFound { message }
    } else {
        Error::Rejected { status, message }
    }
}

/// Passes successful responses through; turns anything else into an [`Error`]
/// carrying the server's message.
pub async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let requested_url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    let message = self::extract_message(&body);
    log::warn!("{} responded {}: {}", requested_url, status, message);
    Err(self::error_from_status(status, message))
}
