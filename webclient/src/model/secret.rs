use serde::{Deserialize, Serialize};

use super::atom::*;
use super::content::SecretContent;
use crate::error::DecodeError;

/// Secret as returned by the server: `content` is still structured text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSecret {
    pub id: SecretId,
    pub user_id: UserId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Secret {
    pub id: SecretId,
    pub user_id: UserId,
    pub content: SecretContent,
}

impl RawSecret {
    /// Decodes the nested content exactly once.
    pub fn decode(self) -> Result<Secret, DecodeError> {
        let RawSecret {
            id,
            user_id,
            content,
        } = self;
        Ok(Secret {
            id,
            user_id,
            content: SecretContent::decode(&content)?,
        })
    }
}

impl TryFrom<RawSecret> for Secret {
    type Error = DecodeError;

    fn try_from(raw: RawSecret) -> Result<Self, Self::Error> {
        raw.decode()
    }
}
