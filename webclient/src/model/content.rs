use std::str::FromStr as _;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::error::DecodeError;

/// Discriminators the client knows how to display field by field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum KnownKind {
    Note,
    Credential,
    CreditCard,
}

impl KnownKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Credential => "credential",
            Self::CreditCard => "creditcard",
        }
    }
}

/// Field text of a known kind: `null` reads as empty, other scalars as their
/// text form, nested values as compact JSON.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Credential {
    #[serde(deserialize_with = "lenient_text")]
    pub user_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub password: String,
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
}

/// Card fields are kept as entered; nothing is validated client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditCard {
    #[serde(deserialize_with = "lenient_text")]
    pub cardtype: String,
    #[serde(deserialize_with = "lenient_text")]
    pub cardnumber: String,
    #[serde(deserialize_with = "lenient_text")]
    pub expiration: String,
    #[serde(deserialize_with = "lenient_text")]
    pub cvv: String,
}

/// Typed payload of a secret, selected by its `kind` field.
///
/// The `kind` alone selects the variant. Payloads with an unknown or missing
/// `kind` are kept verbatim in `Other`, so kinds added server-side still
/// round-trip through the client.
#[derive(Debug, Clone, PartialEq)]
pub enum SecretContent {
    Note(Note),
    Credential(Credential),
    CreditCard(CreditCard),
    Other(Value),
}

impl SecretContent {
    /// Parses the stored structured-text form.
    ///
    /// ```
    /// use tresor_webclient::SecretContent;
    ///
    /// let c = SecretContent::decode(r#"{"kind":"note","title":"x","content":"y"}"#).unwrap();
    /// assert_eq!(c.kind(), Some("note"));
    /// ```
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(value: Value) -> Self {
        let known = value
            .get("kind")
            .and_then(Value::as_str)
            .and_then(|k| KnownKind::from_str(k).ok());
        let Some(kind) = known else {
            return Self::Other(value);
        };

        let decoded = match kind {
            KnownKind::Note => Note::deserialize(&value).map(Self::Note),
            KnownKind::Credential => Credential::deserialize(&value).map(Self::Credential),
            KnownKind::CreditCard => CreditCard::deserialize(&value).map(Self::CreditCard),
        };
        match decoded {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Keeping '{}' content as raw value: {}", kind, e);
                Self::Other(value)
            }
        }
    }

    /// The discriminator, if any. `Other` reports whatever string `kind` it carries.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Other(v) => v.get("kind").and_then(Value::as_str),
            known => known.known_kind().map(|k| k.as_str()),
        }
    }

    pub fn known_kind(&self) -> Option<KnownKind> {
        match self {
            Self::Note(_) => Some(KnownKind::Note),
            Self::Credential(_) => Some(KnownKind::Credential),
            Self::CreditCard(_) => Some(KnownKind::CreditCard),
            Self::Other(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Note(Note { title, content }) => json!({
                "kind": KnownKind::Note.as_str(),
                "title": title,
                "content": content,
            }),
            Self::Credential(Credential {
                user_name,
                password,
                url,
            }) => json!({
                "kind": KnownKind::Credential.as_str(),
                "userName": user_name,
                "password": password,
                "url": url,
            }),
            Self::CreditCard(CreditCard {
                cardtype,
                cardnumber,
                expiration,
                cvv,
            }) => json!({
                "kind": KnownKind::CreditCard.as_str(),
                "cardtype": cardtype,
                "cardnumber": cardnumber,
                "expiration": expiration,
                "cvv": cvv,
            }),
            Self::Other(v) => v.clone(),
        }
    }

    /// Structured-text form as stored by the server.
    pub fn encode(&self) -> String {
        self.to_value().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_note() {
        let c = SecretContent::decode(r#"{"kind":"note","title":"x","content":"y"}"#).unwrap();
        assert_eq!(
            c,
            SecretContent::Note(Note {
                title: "x".to_owned(),
                content: "y".to_owned(),
            })
        );
        assert_eq!(c.kind(), Some("note"));
    }

    #[test]
    fn decode_credential_uses_camel_case_username() {
        let raw = r#"{"kind":"credential","userName":"bob","password":"pw","url":"https://a.example"}"#;
        let SecretContent::Credential(cred) = SecretContent::decode(raw).unwrap() else {
            panic!("expected credential");
        };
        assert_eq!(cred.user_name, "bob");
        assert_eq!(cred.password, "pw");
        assert_eq!(cred.url, "https://a.example");
    }

    #[test]
    fn decode_creditcard_keeps_fields_unvalidated() {
        let raw = r#"{"kind":"creditcard","cardtype":"Visa","cardnumber":"not a number","expiration":"13/99","cvv":"x"}"#;
        let c = SecretContent::decode(raw).unwrap();
        assert_eq!(c.known_kind(), Some(KnownKind::CreditCard));
        let SecretContent::CreditCard(card) = c else {
            panic!("expected credit card");
        };
        assert_eq!(card.cardnumber, "not a number");
        assert_eq!(card.expiration, "13/99");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let c = SecretContent::decode(r#"{"kind":"note","title":"only"}"#).unwrap();
        assert_eq!(
            c,
            SecretContent::Note(Note {
                title: "only".to_owned(),
                content: String::new(),
            })
        );
    }

    #[test]
    fn unknown_or_missing_kind_is_preserved() {
        let raw = r#"{"kind":"wifi","ssid":"home","nested":{"a":[1,2]}}"#;
        let c = SecretContent::decode(raw).unwrap();
        assert_eq!(c.kind(), Some("wifi"));
        assert_eq!(c.known_kind(), None);
        assert_eq!(c.to_value(), serde_json::from_str::<Value>(raw).unwrap());

        let c = SecretContent::decode(r#"{"title":"no kind"}"#).unwrap();
        assert!(matches!(c, SecretContent::Other(_)));
        assert_eq!(c.kind(), None);
    }

    #[test]
    fn kind_is_case_sensitive() {
        let c = SecretContent::decode(r#"{"kind":"Note","title":"x"}"#).unwrap();
        assert!(matches!(c, SecretContent::Other(_)));
    }

    #[test]
    fn known_kind_reads_null_fields_as_empty() {
        let c = SecretContent::decode(r#"{"kind":"note","title":null,"content":"y"}"#).unwrap();
        assert_eq!(
            c,
            SecretContent::Note(Note {
                title: String::new(),
                content: "y".to_owned(),
            })
        );
    }

    #[test]
    fn known_kind_reads_scalars_as_text() {
        let raw = r#"{"kind":"creditcard","cardtype":true,"cardnumber":4111111111111111,"cvv":123}"#;
        let SecretContent::CreditCard(card) = SecretContent::decode(raw).unwrap() else {
            panic!("expected credit card");
        };
        assert_eq!(card.cardtype, "true");
        assert_eq!(card.cardnumber, "4111111111111111");
        assert_eq!(card.expiration, "");
        assert_eq!(card.cvv, "123");

        let c = SecretContent::decode(r#"{"kind":"credential","userName":["a"],"url":{"h":1}}"#)
            .unwrap();
        let SecretContent::Credential(cred) = c else {
            panic!("expected credential");
        };
        assert_eq!(cred.user_name, r#"["a"]"#);
        assert_eq!(cred.url, r#"{"h":1}"#);
    }

    #[test]
    fn non_object_payloads_are_other() {
        assert!(matches!(
            SecretContent::decode("[1,2,3]").unwrap(),
            SecretContent::Other(Value::Array(_))
        ));
        assert!(matches!(
            SecretContent::decode(r#""plain""#).unwrap(),
            SecretContent::Other(Value::String(_))
        ));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(SecretContent::decode("{not json").is_err());
        assert!(SecretContent::decode("").is_err());
    }

    #[test]
    fn note_survives_encode_then_decode() {
        let note = SecretContent::Note(Note {
            title: "T".to_owned(),
            content: "C".to_owned(),
        });
        let decoded = SecretContent::decode(&note.encode()).unwrap();
        assert_eq!(decoded.kind(), Some("note"));
        assert_eq!(decoded, note);
    }

    #[test]
    fn known_kind_names() {
        use strum::IntoEnumIterator as _;
        for kind in KnownKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(kind.as_str().parse::<KnownKind>().unwrap(), kind);
        }
    }
}
