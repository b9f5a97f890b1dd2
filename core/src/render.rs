use std::fmt;

use tresor_webclient::{CreditCard, Credential, Note, SecretContent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// Displayable form of a secret's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Labelled fields of a known kind, in display order.
    Fields(Vec<Field>),
    /// Pretty-printed dump of content the client has no layout for.
    Raw(String),
}

fn fields<const N: usize>(pairs: [(&'static str, &str); N]) -> Rendered {
    Rendered::Fields(
        pairs
            .into_iter()
            .map(|(label, value)| Field {
                label,
                value: value.to_owned(),
            })
            .collect(),
    )
}

pub fn render(content: &SecretContent) -> Rendered {
    match content {
        SecretContent::Note(Note { title, content }) => {
            fields([("Title", title.as_str()), ("Content", content.as_str())])
        }
        SecretContent::Credential(Credential {
            user_name,
            password,
            url,
        }) => fields([
            ("Username", user_name.as_str()),
            ("Password", password.as_str()),
            ("URL", url.as_str()),
        ]),
        SecretContent::CreditCard(CreditCard {
            cardtype,
            cardnumber,
            expiration,
            cvv,
        }) => fields([
            ("Card Type", cardtype.as_str()),
            ("Card Number", cardnumber.as_str()),
            ("Expiration", expiration.as_str()),
            ("CVV", cvv.as_str()),
        ]),
        SecretContent::Other(value) => Rendered::Raw(
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        ),
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rendered::Fields(fields) => {
                for (i, Field { label, value }) in fields.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}: {}", label, value)?;
                }
                Ok(())
            }
            Rendered::Raw(dump) => write!(f, "{}", dump),
        }
    }
}
