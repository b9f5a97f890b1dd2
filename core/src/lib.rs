pub mod action;
pub mod config;
pub mod interactive;
pub mod registration;
pub mod render;
pub mod secrets;
pub mod strength;
pub mod style;

pub use crate::config::Config;
pub use crate::registration::{Captcha, Registration};
pub use crate::secrets::SecretsList;
pub use crate::strength::StrengthCategory;

pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
