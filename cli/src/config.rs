use std::path::PathBuf;

use anyhow::Context as _;
use tresor_core::Config;

use crate::{cmd::GlobalArgs, util};

pub const APP_NAME: &str = "tresor-cli";

/// Per-user settings: the config file, overridden by command line arguments.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    pub config: Config,
}

impl GlobalConfig {
    pub const FILENAME: &str = "tresor-cli.toml";

    pub fn filepath() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(Self::FILENAME))
    }

    pub fn from_file_or_default() -> anyhow::Result<Self> {
        let Some(path) = Self::filepath().filter(|p| p.is_file()) else {
            log::debug!("No config file, using defaults");
            return Ok(Self::default());
        };
        let config = Config::from_toml_file(path.clone())
            .with_context(|| format!("Invalid config {:?}", util::replace_homedir_to_tilde(path)))?;
        Ok(Self { config })
    }

    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        let GlobalArgs { subcmd: _, api_url } = args;

        if let Some(url) = api_url {
            self.config.api.base_url = url.clone();
        }
        self
    }

    pub fn from_file_and_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        Self::from_file_or_default().map(|cfg| cfg.with_args(args))
    }
}
