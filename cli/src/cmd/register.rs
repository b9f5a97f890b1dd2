use tresor_core::{action, interactive::PromptCaptcha, print_success};

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args)?.config;
    let client = cfg.client()?;
    let mut captcha = PromptCaptcha::new(cfg.captcha.site_key.clone());

    let identity = action::register(&client, &mut captcha).await?;
    print_success!("Successfully registered {}", identity.email);
    Ok(())
}
