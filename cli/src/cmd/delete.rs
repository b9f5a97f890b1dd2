use anyhow::{ensure, Context as _};
use tresor_core::{action, interactive::util::ask_password, style};
use tresor_webclient::{LoginValues, SecretId};

use super::{GlobalArgs, SubcmdResult};
use crate::{config::GlobalConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, short)]
    pub email: String,

    #[arg(required = true)]
    pub ids: Vec<SecretId>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args)?.config;
    let client = cfg.client()?;

    let password = ask_password("Password").context("Failed to read password")?;
    let identity = LoginValues::new(args.email.as_str(), password);
    let ids = util::dedup(args.ids.clone());

    let (list, failed) = action::delete_secrets(&client, &identity, &ids).await?;

    println!();
    style::print_secrets(list.secrets());
    ensure!(
        failed.is_empty(),
        "Failed to delete {} of {} secrets: {:?}",
        failed.len(),
        ids.len(),
        failed
    );
    Ok(())
}
