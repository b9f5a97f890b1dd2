use anyhow::Context as _;
use tresor_core::{action, interactive::util::ask_password, style};
use tresor_webclient::LoginValues;

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, short)]
    pub email: String,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args)?.config;
    let client = cfg.client()?;

    let password = ask_password("Password").context("Failed to read password")?;
    let identity = LoginValues::new(args.email.as_str(), password);

    let list = action::load_secrets(&client, &identity).await?;
    style::print_secrets(list.secrets());
    println!("{} secrets", list.secrets().len());
    Ok(())
}
