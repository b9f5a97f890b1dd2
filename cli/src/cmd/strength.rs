use anyhow::Context as _;
use tresor_core::{action, interactive::util::ask_password, print_success, StrengthCategory};

use super::{GlobalArgs, SubcmdResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Password to check; asked with hidden input when omitted
    #[arg()] // positional argument
    pub password: Option<String>,
}

pub fn exec(args: &Args, _global_args: &GlobalArgs) -> SubcmdResult {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => ask_password("Password").context("Failed to read password")?,
    };

    let evaluation = action::check_strength(&password);
    if evaluation.category == StrengthCategory::Strong {
        print_success!("Password is {} enough to register", evaluation.category);
    }
    Ok(())
}
