pub mod delete;
pub mod register;
pub mod secrets;
pub mod strength;

use tresor_webclient::Url;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Base URL of the vault API, overriding the config file
    #[arg(long, global = true)]
    pub api_url: Option<Url>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Strength(strength::Args),
    Register(register::Args),

    #[command(alias("ls"))]
    Secrets(secrets::Args),

    #[command(alias("rm"))]
    Delete(delete::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Strength(args) => strength::exec(args, self),
            Register(args) => register::exec(args, self).await,
            Secrets(args) => secrets::exec(args, self).await,
            Delete(args) => delete::exec(args, self).await,
        }
    }
}
