use colored::Colorize as _;
use indicatif::{ProgressBar, ProgressStyle};
use tresor_webclient::{LoginValues, SecretId, SecretStore, UserStore};

use crate::error::*;
use crate::interactive::{self, PromptCaptcha, SpinnerExt as _};
use crate::registration::{InputError, Registration, SubmitError};
use crate::secrets::SecretsList;
use crate::strength::{self, Evaluation};
use crate::style;

fn spinner(msg: &'static str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    ProgressBar::new_spinner().with_style(style).with_message(msg)
}

pub fn check_strength(password: &str) -> Evaluation {
    let evaluation = strength::evaluate(password);
    style::print_strength(&evaluation, &strength::unmet_criteria(password));
    evaluation
}

pub async fn load_secrets<S>(store: &S, identity: &LoginValues) -> Result<SecretsList>
where
    S: SecretStore + ?Sized,
{
    let mut list = SecretsList::new();

    let spinner = spinner("Loading secrets ...").with_ticking();
    let loaded = list.load(store, identity).await;
    spinner.lock().await.finish_and_clear();

    loaded.context("Failed to load secrets")?;
    Ok(list)
}

/// Deletes every id in turn; one failed delete does not stop the others.
///
/// Returns the list as left after all deletes, and the ids that failed.
pub async fn delete_secrets<S>(
    store: &S,
    identity: &LoginValues,
    ids: &[SecretId],
) -> Result<(SecretsList, Vec<SecretId>)>
where
    S: SecretStore + ?Sized,
{
    ensure!(!ids.is_empty(), "No secret id given");

    let mut list = self::load_secrets(store, identity).await?;
    let mut failed = Vec::new();

    for &id in ids {
        if !list.secrets().iter().any(|s| s.id == id) {
            log::warn!("Secret {} is not in the loaded list", id);
        }
        match list.delete(store, id).await {
            Ok(()) => crate::print_success!("Deleted secret #{}", id),
            Err(e) => {
                crate::print_failure!("{}", e);
                failed.push(id);
            }
        }
    }
    Ok((list, failed))
}

/// Prompts for the registration form until the server accepts it or the
/// user gives up.
pub async fn register<U>(users: &U, captcha: &mut PromptCaptcha) -> Result<LoginValues>
where
    U: UserStore + ?Sized,
{
    let mut reg = Registration::new();

    loop {
        interactive::fill_registration(&mut reg, captcha).context("Failed to read input")?;

        let err = match reg.submit(users, captcha).await {
            Ok(identity) => return Ok(identity),
            Err(e) => e,
        };

        eprintln!("{}", reg.message().unwrap_or_default().bright_red());
        if let SubmitError::Input(InputError::WeakPassword) = err {
            for c in reg.unmet_rules() {
                eprintln!("  {} {}", "✗".bright_red(), c.rule());
            }
        }

        let retry = interactive::util::confirm("Try again?").context("Failed to read input")?;
        if !retry {
            return Err(err).context("Registration aborted");
        }
    }
}
