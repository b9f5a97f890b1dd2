use std::io;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

use indicatif::ProgressBar;

use crate::registration::{Captcha, Registration};
use crate::style;

pub mod util {
    use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
    use std::io;

    fn theme() -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn ask_text(prompt: &str) -> io::Result<String> {
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .interact_text()
    }

    /// Pre-filled with `initial`, which the user may keep or edit.
    pub fn edit_text(prompt: &str, initial: &str) -> io::Result<String> {
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .interact_text()
    }

    pub fn ask_password(prompt: &str) -> io::Result<String> {
        Password::with_theme(&theme())
            .with_prompt(prompt)
            .interact()
    }

    /// Empty input keeps `current`.
    pub fn ask_password_or_keep(prompt: &str, current: &str) -> io::Result<String> {
        if current.is_empty() {
            return ask_password(prompt);
        }
        let input = Password::with_theme(&theme())
            .with_prompt(format!("{} (empty to keep)", prompt))
            .allow_empty_password(true)
            .interact()?;
        Ok(if input.is_empty() {
            current.to_owned()
        } else {
            input
        })
    }

    pub fn confirm(prompt: &str) -> io::Result<bool> {
        Confirm::with_theme(&theme())
            .with_prompt(prompt)
            .default(true)
            .interact()
    }
}

/// CAPTCHA solved out of band; the user pastes the resulting token.
#[derive(Debug, Clone, Default)]
pub struct PromptCaptcha {
    site_key: Option<String>,
    resets: usize,
}

impl PromptCaptcha {
    pub fn new(site_key: Option<String>) -> Self {
        Self {
            site_key,
            resets: 0,
        }
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    pub fn solve(&self) -> io::Result<String> {
        if let Some(key) = &self.site_key {
            println!("Solve the challenge for site key {} and paste the token.", key);
        }
        util::ask_text("CAPTCHA token")
    }
}

impl Captcha for PromptCaptcha {
    fn reset(&mut self) {
        self.resets += 1;
        log::debug!("CAPTCHA challenge invalidated ({} so far)", self.resets);
    }
}

/// Prompts for every registration field, keeping what is already filled in.
pub fn fill_registration(reg: &mut Registration, captcha: &PromptCaptcha) -> io::Result<()> {
    let first_name = util::edit_text("First name", &reg.draft().first_name)?;
    reg.set_first_name(first_name);

    let last_name = util::edit_text("Last name", &reg.draft().last_name)?;
    reg.set_last_name(last_name);

    let email = util::edit_text("Email", &reg.draft().email)?;
    reg.set_email(email);

    let password = util::ask_password_or_keep("Password", &reg.draft().password)?;
    reg.set_password(password);
    if let Some(evaluation) = reg.strength_indicator() {
        style::print_strength(&evaluation, &reg.unmet_rules());
    }

    let confirmation = util::ask_password_or_keep(
        "Password confirmation",
        &reg.draft().password_confirmation,
    )?;
    reg.set_password_confirmation(confirmation);

    if reg.draft().captcha_token.is_empty() {
        let token = captcha.solve()?;
        reg.on_captcha_solved(token.trim());
    }
    Ok(())
}

pub trait SpinnerExt {
    fn with_ticking(self) -> Arc<Mutex<Self>>;
}

impl SpinnerExt for ProgressBar {
    fn with_ticking(self) -> Arc<Mutex<Self>> {
        let mutex_spinner = Arc::new(Mutex::new(self));
        let spinner = mutex_spinner.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(30)).await;
                let spinner = spinner.lock().await;
                if spinner.is_finished() {
                    break;
                }
                spinner.tick();
            }
        });
        mutex_spinner
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset_counts_challenges() {
        let mut captcha = PromptCaptcha::new(None);
        captcha.reset();
        captcha.reset();
        assert_eq!(captcha.resets(), 2);
    }
}
