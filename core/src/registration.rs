//! Registration form state and submission.
//!
//! `submit` checks, in order: CAPTCHA token, password confirmation,
//! password strength, required fields. Only a draft passing all of them is
//! handed to the [`UserStore`].

use tresor_webclient::{Credentials, LoginValues, UserStore};

use crate::strength::{self, Criterion, Evaluation, StrengthCategory};

/// Bot-check widget driven by the registration form.
///
/// Tokens arrive through [`Registration::on_captcha_solved`].
pub trait Captcha {
    /// Invalidates the current challenge so a fresh token must be obtained.
    fn reset(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RequiredField {
    #[strum(serialize = "First name")]
    FirstName,
    #[strum(serialize = "Last name")]
    LastName,
    Email,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("please confirm you are not a robot.")]
    MissingCaptcha,

    #[error("Password and password-confirmation are not equal.")]
    PasswordMismatch,

    #[error("Password is too weak. Please follow the password rules.")]
    WeakPassword,

    #[error("{0} is required.")]
    Required(RequiredField),
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Collaborator(#[from] tresor_webclient::Error),
}

pub type Result<T, E = SubmitError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    /// Last submission was refused by the server; the form stays editable.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Registration {
    draft: Credentials,
    evaluation: Evaluation,
    phase: Phase,
    message: Option<String>,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            draft: Credentials::default(),
            evaluation: strength::evaluate(""),
            phase: Phase::default(),
            message: None,
        }
    }
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Credentials {
        &self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Live strength of the password; hidden while the password is empty.
    pub fn strength_indicator(&self) -> Option<Evaluation> {
        (!self.draft.password.is_empty()).then_some(self.evaluation)
    }

    pub fn unmet_rules(&self) -> Vec<Criterion> {
        strength::unmet_criteria(&self.draft.password)
    }

    fn edit(&mut self) -> &mut Credentials {
        if self.phase != Phase::Submitting {
            self.phase = Phase::Editing;
        }
        &mut self.draft
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.edit().first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.edit().last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.edit().email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.edit().password = value.into();
        self.evaluation = strength::evaluate(&self.draft.password);
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.edit().password_confirmation = value.into();
    }

    pub fn on_captcha_solved(&mut self, token: impl Into<String>) {
        self.edit().captcha_token = token.into();
    }

    /// Runs the local gates, stopping at the first failure.
    pub fn validate(&self) -> Result<(), InputError> {
        let d = &self.draft;

        if d.captcha_token.is_empty() {
            return Err(InputError::MissingCaptcha);
        }
        if d.password != d.password_confirmation {
            return Err(InputError::PasswordMismatch);
        }
        if self.evaluation.category != StrengthCategory::Strong {
            return Err(InputError::WeakPassword);
        }

        let required = [
            (RequiredField::FirstName, &d.first_name),
            (RequiredField::LastName, &d.last_name),
            (RequiredField::Email, &d.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InputError::Required(field));
            }
        }
        Ok(())
    }

    /// Validates the draft and registers it.
    ///
    /// On success the draft is cleared and the new identity is returned.
    /// On a server failure only the CAPTCHA token is cleared, so the user can
    /// solve a new challenge and resubmit.
    pub async fn submit<U, C>(&mut self, users: &U, captcha: &mut C) -> Result<LoginValues>
    where
        U: UserStore + ?Sized,
        C: Captcha + ?Sized,
    {
        if let Err(e) = self.validate() {
            log::debug!("Registration not submitted: {}", e);
            self.phase = Phase::Editing;
            self.message = Some(e.to_string());
            return Err(e.into());
        }

        self.phase = Phase::Submitting;
        self.message = None;
        log::debug!("Submitting registration of {}", self.draft.email);

        match users.create_user(&self.draft).await {
            Ok(()) => {
                let draft = std::mem::take(&mut self.draft);
                self.evaluation = strength::evaluate("");
                self.phase = Phase::Succeeded;
                captcha.reset();
                log::info!("Registered {}", draft.email);
                Ok(LoginValues::new(draft.email, draft.password))
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                self.draft.captcha_token.clear();
                captcha.reset();
                self.phase = Phase::Failed;
                self.message = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
