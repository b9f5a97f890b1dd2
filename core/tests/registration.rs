use std::sync::Mutex;

use async_trait::async_trait;
use tresor_core::registration::{Captcha, InputError, Phase, Registration, SubmitError};
use tresor_webclient::{Credentials, Error, LoginValues, Result, StatusCode, UserStore};

#[derive(Default)]
struct FakeUsers {
    error: Option<String>,
    created: Mutex<Vec<Credentials>>,
}

#[async_trait]
impl UserStore for FakeUsers {
    async fn create_user(&self, credentials: &Credentials) -> Result<()> {
        self.created.lock().unwrap().push(credentials.clone());
        match &self.error {
            Some(message) => Err(Error::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct FakeCaptcha {
    resets: usize,
}

impl Captcha for FakeCaptcha {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

fn filled(password: &str, confirmation: &str, token: &str) -> Registration {
    let mut r = Registration::new();
    r.set_first_name("Ada");
    r.set_last_name("Lovelace");
    r.set_email("ada@example.com");
    r.set_password(password);
    r.set_password_confirmation(confirmation);
    r.on_captcha_solved(token);
    r
}

#[tokio::test]
async fn missing_captcha_blocks_submission() {
    let users = FakeUsers::default();
    let mut captcha = FakeCaptcha::default();
    let mut reg = filled("Abc123!?", "Abc123!?", "");

    let err = reg.submit(&users, &mut captcha).await.unwrap_err();

    assert!(matches!(err, SubmitError::Input(InputError::MissingCaptcha)));
    assert_eq!(reg.message(), Some("please confirm you are not a robot."));
    assert_eq!(reg.phase(), Phase::Editing);
    assert!(users.created.lock().unwrap().is_empty());
    assert_eq!(captcha.resets, 0);
}

#[tokio::test]
async fn mismatch_and_weak_password_never_reach_server() {
    let users = FakeUsers::default();
    let mut captcha = FakeCaptcha::default();

    let mut reg = filled("Abc123!?", "Abc123!!", "tok");
    let err = reg.submit(&users, &mut captcha).await.unwrap_err();
    assert_eq!(err.to_string(), "Password and password-confirmation are not equal.");

    let mut reg = filled("password", "password", "tok");
    let err = reg.submit(&users, &mut captcha).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Password is too weak. Please follow the password rules."
    );
    assert_eq!(reg.message(), Some(err.to_string().as_str()));

    assert!(users.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn success_hands_over_identity_and_clears_draft() {
    let users = FakeUsers::default();
    let mut captcha = FakeCaptcha::default();
    let mut reg = filled("Abc123!?", "Abc123!?", "tok");

    let identity = reg.submit(&users, &mut captcha).await.unwrap();

    assert_eq!(identity, LoginValues::new("ada@example.com", "Abc123!?"));
    assert_eq!(reg.phase(), Phase::Succeeded);
    assert_eq!(reg.draft(), &Credentials::default());
    assert_eq!(reg.strength_indicator(), None);
    assert_eq!(reg.message(), None);
    assert_eq!(captcha.resets, 1);

    let created = users.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].first_name, "Ada");
    assert_eq!(created[0].captcha_token, "tok");
}

#[tokio::test]
async fn server_failure_keeps_fields_but_clears_token() {
    let users = FakeUsers {
        error: Some("Email already taken.".to_owned()),
        ..Default::default()
    };
    let mut captcha = FakeCaptcha::default();
    let mut reg = filled("Abc123!?", "Abc123!?", "tok");

    let err = reg.submit(&users, &mut captcha).await.unwrap_err();

    assert!(matches!(err, SubmitError::Collaborator(_)));
    assert_eq!(reg.message(), Some("Email already taken."));
    assert_eq!(reg.phase(), Phase::Failed);
    assert_eq!(captcha.resets, 1);

    let draft = reg.draft();
    assert_eq!(draft.first_name, "Ada");
    assert_eq!(draft.last_name, "Lovelace");
    assert_eq!(draft.email, "ada@example.com");
    assert_eq!(draft.password, "Abc123!?");
    assert_eq!(draft.password_confirmation, "Abc123!?");
    assert_eq!(draft.captcha_token, "");

    // resubmitting without a new token stops at the captcha gate
    let err = reg.submit(&users, &mut captcha).await.unwrap_err();
    assert!(matches!(err, SubmitError::Input(InputError::MissingCaptcha)));
    assert_eq!(users.created.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn resubmission_after_failure_succeeds() {
    let failing = FakeUsers {
        error: Some("Missing reCAPTCHA token.".to_owned()),
        ..Default::default()
    };
    let users = FakeUsers::default();
    let mut captcha = FakeCaptcha::default();
    let mut reg = filled("Abc123!?", "Abc123!?", "expired");

    reg.submit(&failing, &mut captcha).await.unwrap_err();
    reg.on_captcha_solved("fresh");
    assert_eq!(reg.phase(), Phase::Editing);

    let identity = reg.submit(&users, &mut captcha).await.unwrap();
    assert_eq!(identity.email, "ada@example.com");
    assert_eq!(users.created.lock().unwrap()[0].captcha_token, "fresh");
    assert_eq!(captcha.resets, 2);
}

#[tokio::test]
async fn a_new_message_replaces_the_old_one() {
    let users = FakeUsers::default();
    let mut captcha = FakeCaptcha::default();
    let mut reg = filled("Abc123!?", "other", "");

    reg.submit(&users, &mut captcha).await.unwrap_err();
    assert_eq!(reg.message(), Some("please confirm you are not a robot."));

    reg.on_captcha_solved("tok");
    reg.submit(&users, &mut captcha).await.unwrap_err();
    assert_eq!(
        reg.message(),
        Some("Password and password-confirmation are not equal.")
    );
}
