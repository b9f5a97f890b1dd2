use std::time::Duration;

use once_cell::sync::Lazy;

use tresor_webclient::*;

mod testconfig;
use testconfig::TestConfig;

static CONFIG: Lazy<TestConfig> = Lazy::new(TestConfig::from_env);

fn live_client() -> TresorClient {
    TresorClient::new(ApiUrls::parse(&CONFIG.api_url).unwrap()).unwrap()
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let urls = ApiUrls::parse("http://127.0.0.1:1/api").unwrap();
    let cli = TresorClient::with_timeout(urls, Duration::from_secs(5)).unwrap();

    let err = cli
        .fetch_secrets(&LoginValues::new("a@b.c", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)), "{:?}", err);

    let err = cli.delete_secret(1).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "{:?}", err);
}

#[tokio::test]
#[ignore = "needs a running vault server (TRESOR_API_URL, TRESOR_EMAIL, TRESOR_PASSWORD)"]
async fn fetch_secrets_of_existing_user() {
    let cli = live_client();
    let identity = LoginValues::new(&CONFIG.email, &CONFIG.password);

    let raws = cli.fetch_secrets(&identity).await.unwrap();
    for raw in raws {
        let secret = raw.decode().unwrap();
        assert!(secret.id > 0);
    }
}

#[tokio::test]
#[ignore = "needs a running vault server (TRESOR_API_URL, TRESOR_EMAIL, TRESOR_PASSWORD)"]
async fn create_user_without_captcha_is_rejected() {
    let cli = live_client();
    let cred = Credentials {
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        email: CONFIG.email.clone(),
        password: "Abc123!?".to_owned(),
        password_confirmation: "Abc123!?".to_owned(),
        captcha_token: String::new(),
    };

    let err = cli.create_user(&cred).await.unwrap_err();
    assert!(matches!(err, Error::Rejected { .. }), "{:?}", err);
    assert_eq!(err.to_string(), "Missing reCAPTCHA token.");
}

#[tokio::test]
#[ignore = "needs a running vault server (TRESOR_API_URL, TRESOR_EMAIL, TRESOR_PASSWORD)"]
async fn delete_unknown_secret_fails() {
    let cli = live_client();
    assert!(cli.delete_secret(i64::MAX).await.is_err());
}
