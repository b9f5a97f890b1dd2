use serde::Deserialize;

/// Live-server settings, read from `TRESOR_*` environment variables.
#[derive(Deserialize, Debug)]
pub struct TestConfig {
    pub api_url: String,
    pub email: String,
    pub password: String,
}

impl TestConfig {
    pub fn from_env() -> Self {
        envy::prefixed("TRESOR_")
            .from_env::<Self>()
            .expect("TestConfig::from_env(): Failed to load from env")
    }
}
