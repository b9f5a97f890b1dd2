use std::time::Duration;

use serde::Serialize;

pub use ::reqwest::{Error, IntoUrl, Request, Response};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct Client {
    inner: ::reqwest::Client,
}

pub struct RequestBuilder {
    inner: ::reqwest::RequestBuilder,
    client: Client,
}

macro_rules! emit_request_fn {
    ($method:ident) => {
        pub fn $method(&self, u: impl IntoUrl) -> RequestBuilder {
            RequestBuilder::new(self.inner.$method(u), self.clone())
        }
    };
}

impl Client {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let inner = ::reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self { inner })
    }

    emit_request_fn!(post);
    emit_request_fn!(delete);

    pub(super) async fn execute_request(&self, req: Request) -> Result<Response, Error> {
        log::debug!("{} {}", req.method(), req.url());
        let resp = self.inner.execute(req).await?;
        log::debug!("{} <- {}", resp.status(), resp.url());
        Ok(resp)
    }
}

impl RequestBuilder {
    fn new(b: ::reqwest::RequestBuilder, client: Client) -> Self {
        Self { inner: b, client }
    }

    pub async fn send(self) -> Result<Response, Error> {
        let req = self.inner.build()?;
        self.client.execute_request(req).await
    }

    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.inner = self.inner.json(json);
        self
    }
}
