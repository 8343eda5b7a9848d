pub mod chatstate;
pub mod wire;

use std::fmt::Debug;
use std::time::Duration;

pub use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use chatstate::ChatState;
use wire::{ChatStateReply, MultiplyReply, MultiplyRequest, TestReply, WebhookReply};

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),
    #[error(transparent)]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::Transport(err)
        }
    }
}

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    /// `base_url` is the scheme and authority of the router, e.g.
    /// `http://127.0.0.1:5000`. `timeout` bounds each whole request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }

    pub async fn greeting(&self) -> Result<String> {
        let response = self.http.get(self.endpoint("/")).send().await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }

    pub async fn test(&self) -> Result<TestReply> {
        let response = self.http.get(self.endpoint("test")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn webhook(&self, payload: &Value) -> Result<WebhookReply> {
        self.post_json("webhook", payload).await
    }

    pub async fn multiply(&self, number1: f64, number2: f64) -> Result<MultiplyReply> {
        self.post_json("multiply", &MultiplyRequest { number1, number2 })
            .await
    }

    pub async fn chatstate(&self, state: &ChatState) -> Result<ChatStateReply> {
        self.post_json("chatstate", state).await
    }

    /// Posts any serializable body and decodes a 200 reply as `R`.
    pub async fn post_json<B, R>(&self, route: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(route);
        tracing::debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(ClientError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = Client::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint("chatstate"), "http://localhost:5000/chatstate");
        assert_eq!(client.endpoint("/test"), "http://localhost:5000/test");
        assert_eq!(client.endpoint("/"), "http://localhost:5000/");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let client = Client::new("http://127.0.0.1:9", Duration::from_secs(5)).unwrap();
        let err = client.test().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)), "{err:?}");
    }
}
