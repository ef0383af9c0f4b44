// catalog_seed/src/http.rs

//! Thin JSON-over-HTTP access layer.
//!
//! Nothing in here returns an error once the client is built: transport
//! failures, unexpected statuses and unparsable bodies are logged and surface
//! as `None` or an empty list. Retrying is the caller's business.

use crate::config::SeedConfig;
use crate::error::SeedResult;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Longest slice of a rejected response body that gets logged.
const ERROR_BODY_SNIPPET: usize = 250;

/// Statuses accepted from creation endpoints.
pub const CREATED_STATUSES: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
/// Statuses accepted from read endpoints.
pub const READ_STATUSES: &[StatusCode] = &[StatusCode::OK];

/// A response whose status was expected. `body` is `None` when the payload
/// was not a JSON object or list.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
  pub status: StatusCode,
  pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
  client: Client,
}

impl ApiClient {
  pub fn new(cfg: &SeedConfig) -> SeedResult<Self> {
    let client = Client::builder().timeout(cfg.request_timeout).build()?;
    Ok(Self { client })
  }

  /// `GET url`, expecting 200 and a JSON object or list.
  #[instrument(name = "http::get", skip(self), level = "debug")]
  pub async fn get_json(&self, url: &str) -> Option<Value> {
    let response = match self.client.get(url).send().await {
      Ok(r) => r,
      Err(e) => {
        warn!(error = %e, "GET {} failed.", url);
        return None;
      }
    };
    self.read_reply(response, READ_STATUSES, "GET", url).await?.body
  }

  /// `GET url` expecting a JSON list; anything else reads as empty.
  pub async fn get_list(&self, url: &str) -> Vec<Value> {
    match self.get_json(url).await {
      Some(Value::Array(items)) => items,
      _ => Vec::new(),
    }
  }

  /// `POST url` with a JSON body. `None` on transport failure or a status
  /// outside `expected`.
  #[instrument(name = "http::post", skip(self, body), level = "debug")]
  pub async fn post_json<B: Serialize + ?Sized + Sync>(
    &self,
    url: &str,
    body: &B,
    expected: &[StatusCode],
  ) -> Option<ApiReply> {
    let response = match self.client.post(url).json(body).send().await {
      Ok(r) => r,
      Err(e) => {
        warn!(error = %e, "POST {} failed.", url);
        return None;
      }
    };
    self.read_reply(response, expected, "POST", url).await
  }

  async fn read_reply(
    &self,
    response: reqwest::Response,
    expected: &[StatusCode],
    method: &str,
    url: &str,
  ) -> Option<ApiReply> {
    let status = response.status();
    let bytes = match response.bytes().await {
      Ok(b) => b,
      Err(e) => {
        warn!(error = %e, %status, "{} {}: failed to read response body.", method, url);
        return None;
      }
    };

    if !expected.contains(&status) {
      warn!(
        %status,
        body = %snippet(&bytes),
        "{} {} returned an unexpected status.",
        method,
        url
      );
      return None;
    }

    let body = parse_structured(&bytes);
    if body.is_none() {
      debug!(%status, "{} {}: response body is not a JSON object or list.", method, url);
    }
    Some(ApiReply { status, body })
  }
}

/// Parses `bytes` as JSON, keeping only objects and lists.
pub fn parse_structured(bytes: &[u8]) -> Option<Value> {
  match serde_json::from_slice::<Value>(bytes) {
    Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
    _ => None,
  }
}

fn snippet(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).chars().take(ERROR_BODY_SNIPPET).collect()
}
