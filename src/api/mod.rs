//! REST plumbing: the request descriptions screens emit and the client that runs them.

pub mod client;

pub use client::ApiClient;

use crate::catalog::ResourceKind;
use crate::screen::Intent;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Every way a request can fail. Screens collapse all of them into one notice.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown to the user: the server's own `error` message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// One HTTP round-trip requested by a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// Screen the response is routed back to.
    pub screen: ResourceKind,
    pub intent: Intent,
    pub method: Method,
    /// Path segments below the base URL, e.g. `["animes", "a1"]`.
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl ApiCall {
    pub fn new(screen: ResourceKind, intent: Intent, method: Method, segments: Vec<String>) -> Self {
        Self {
            screen,
            intent,
            method,
            segments,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path relative to the base URL, for logs and tests.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}
