//! HTTP implementation of [`ChatService`] against the `/chat` endpoint.
//!
//! One `POST {base_url}/chat` per send, JSON in, JSON out. No streaming,
//! no retries, no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{ChatService, ServiceError};
use super::types::{ChatReply, ChatRequest};

/// Chat service backed by a plain HTTP endpoint.
pub struct HttpChatService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatService {
    pub fn new(base_url: String) -> Self {
        Self {
            // Tolerate a trailing slash in configured URLs
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &str) -> Result<String, ServiceError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        info!("Sending chat request ({} bytes)", message.len());

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        debug!("Chat response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Chat API error: {} - {}", status, err_body);
            return Err(ServiceError::Api {
                status,
                message: err_body,
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        // An empty reply string is as useless as a missing one; the server
        // puts errors in other fields and omits `response` entirely.
        reply
            .response
            .filter(|r| !r.is_empty())
            .ok_or(ServiceError::IncompleteReply)
    }
}
