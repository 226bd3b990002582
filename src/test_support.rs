//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::{ChatService, ServiceError};

/// A canned-reply service for tests that don't need real HTTP.
pub struct CannedService {
    pub reply: Result<String, &'static str>,
}

#[async_trait]
impl ChatService for CannedService {
    fn name(&self) -> &str {
        "canned"
    }

    async fn send(&self, _message: &str) -> Result<String, ServiceError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(msg) => Err(ServiceError::Network((*msg).to_string())),
        }
    }
}

/// Creates a test App backed by a service that always answers "ok".
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(CannedService {
            reply: Ok("ok".to_string()),
        }),
        "http://test.invalid".to_string(),
    )
}
