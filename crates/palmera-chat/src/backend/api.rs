//! ChatBackend trait implementation for HttpBackend.

use async_trait::async_trait;
use tracing::debug;

use crate::wire::{ChatRequest, ChatResponse, WireMessage};
use crate::{ChatBackend, ChatError};

use super::client::HttpBackend;

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, messages: &[WireMessage]) -> Result<ChatResponse, ChatError> {
        let body = ChatRequest {
            messages: messages.to_vec(),
        };

        debug!(turns = messages.len(), "chat endpoint request");

        let response = self
            .http
            .post(self.endpoint_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ChatError::Api(format!("HTTP {status}: {text}")));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))
    }
}
