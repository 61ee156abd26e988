use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};
use cw_core::{ArticleRecord, Config, Error, Notifier, Result};
use crate::message::format_message;

#[derive(Debug, Serialize, PartialEq)]
pub struct PushRequest {
    pub to: String,
    pub messages: Vec<TextMessage>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Pushes one text message per batch to a fixed LINE recipient.
pub struct LinePushNotifier {
    client: Client,
    endpoint: String,
    access_token: String,
    recipient: String,
}

impl LinePushNotifier {
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            access_token: access_token.into(),
            recipient: recipient.into(),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.push_endpoint, &config.access_token, &config.recipient)
    }

    pub fn build_request(&self, articles: &[ArticleRecord]) -> PushRequest {
        PushRequest {
            to: self.recipient.clone(),
            messages: vec![TextMessage {
                kind: "text",
                text: format_message(articles),
            }],
        }
    }
}

impl fmt::Debug for LinePushNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinePushNotifier")
            .field("client", &"<reqwest::Client>")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[async_trait]
impl Notifier for LinePushNotifier {
    fn name(&self) -> &str {
        "LINE"
    }

    async fn notify(&self, articles: &[ArticleRecord]) -> Result<()> {
        if articles.is_empty() {
            return Ok(());
        }

        let request = self.build_request(articles);
        debug!("Pushing {} article(s) to {}", articles.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery(format!("HTTP {}: {}", status, body.trim())));
        }

        info!("📨 Sent LINE notification for {} article(s)", articles.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let notifier = LinePushNotifier::new("https://api.line.me/v2/bot/message/push", "token", "U123");
        let request = notifier.build_request(&[ArticleRecord::new("原神 × カフェ", "/a")]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "to": "U123",
                "messages": [{
                    "type": "text",
                    "text": "新しいコラボ情報が1件見つかりました！\n\n■ 原神 × カフェ\n/a"
                }]
            })
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let notifier = LinePushNotifier::new("https://example.com/push", "very-secret", "U123");
        let debug = format!("{:?}", notifier);
        assert!(!debug.contains("very-secret"));
        assert_eq!(notifier.name(), "LINE");
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_request() {
        // Nothing listens on the discard port, so any request would fail.
        let notifier = LinePushNotifier::new("http://127.0.0.1:9/push", "token", "U123");
        assert!(notifier.notify(&[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_delivery_error() {
        let client = Client::builder().no_proxy().build().unwrap();
        let notifier = LinePushNotifier::new("http://127.0.0.1:9/push", "token", "U123").with_client(client);
        let result = notifier.notify(&[ArticleRecord::new("原神", "/a")]).await;
        assert!(matches!(result, Err(Error::Delivery(_))));
    }
}
