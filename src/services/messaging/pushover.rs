use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;

const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Sends plain-text Pushover messages. `to` is the recipient's user or group key.
pub struct PushoverProvider {
    api_token: String,
    api_url: String,
    client: reqwest::Client,
}

impl PushoverProvider {
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            api_url: PUSHOVER_API_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

#[async_trait]
impl MessagingProvider for PushoverProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        tracing::debug!("sending Pushover message to {to}");

        let resp = self
            .client
            .post(&self.api_url)
            .form(&[
                ("token", self.api_token.as_str()),
                ("user", to),
                ("message", body),
            ])
            .send()
            .await
            .context("failed to send Pushover message")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            anyhow::bail!("Pushover API error ({status}): {detail}");
        }

        tracing::debug!("Pushover message sent");
        Ok(())
    }
}
