use async_trait::async_trait;

use super::AvailabilityProvider;
use crate::errors::AppError;
use crate::models::AvailabilityResponse;

const RESDIARY_BASE_URL: &str = "https://booking.resdiary.com";

pub struct ResDiaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl ResDiaryClient {
    pub fn new() -> Self {
        Self {
            base_url: RESDIARY_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The restaurant id is pushed as a single path segment, so `/`, `?`
    /// and `#` in it are percent-encoded.
    fn search_url(&self, restaurant: &str) -> Result<reqwest::Url, AppError> {
        let invalid = || {
            AppError::Config(format!("invalid ResDiary base URL {:?}", self.base_url))
        };

        let mut url = reqwest::Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["api", "Restaurant", restaurant, "AvailabilitySearch"]);
        Ok(url)
    }
}

impl Default for ResDiaryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityProvider for ResDiaryClient {
    async fn search(
        &self,
        restaurant: &str,
        date: &str,
        covers: &str,
    ) -> Result<AvailabilityResponse, AppError> {
        let url = self.search_url(restaurant)?;
        tracing::debug!("GET {url} date={date} covers={covers}");

        let resp = self
            .client
            .get(url.clone())
            .query(&[
                ("date", date),
                ("covers", covers),
                ("channelCode", "ONLINE"),
                ("areaId", "0"),
                ("availabilityType", "Reservation"),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!("GET {url} -> {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(AvailabilityResponse::from_json(&body)?)
    }
}
