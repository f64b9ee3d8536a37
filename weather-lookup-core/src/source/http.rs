use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    error::LookupError,
    model::{CreatedRecord, LookupResult, NewRecord},
};

use super::RecordSource;

/// Talks to the weather record service over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    base_url: String,
    http: Client,
}

impl HttpRecordSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/weather/{identifier}`, identifier inserted as given.
    pub fn lookup_url(&self, identifier: &str) -> String {
        format!("{}/weather/{}", self.base_url, identifier)
    }

    /// Store a new record; the service fetches current weather for the
    /// location and hands back the id to look it up by.
    pub async fn create_record(&self, record: &NewRecord) -> Result<CreatedRecord> {
        let url = format!("{}/weather", self.base_url);
        debug!(%url, location = %record.location, "creating weather record");

        let res = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .context("Failed to send request to the weather service")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read weather service response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Creating weather record failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse weather service response JSON")
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, identifier: &str) -> Result<LookupResult, LookupError> {
        let url = self.lookup_url(identifier);
        debug!(%url, "looking up weather record");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        debug!(%status, "weather service responded");

        if !status.is_success() {
            return Err(LookupError::NotFound {
                status: status.as_u16(),
            });
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
