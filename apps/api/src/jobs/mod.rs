//! Job search proxy — forwards listing searches to a RapidAPI JSearch-style endpoint.
//!
//! Like the LLM client, calls are made once; failures surface to the caller.

pub mod handlers;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("job search is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A listing as returned to the dashboard. Every upstream field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobListing {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub employer_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_employment_type: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_country: Option<String>,
    pub job_is_remote: Option<bool>,
    pub job_apply_link: Option<String>,
    pub job_posted_at_datetime_utc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Vec<JobListing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobQuery {
    pub query: String,
    pub location: Option<String>,
    pub page: u32,
}

impl JobQuery {
    /// JSearch takes location inline: "rust developer in Berlin".
    pub fn search_text(&self) -> String {
        match self.location.as_deref().map(str::trim) {
            Some(location) if !location.is_empty() => {
                format!("{} in {}", self.query.trim(), location)
            }
            _ => self.query.trim().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    api_key: Option<String>,
    host: String,
}

impl JobSearchClient {
    pub fn new(config: &Config) -> Result<Self, JobSearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key: config.job_search_api_key.clone(),
            host: config.job_search_host.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn search(&self, query: &JobQuery) -> Result<Vec<JobListing>, JobSearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(JobSearchError::NotConfigured)?;

        let page = query.page.max(1).to_string();
        let response = self
            .client
            .get(format!("https://{}/search", self.host))
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(&[
                ("query", query.search_text().as_str()),
                ("page", page.as_str()),
                ("num_pages", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let envelope: SearchEnvelope = response.json().await?;
        debug!("Job search returned {} listings", envelope.data.len());
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str, location: Option<&str>) -> JobQuery {
        JobQuery {
            query: q.to_string(),
            location: location.map(String::from),
            page: 1,
        }
    }

    #[test]
    fn test_search_text_appends_location() {
        assert_eq!(
            query("rust developer", Some("Berlin")).search_text(),
            "rust developer in Berlin"
        );
    }

    #[test]
    fn test_search_text_ignores_blank_location() {
        assert_eq!(query(" data analyst ", Some("  ")).search_text(), "data analyst");
        assert_eq!(query("data analyst", None).search_text(), "data analyst");
    }

    #[test]
    fn test_envelope_tolerates_sparse_listings() {
        let envelope: SearchEnvelope = serde_json::from_str(
            r#"{
                "status": "OK",
                "data": [
                    {"job_id": "abc", "job_title": "Engineer", "job_is_remote": true, "extra": 1},
                    {}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].job_title.as_deref(), Some("Engineer"));
        assert_eq!(envelope.data[0].job_is_remote, Some(true));
        assert_eq!(envelope.data[1], JobListing::default());
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(envelope.data.is_empty());
    }
}
