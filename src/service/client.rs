// Research service HTTP client.
// Wraps reqwest with the configured service origin; all three endpoints share
// one uniform failure policy (any transport error or non-2xx status).

use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderValue, USER_AGENT},
    multipart::{Form, Part},
};

use crate::config::Config;
use crate::error::{Result, SiftError};

use super::types::{SearchResponse, SearchResult, SummarizeRequest, SummaryResponse};

/// Client for the remote search/summarization service.
///
/// Cheap to clone; each in-flight request holds its own clone.
#[derive(Debug, Clone)]
pub struct ResearchClient {
    client: Client,
    base_url: String,
}

impl ResearchClient {
    /// Create a client bound to the configured service origin.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("sift-tui"));

        // No timeout: a hung request stays pending and its trigger stays disabled.
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(SiftError::Api)?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Search the literature index. Results come back in service rank order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(SiftError::Api)?;

        let body: SearchResponse = Self::check(response)?.json().await?;
        Ok(body.results)
    }

    /// Summarize free text or a URL reference.
    pub async fn summarize(&self, input: &str) -> Result<String> {
        let url = format!("{}/api/summarize", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SummarizeRequest {
                input: input.to_string(),
            })
            .send()
            .await
            .map_err(SiftError::Api)?;

        let body: SummaryResponse = Self::check(response)?.json().await?;
        Ok(body.summary)
    }

    /// Summarize an uploaded PDF document, sent as a multipart `file` field.
    pub async fn summarize_pdf(&self, file_name: &str, data: Vec<u8>) -> Result<String> {
        let url = format!("{}/api/summarize-pdf", self.base_url);
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(SiftError::Api)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(SiftError::Api)?;

        let body: SummaryResponse = Self::check(response)?.json().await?;
        Ok(body.summary)
    }

    /// Collapse any non-success status into a failure; no status-code branching.
    fn check(response: Response) -> Result<Response> {
        response.error_for_status().map_err(SiftError::Api)
    }
}
