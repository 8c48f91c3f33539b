// Research service response types.
// Defines structs for deserializing the search and summarization endpoints.

use serde::{Deserialize, Serialize};

/// A single literature search hit, in service-provided rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub source: String,
    pub year: i32,
    /// Full abstract text, when the index has one. `abstract` is a keyword in Rust.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub url: Option<String>,
}

impl SearchResult {
    /// The text sent to the summarizer for this result: the full abstract
    /// when present, otherwise the bare URL. None when neither exists.
    pub fn summarize_input(&self) -> Option<&str> {
        self.abstract_text
            .as_deref()
            .or(self.url.as_deref())
    }
}

/// Response wrapper for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Response wrapper for both summarization endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Request body for the text/URL summarization endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_deserializes_abstract_keyword() {
        let json = r#"{
            "title": "T1",
            "source": "PubMed",
            "year": 2020,
            "abstract": "Long text...",
            "url": "https://example.org/t1"
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.title, "T1");
        assert_eq!(result.source, "PubMed");
        assert_eq!(result.year, 2020);
        assert_eq!(result.abstract_text.as_deref(), Some("Long text..."));
    }

    #[test]
    fn test_search_result_tolerates_missing_optionals() {
        let json = r#"{"title": "T2", "source": "arXiv", "year": 2023}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(result.abstract_text.is_none());
        assert!(result.url.is_none());
    }

    #[test]
    fn test_search_response_missing_results_is_an_error() {
        // A body without the expected field is treated the same as any other failure.
        let err = serde_json::from_str::<SearchResponse>("{}");
        assert!(err.is_err());
    }

    #[test]
    fn test_summarize_input_prefers_abstract_over_url() {
        let with_both = SearchResult {
            title: "T".into(),
            source: "S".into(),
            year: 2021,
            abstract_text: Some("Full abstract".into()),
            url: Some("https://example.org".into()),
        };
        assert_eq!(with_both.summarize_input(), Some("Full abstract"));

        let url_only = SearchResult {
            abstract_text: None,
            ..with_both.clone()
        };
        assert_eq!(url_only.summarize_input(), Some("https://example.org"));

        let neither = SearchResult {
            abstract_text: None,
            url: None,
            ..with_both
        };
        assert_eq!(neither.summarize_input(), None);
    }
}
