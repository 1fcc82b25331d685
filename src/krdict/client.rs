use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::params::{SearchRequest, TranslationLanguage, ViewRequest, push_translation};
use super::types::{
    ApiError, DefinitionEntry, ErrorEnvelope, ExampleEntry, SearchResponse, ViewResponse,
    WordEntry, WordOfDayResponse,
};
use super::{Dictionary, KrdictError};
use crate::config::{ApiKey, Config};

type QueryPairs = Vec<(&'static str, String)>;

/// HTTP client for the dictionary service.
///
/// Every call is a single `GET {base}/{endpoint}?key=...&...` returning JSON.
/// Scraped endpoints live under `scraper/` on the same base URL.
#[derive(Clone, Debug)]
pub struct KrdictClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
}

impl KrdictClient {
    pub fn new(http: Client, config: &Config) -> Result<Self, KrdictError> {
        let api_key = config.api_key.clone().ok_or(KrdictError::ApiKeyNotSet)?;
        Ok(Self {
            http,
            api_key,
            base_url: config.api_url.clone(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: ApiKey::new("test-key").unwrap(),
            base_url: base_url.to_string(),
        }
    }

    fn endpoint_url(&self, endpoint: &str, pairs: &[(&str, String)]) -> Result<Url, KrdictError> {
        let mut url = Url::parse(&format!("{}/{endpoint}", self.base_url))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", self.api_key.expose());
            for (k, v) in pairs {
                query.append_pair(k, v);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, KrdictError> {
        let url = self.endpoint_url(endpoint, pairs)?;
        debug!(endpoint, params = pairs.len(), "krdict request");

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // The service reports failures in the body, sometimes with a 200.
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&text) {
            let err = classify_api_error(envelope.error);
            warn!(error = %err, status = %status, "krdict API error");
            return Err(err);
        }
        if !status.is_success() {
            warn!(status = %status, endpoint, "krdict request failed");
            return Err(KrdictError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn search_page<T: DeserializeOwned>(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<T>, KrdictError> {
        req.validate()?;
        self.get_json("search", &req.query_pairs()).await
    }
}

fn translation_pairs(translation: Option<TranslationLanguage>) -> QueryPairs {
    let mut pairs = Vec::new();
    push_translation(&mut pairs, translation.as_slice());
    pairs
}

fn classify_api_error(err: ApiError) -> KrdictError {
    KrdictError::Api {
        code: err.error_code.unwrap_or_else(|| "unknown".to_string()),
        message: err.message.unwrap_or_else(|| "Unknown error".to_string()),
    }
}

impl Dictionary for KrdictClient {
    async fn search_words(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<WordEntry>, KrdictError> {
        self.search_page(req).await
    }

    async fn search_definitions(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<DefinitionEntry>, KrdictError> {
        self.search_page(req).await
    }

    async fn search_examples(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<ExampleEntry>, KrdictError> {
        self.search_page(req).await
    }

    async fn view(&self, req: &ViewRequest) -> Result<ViewResponse, KrdictError> {
        self.get_json("view", &req.query_pairs()?).await
    }

    async fn scraped_view(
        &self,
        target_code: u32,
        translation: Option<TranslationLanguage>,
        fetch_multimedia: bool,
    ) -> Result<ViewResponse, KrdictError> {
        let mut pairs = vec![
            ("target_code", target_code.to_string()),
            ("fetch_multimedia", if fetch_multimedia { "y" } else { "n" }.to_string()),
        ];
        pairs.extend(translation_pairs(translation));
        self.get_json("scraper/view", &pairs).await
    }

    async fn word_of_the_day(
        &self,
        translation: Option<TranslationLanguage>,
    ) -> Result<WordOfDayResponse, KrdictError> {
        self.get_json("scraper/word-of-the-day", &translation_pairs(translation))
            .await
    }

    async fn semantic_category_words(
        &self,
        category: &str,
        translation: Option<TranslationLanguage>,
    ) -> Result<SearchResponse<WordEntry>, KrdictError> {
        if category.trim().is_empty() {
            return Err(KrdictError::InvalidParameter(
                "category must not be empty".into(),
            ));
        }
        let mut pairs = vec![("category", category.trim().to_string())];
        pairs.extend(translation_pairs(translation));
        self.get_json("scraper/semantic-category", &pairs).await
    }

    async fn subject_category_words(
        &self,
        categories: &[String],
        translation: Option<TranslationLanguage>,
    ) -> Result<SearchResponse<WordEntry>, KrdictError> {
        if categories.is_empty() {
            return Err(KrdictError::InvalidParameter(
                "at least one category is required".into(),
            ));
        }
        let mut pairs = vec![("category", categories.join(","))];
        pairs.extend(translation_pairs(translation));
        self.get_json("scraper/subject-category", &pairs).await
    }
}
