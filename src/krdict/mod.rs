//! Boundary to the dictionary service: request parameters, response types,
//! the `Dictionary` trait and its HTTP implementation.

pub mod client;
pub mod params;
pub mod types;

pub use client::KrdictClient;
pub use params::{SearchRequest, SearchType, TranslationLanguage, ViewRequest};

use types::{
    DefinitionEntry, ExampleEntry, Response, SearchResponse, ViewResponse, WordEntry,
    WordOfDayResponse,
};

/// Errors reported by the dictionary service or the transport to it.
#[derive(Debug, thiserror::Error)]
pub enum KrdictError {
    #[error("KRDICT_KEY not set. Request a key at https://krdict.korean.go.kr/openApi/openApiRegister")]
    ApiKeyNotSet,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("API error ({code}): {message}")]
    Api { code: String, message: String },

    #[error("Request failed: status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Query capability of the dictionary service.
/// Implemented by `KrdictClient` for production; mock implementations used in tests.
pub trait Dictionary {
    /// Word and idiom/proverb searches share the entry shape.
    async fn search_words(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<WordEntry>, KrdictError>;

    async fn search_definitions(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<DefinitionEntry>, KrdictError>;

    async fn search_examples(
        &self,
        req: &SearchRequest,
    ) -> Result<SearchResponse<ExampleEntry>, KrdictError>;

    async fn view(&self, req: &ViewRequest) -> Result<ViewResponse, KrdictError>;

    async fn scraped_view(
        &self,
        target_code: u32,
        translation: Option<TranslationLanguage>,
        fetch_multimedia: bool,
    ) -> Result<ViewResponse, KrdictError>;

    async fn word_of_the_day(
        &self,
        translation: Option<TranslationLanguage>,
    ) -> Result<WordOfDayResponse, KrdictError>;

    /// `category` is a numeric id or a category name in Korean or English.
    async fn semantic_category_words(
        &self,
        category: &str,
        translation: Option<TranslationLanguage>,
    ) -> Result<SearchResponse<WordEntry>, KrdictError>;

    async fn subject_category_words(
        &self,
        categories: &[String],
        translation: Option<TranslationLanguage>,
    ) -> Result<SearchResponse<WordEntry>, KrdictError>;
}

/// Run a search and tag the response with the shape its `search_type` implies.
pub async fn search(
    client: &impl Dictionary,
    req: &SearchRequest,
) -> Result<Response, KrdictError> {
    let response = match req.search_type {
        SearchType::Word => Response::Word(client.search_words(req).await?),
        SearchType::IdiomProverb => Response::Idiom(client.search_words(req).await?),
        SearchType::Definition => Response::Definition(client.search_definitions(req).await?),
        SearchType::Example => Response::Example(client.search_examples(req).await?),
    };
    Ok(response)
}
