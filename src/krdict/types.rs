use serde::Deserialize;

/// Language tag the service uses for Chinese-origin fragments.
pub const HANJA_LANGUAGE_TYPE: &str = "한자";

/// One page of results from `search` or a category listing.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse<T> {
    pub total_results: u32,
    pub page: u32,
    pub per_page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Entry returned by word and idiom/proverb searches and by category listings.
#[derive(Deserialize, Debug, Clone)]
pub struct WordEntry {
    pub word: String,
    pub origin: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// Entry returned by a definition search. Carries a single definition
/// instead of a list.
#[derive(Deserialize, Debug, Clone)]
pub struct DefinitionEntry {
    pub word: String,
    pub origin: Option<String>,
    pub definition_info: Definition,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExampleEntry {
    pub word: String,
    pub example: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Definition {
    pub definition: String,
    /// Empty unless a translation language was requested.
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub multimedia: Vec<MultimediaRef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Translation {
    pub word: Option<String>,
    pub definition: String,
}

/// Primary API responses carry `url`; scraped responses fetched with
/// multimedia enabled carry `content_urls` instead.
#[derive(Deserialize, Debug, Clone)]
pub struct MultimediaRef {
    pub url: Option<String>,
    pub content_urls: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// Response from `view` and `scraper/view`. The service returns zero or one entry.
#[derive(Deserialize, Debug, Clone)]
pub struct ViewResponse {
    pub url: String,
    #[serde(default)]
    pub results: Vec<ViewEntry>,
}

impl ViewResponse {
    pub fn entry(&self) -> Option<&ViewEntry> {
        self.results.first()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ViewEntry {
    pub word_info: WordInfo,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WordInfo {
    pub word: String,
    pub part_of_speech: String,
    #[serde(default)]
    pub original_language_info: Vec<OriginalLanguage>,
    #[serde(default)]
    pub pronunciation_info: Vec<Pronunciation>,
    #[serde(default)]
    pub definition_info: Vec<Definition>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OriginalLanguage {
    pub original_language: String,
    pub language_type: String,
    /// Only populated when `language_type` is [`HANJA_LANGUAGE_TYPE`].
    #[serde(default)]
    pub hanja_info: Vec<HanjaInfo>,
}

impl OriginalLanguage {
    pub fn is_hanja(&self) -> bool {
        self.language_type == HANJA_LANGUAGE_TYPE
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Pronunciation {
    pub pronunciation: String,
    /// Audio reference, when the service has one.
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HanjaInfo {
    pub hanja: char,
    pub radical: String,
    pub stroke_count: u32,
    #[serde(default)]
    pub readings: Vec<String>,
}

/// Response from `scraper/word-of-the-day`.
#[derive(Deserialize, Debug, Clone)]
pub struct WordOfDayResponse {
    pub target_code: u32,
    pub word: String,
    pub definition: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub translation_urls: Vec<TranslationUrl>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TranslationUrl {
    pub url: String,
}

/// Every response shape the formatter knows how to render.
#[derive(Debug, Clone)]
pub enum Response {
    Word(SearchResponse<WordEntry>),
    Definition(SearchResponse<DefinitionEntry>),
    Example(SearchResponse<ExampleEntry>),
    Idiom(SearchResponse<WordEntry>),
    View(ViewResponse),
    ScrapedView(ViewResponse),
    WordOfTheDay(WordOfDayResponse),
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub error_code: Option<String>,
    pub message: Option<String>,
}

/// Error envelope the gateway sends instead of a payload, on any status.
#[derive(Deserialize, Debug)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_response_deserializes_with_defaults() {
        let json = serde_json::json!({
            "url": "https://krdict.korean.go.kr/dicSearch/SearchView?ParaWordNo=42075",
            "results": [{
                "target_code": 42075,
                "word_info": {
                    "word": "단풍나무",
                    "part_of_speech": "명사",
                    "original_language_info": [
                        {"original_language": "丹楓", "language_type": "한자"},
                        {"original_language": "나무", "language_type": "고유어"}
                    ],
                    "pronunciation_info": [{"pronunciation": "단풍나무"}],
                    "definition_info": [{"definition": "잎이 손바닥 모양으로 갈라진 나무."}]
                }
            }]
        });

        let view: ViewResponse = serde_json::from_value(json).unwrap();
        let info = &view.entry().unwrap().word_info;
        assert_eq!(info.word, "단풍나무");
        assert!(info.original_language_info[0].is_hanja());
        assert!(!info.original_language_info[1].is_hanja());
        assert!(info.pronunciation_info[0].url.is_none());
        assert!(info.definition_info[0].translations.is_empty());
        assert!(info.definition_info[0].multimedia.is_empty());
    }

    #[test]
    fn multimedia_type_field_is_renamed() {
        let media: MultimediaRef = serde_json::from_str(
            r#"{"content_urls": ["https://a.example/1.jpg"], "type": "사진"}"#,
        )
        .unwrap();
        assert_eq!(media.media_type, "사진");
        assert!(media.url.is_none());
        assert_eq!(media.content_urls.unwrap().len(), 1);
    }

    #[test]
    fn hanja_info_parses_single_char() {
        let info: HanjaInfo = serde_json::from_str(
            r#"{"hanja": "加", "radical": "力", "stroke_count": 5, "readings": ["더할 가"]}"#,
        )
        .unwrap();
        assert_eq!(info.hanja, '加');
        assert_eq!(info.stroke_count, 5);
    }

    #[test]
    fn search_response_without_results_is_empty() {
        let page: SearchResponse<WordEntry> =
            serde_json::from_str(r#"{"total_results": 0, "page": 1, "per_page": 20}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
