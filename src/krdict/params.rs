use clap::ValueEnum;

use super::KrdictError;

pub const MIN_PAGE: u32 = 1;
pub const MAX_PAGE: u32 = 1000;
pub const MIN_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Wire value of a request parameter.
pub trait WireValue {
    fn wire(self) -> &'static str;
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchType {
    #[default]
    Word,
    Definition,
    Example,
    IdiomProverb,
}

impl WireValue for SearchType {
    fn wire(self) -> &'static str {
        match self {
            SearchType::Word => "word",
            SearchType::Definition => "dfn",
            SearchType::Example => "exam",
            SearchType::IdiomProverb => "ip",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchTarget {
    #[default]
    Headword,
    Definition,
    Example,
    OriginalLanguage,
    Pronunciation,
    Application,
    ApplicationShort,
    Idiom,
    Proverb,
    Reference,
}

impl WireValue for SearchTarget {
    fn wire(self) -> &'static str {
        match self {
            SearchTarget::Headword => "1",
            SearchTarget::Definition => "2",
            SearchTarget::Example => "3",
            SearchTarget::OriginalLanguage => "4",
            SearchTarget::Pronunciation => "5",
            SearchTarget::Application => "6",
            SearchTarget::ApplicationShort => "7",
            SearchTarget::Idiom => "8",
            SearchTarget::Proverb => "9",
            SearchTarget::Reference => "10",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationLanguage {
    All,
    English,
    Japanese,
    French,
    Spanish,
    Arabic,
    Mongolian,
    Vietnamese,
    Thai,
    Indonesian,
    Russian,
    Chinese,
}

impl WireValue for TranslationLanguage {
    fn wire(self) -> &'static str {
        match self {
            TranslationLanguage::All => "0",
            TranslationLanguage::English => "1",
            TranslationLanguage::Japanese => "2",
            TranslationLanguage::French => "3",
            TranslationLanguage::Spanish => "4",
            TranslationLanguage::Arabic => "5",
            TranslationLanguage::Mongolian => "6",
            TranslationLanguage::Vietnamese => "7",
            TranslationLanguage::Thai => "8",
            TranslationLanguage::Indonesian => "9",
            TranslationLanguage::Russian => "10",
            TranslationLanguage::Chinese => "11",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabularyLevel {
    All,
    Beginner,
    Intermediate,
    Advanced,
    None,
}

impl WireValue for VocabularyLevel {
    fn wire(self) -> &'static str {
        match self {
            VocabularyLevel::All => "all",
            VocabularyLevel::Beginner => "level1",
            VocabularyLevel::Intermediate => "level2",
            VocabularyLevel::Advanced => "level3",
            VocabularyLevel::None => "none",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultimediaType {
    All,
    Photo,
    Illustration,
    Video,
    Animation,
    Sound,
    None,
}

impl WireValue for MultimediaType {
    fn wire(self) -> &'static str {
        match self {
            MultimediaType::All => "0",
            MultimediaType::Photo => "1",
            MultimediaType::Illustration => "2",
            MultimediaType::Video => "3",
            MultimediaType::Animation => "4",
            MultimediaType::Sound => "5",
            MultimediaType::None => "6",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMethod {
    #[default]
    Exact,
    Include,
    Start,
    End,
}

impl WireValue for SearchMethod {
    fn wire(self) -> &'static str {
        match self {
            SearchMethod::Exact => "exact",
            SearchMethod::Include => "include",
            SearchMethod::Start => "start",
            SearchMethod::End => "end",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMethod {
    #[default]
    Alphabetical,
    Popular,
}

impl WireValue for SortMethod {
    fn wire(self) -> &'static str {
        match self {
            SortMethod::Alphabetical => "dict",
            SortMethod::Popular => "popular",
        }
    }
}

/// Filters only available through advanced search.
#[derive(Debug, Clone, Default)]
pub struct AdvancedOptions {
    pub search_target: SearchTarget,
    pub search_method: SearchMethod,
    pub vocabulary_levels: Vec<VocabularyLevel>,
    pub multimedia_types: Vec<MultimediaType>,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
    pub sort: SortMethod,
    pub search_type: SearchType,
    pub translation_languages: Vec<TranslationLanguage>,
    pub advanced: Option<AdvancedOptions>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: MIN_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: SortMethod::default(),
            search_type: SearchType::default(),
            translation_languages: Vec::new(),
            advanced: None,
        }
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn translation(mut self, language: TranslationLanguage) -> Self {
        self.translation_languages.push(language);
        self
    }

    pub fn advanced(mut self, options: AdvancedOptions) -> Self {
        self.advanced = Some(options);
        self
    }

    /// Same request, pointed at another page.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), KrdictError> {
        if self.query.trim().is_empty() {
            return Err(KrdictError::InvalidParameter(
                "query must not be empty".into(),
            ));
        }
        if !(MIN_PAGE..=MAX_PAGE).contains(&self.page) {
            return Err(KrdictError::InvalidParameter(format!(
                "page must be between {MIN_PAGE} and {MAX_PAGE}, got {}",
                self.page
            )));
        }
        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(KrdictError::InvalidParameter(format!(
                "per_page must be between {MIN_PER_PAGE} and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }
        Ok(())
    }

    /// Query pairs for the `search` endpoint, excluding the API key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("start", self.page.to_string()),
            ("num", self.per_page.to_string()),
            ("sort", self.sort.wire().to_string()),
            ("part", self.search_type.wire().to_string()),
        ];
        push_translation(&mut pairs, &self.translation_languages);

        if let Some(ref adv) = self.advanced {
            pairs.push(("advanced", "y".to_string()));
            pairs.push(("target", adv.search_target.wire().to_string()));
            pairs.push(("method", adv.search_method.wire().to_string()));
            if !adv.vocabulary_levels.is_empty() {
                pairs.push(("level", join_wire(&adv.vocabulary_levels)));
            }
            if !adv.multimedia_types.is_empty() {
                pairs.push(("multimedia", join_wire(&adv.multimedia_types)));
            }
        }
        pairs
    }
}

/// How a `view` query identifies its entry.
#[derive(Debug, Clone)]
pub enum ViewTarget {
    Query { query: String, homograph_num: u32 },
    TargetCode(u32),
}

#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub target: ViewTarget,
    pub translation_languages: Vec<TranslationLanguage>,
}

impl ViewRequest {
    pub fn by_query(query: impl Into<String>, homograph_num: u32) -> Self {
        Self {
            target: ViewTarget::Query {
                query: query.into(),
                homograph_num,
            },
            translation_languages: Vec::new(),
        }
    }

    pub fn by_target_code(target_code: u32) -> Self {
        Self {
            target: ViewTarget::TargetCode(target_code),
            translation_languages: Vec::new(),
        }
    }

    pub fn translation(mut self, language: TranslationLanguage) -> Self {
        self.translation_languages.push(language);
        self
    }

    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, KrdictError> {
        let mut pairs = match &self.target {
            ViewTarget::Query {
                query,
                homograph_num,
            } => {
                if query.trim().is_empty() {
                    return Err(KrdictError::InvalidParameter(
                        "query must not be empty".into(),
                    ));
                }
                // The service identifies query-based views as "word~homograph".
                vec![
                    ("q", format!("{query}~{homograph_num}")),
                    ("method", "word_info".to_string()),
                ]
            }
            ViewTarget::TargetCode(code) => vec![
                ("q", code.to_string()),
                ("method", "target_code".to_string()),
            ],
        };
        push_translation(&mut pairs, &self.translation_languages);
        Ok(pairs)
    }
}

pub(crate) fn push_translation(
    pairs: &mut Vec<(&'static str, String)>,
    languages: &[TranslationLanguage],
) {
    if !languages.is_empty() {
        pairs.push(("translated", "y".to_string()));
        pairs.push(("trans_lang", join_wire(languages)));
    }
}

pub(crate) fn join_wire<T: WireValue + Copy>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.wire())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn rejects_empty_query() {
        let err = SearchRequest::new("  ").validate().unwrap_err();
        assert!(err.to_string().contains("empty"), "got: {err}");
    }

    #[test]
    fn rejects_out_of_range_per_page() {
        assert!(SearchRequest::new("나무").per_page(5).validate().is_err());
        assert!(SearchRequest::new("나무").per_page(101).validate().is_err());
        assert!(SearchRequest::new("나무").per_page(20).validate().is_ok());
    }

    #[test]
    fn rejects_page_zero() {
        let req = SearchRequest::new("나무").at_page(0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn basic_search_pairs() {
        let req = SearchRequest::new("나무")
            .per_page(20)
            .search_type(SearchType::Definition)
            .at_page(3);
        let pairs = req.query_pairs();
        assert_eq!(pair(&pairs, "q"), Some("나무"));
        assert_eq!(pair(&pairs, "start"), Some("3"));
        assert_eq!(pair(&pairs, "num"), Some("20"));
        assert_eq!(pair(&pairs, "part"), Some("dfn"));
        assert_eq!(pair(&pairs, "translated"), None);
        assert_eq!(pair(&pairs, "advanced"), None);
    }

    #[test]
    fn advanced_search_pairs_join_multi_values() {
        let req = SearchRequest::new(".")
            .translation(TranslationLanguage::English)
            .advanced(AdvancedOptions {
                search_target: SearchTarget::Definition,
                search_method: SearchMethod::Include,
                vocabulary_levels: vec![VocabularyLevel::Beginner],
                multimedia_types: vec![MultimediaType::Photo, MultimediaType::Sound],
            });
        let pairs = req.query_pairs();
        assert_eq!(pair(&pairs, "advanced"), Some("y"));
        assert_eq!(pair(&pairs, "target"), Some("2"));
        assert_eq!(pair(&pairs, "method"), Some("include"));
        assert_eq!(pair(&pairs, "level"), Some("level1"));
        assert_eq!(pair(&pairs, "multimedia"), Some("1,5"));
        assert_eq!(pair(&pairs, "trans_lang"), Some("1"));
    }

    #[test]
    fn view_by_query_encodes_homograph() {
        let pairs = ViewRequest::by_query("단풍나무", 0).query_pairs().unwrap();
        assert_eq!(pair(&pairs, "q"), Some("단풍나무~0"));
        assert_eq!(pair(&pairs, "method"), Some("word_info"));
    }

    #[test]
    fn view_by_target_code() {
        let pairs = ViewRequest::by_target_code(42075)
            .translation(TranslationLanguage::English)
            .query_pairs()
            .unwrap();
        assert_eq!(pair(&pairs, "q"), Some("42075"));
        assert_eq!(pair(&pairs, "method"), Some("target_code"));
        assert_eq!(pair(&pairs, "translated"), Some("y"));
    }
}
