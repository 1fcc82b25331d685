use clap::{Args, Parser, Subcommand};

use crate::krdict::params::{
    AdvancedOptions, DEFAULT_PER_PAGE, MultimediaType, SearchMethod, SearchRequest, SearchTarget,
    SearchType, SortMethod, TranslationLanguage, VocabularyLevel, ViewRequest,
};

#[derive(Parser, Debug)]
#[command(
    name = "krdict",
    version,
    about = "Query the Korean Basic Dictionary from the command line"
)]
pub struct Cli {
    /// Base URL of the dictionary service (overrides KRDICT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides KRDICT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the dictionary and print one page of results
    Search(SearchArgs),
    /// Collect every page of a word search
    Paginate(PaginateArgs),
    /// Show full entries by query or target code
    View(ViewArgs),
    /// Show a scraped entry, including multimedia content URLs
    ScrapedView(ScrapedViewArgs),
    /// Show today's word
    WordOfTheDay(TranslationArg),
    /// List words in a semantic category (id, Korean or English name)
    SemanticCategory {
        category: String,
        #[command(flatten)]
        translation: TranslationArg,
    },
    /// List words in one or more subject categories
    SubjectCategory {
        #[arg(required = true)]
        categories: Vec<String>,
        #[command(flatten)]
        translation: TranslationArg,
    },
    /// Print the hanja breakdown of an entry
    Hanja {
        target_code: u32,
    },
    /// Run every usage example in order
    Demo,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct TranslationArg {
    /// Translation language for definitions
    #[arg(long = "translation", short = 't', value_enum)]
    pub language: Option<TranslationLanguage>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    pub query: String,

    #[arg(long = "type", value_enum, default_value_t = SearchType::Word)]
    pub search_type: SearchType,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    #[arg(long, value_enum, default_value_t = SortMethod::Alphabetical)]
    pub sort: SortMethod,

    /// Translation languages (repeatable)
    #[arg(long = "translation", short = 't', value_enum)]
    pub translations: Vec<TranslationLanguage>,

    /// Field to match against; enables advanced search
    #[arg(long, value_enum)]
    pub target: Option<SearchTarget>,

    /// Match method; enables advanced search
    #[arg(long, value_enum)]
    pub method: Option<SearchMethod>,

    /// Vocabulary levels (repeatable); enables advanced search
    #[arg(long = "level", value_enum)]
    pub levels: Vec<VocabularyLevel>,

    /// Multimedia types (repeatable); enables advanced search
    #[arg(long = "multimedia", value_enum)]
    pub multimedia: Vec<MultimediaType>,
}

impl SearchArgs {
    pub fn to_request(&self) -> SearchRequest {
        let advanced = self.target.is_some()
            || self.method.is_some()
            || !self.levels.is_empty()
            || !self.multimedia.is_empty();

        SearchRequest {
            query: self.query.clone(),
            page: self.page,
            per_page: self.per_page,
            sort: self.sort,
            search_type: self.search_type,
            translation_languages: self.translations.clone(),
            advanced: advanced.then(|| AdvancedOptions {
                search_target: self.target.unwrap_or_default(),
                search_method: self.method.unwrap_or_default(),
                vocabulary_levels: self.levels.clone(),
                multimedia_types: self.multimedia.clone(),
            }),
        }
    }
}

#[derive(Args, Debug)]
pub struct PaginateArgs {
    pub query: String,

    #[arg(long, default_value_t = 20)]
    pub per_page: u32,

    /// Search idioms and proverbs instead of words
    #[arg(long)]
    pub idioms: bool,

    /// Render every collected result after the progress lines
    #[arg(long)]
    pub list: bool,

    #[command(flatten)]
    pub translation: TranslationArg,
}

impl PaginateArgs {
    pub fn to_request(&self) -> SearchRequest {
        let search_type = if self.idioms {
            SearchType::IdiomProverb
        } else {
            SearchType::Word
        };
        SearchRequest {
            translation_languages: self.translation.language.into_iter().collect(),
            ..SearchRequest::new(self.query.clone())
                .search_type(search_type)
                .per_page(self.per_page)
        }
    }
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Headword to look up
    #[arg(conflicts_with = "target_codes", required_unless_present = "target_codes")]
    pub query: Option<String>,

    /// Homograph number of the headword
    #[arg(long, default_value_t = 0)]
    pub homograph: u32,

    /// Target codes to look up (repeatable, fetched concurrently)
    #[arg(long = "target-code")]
    pub target_codes: Vec<u32>,

    #[command(flatten)]
    pub translation: TranslationArg,
}

impl ViewArgs {
    pub fn to_requests(&self) -> Vec<ViewRequest> {
        let requests = match self.query {
            Some(ref query) => vec![ViewRequest::by_query(query.clone(), self.homograph)],
            None => self
                .target_codes
                .iter()
                .map(|&code| ViewRequest::by_target_code(code))
                .collect(),
        };
        requests
            .into_iter()
            .map(|req| match self.translation.language {
                Some(lang) => req.translation(lang),
                None => req,
            })
            .collect()
    }
}

#[derive(Args, Debug)]
pub struct ScrapedViewArgs {
    pub target_code: u32,

    /// Skip fetching multimedia content URLs
    #[arg(long)]
    pub no_multimedia: bool,

    #[command(flatten)]
    pub translation: TranslationArg,
}
