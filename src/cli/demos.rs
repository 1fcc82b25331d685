//! The usage examples, runnable in sequence with `krdict demo`.

use tracing::info;

use super::AppError;
use crate::format::{self, render_hanja};
use crate::krdict::params::{
    AdvancedOptions, MultimediaType, SearchMethod, SearchTarget, VocabularyLevel,
};
use crate::krdict::types::Response;
use crate::krdict::{self, Dictionary, SearchRequest, SearchType, TranslationLanguage, ViewRequest};
use crate::paginate::{collect_pages, describe_page, describe_total};

const BANNER_PAD: usize = 39;
const CLOSING_RULE: usize = 90;
const RULE: char = '═';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Pagination,
    SearchDefinitions,
    SearchExamples,
    SearchIdioms,
    BeginnerWordsWithMultimedia,
    WordsWithHanja,
    ViewQuery,
    ScrapedViewQuery,
    WordOfTheDay,
    SemanticCategory,
    SubjectCategory,
    HanjaInfo,
}

impl Demo {
    pub const ALL: [Demo; 12] = [
        Demo::Pagination,
        Demo::SearchDefinitions,
        Demo::SearchExamples,
        Demo::SearchIdioms,
        Demo::BeginnerWordsWithMultimedia,
        Demo::WordsWithHanja,
        Demo::ViewQuery,
        Demo::ScrapedViewQuery,
        Demo::WordOfTheDay,
        Demo::SemanticCategory,
        Demo::SubjectCategory,
        Demo::HanjaInfo,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Demo::Pagination => "Collects results from multiple API calls using pagination.",
            Demo::SearchDefinitions => {
                "Performs a search for definitions containing the word 나무."
            }
            Demo::SearchExamples => "Performs a search for examples containing the word 나무.",
            Demo::SearchIdioms => {
                "Performs a search for idioms and proverbs containing the word 나무."
            }
            Demo::BeginnerWordsWithMultimedia => {
                "Displays the first 10 results which are beginner grade words and contain multimedia."
            }
            Demo::WordsWithHanja => "Displays the first 10 results which contain the 한자 機.",
            Demo::ViewQuery => "Displays the results of a view query for the word 단풍나무.",
            Demo::ScrapedViewQuery => {
                "Displays the results of a scraped view query for the word 단풍나무."
            }
            Demo::WordOfTheDay => {
                "Fetches the word of the day, then fetches extended information using the result."
            }
            Demo::SemanticCategory => "Fetches words in the 인간 > 신체 부위 semantic category.",
            Demo::SubjectCategory => "Fetches words in the 인사하기 subject category.",
            Demo::HanjaInfo => "Displays information about hanja in a scraped view response.",
        }
    }

    pub async fn run(self, client: &impl Dictionary, out: &mut String) -> Result<(), AppError> {
        let english = Some(TranslationLanguage::English);

        match self {
            Demo::Pagination => {
                let req = SearchRequest::new("나무").per_page(20);
                let collected = collect_pages(
                    async |page| {
                        let page_req = req.at_page(page);
                        client.search_words(&page_req).await
                    },
                    |report| {
                        out.push_str(&describe_page(report));
                        out.push('\n');
                    },
                )
                .await?;
                out.push_str(&describe_total(&collected));
                out.push('\n');
            }
            Demo::SearchDefinitions => {
                let req = SearchRequest::new("나무")
                    .search_type(SearchType::Definition)
                    .translation(TranslationLanguage::English);
                render_search(client, &req, out).await?;
            }
            Demo::SearchExamples => {
                let req = SearchRequest::new("나무").search_type(SearchType::Example);
                render_search(client, &req, out).await?;
            }
            Demo::SearchIdioms => {
                let req = SearchRequest::new("나무")
                    .search_type(SearchType::IdiomProverb)
                    .translation(TranslationLanguage::English);
                render_search(client, &req, out).await?;
            }
            Demo::BeginnerWordsWithMultimedia => {
                // Most definitions contain a period, so "." against the
                // definition field matches nearly every entry.
                let req = SearchRequest::new(".")
                    .translation(TranslationLanguage::English)
                    .advanced(AdvancedOptions {
                        search_target: SearchTarget::Definition,
                        search_method: SearchMethod::Include,
                        vocabulary_levels: vec![VocabularyLevel::Beginner],
                        multimedia_types: vec![
                            MultimediaType::Photo,
                            MultimediaType::Illustration,
                            MultimediaType::Video,
                            MultimediaType::Animation,
                            MultimediaType::Sound,
                        ],
                    });
                render_search(client, &req, out).await?;
            }
            Demo::WordsWithHanja => {
                let req = SearchRequest::new("機")
                    .translation(TranslationLanguage::English)
                    .advanced(AdvancedOptions {
                        search_target: SearchTarget::OriginalLanguage,
                        search_method: SearchMethod::Include,
                        ..Default::default()
                    });
                render_search(client, &req, out).await?;
            }
            Demo::ViewQuery => {
                let req = ViewRequest::by_query("단풍나무", 0)
                    .translation(TranslationLanguage::English);
                let view = client.view(&req).await?;
                format::render(&Response::View(view), out)?;
            }
            Demo::ScrapedViewQuery => {
                let view = client.scraped_view(42075, english, true).await?;
                format::render(&Response::ScrapedView(view), out)?;
            }
            Demo::WordOfTheDay => {
                let wotd = client.word_of_the_day(english).await?;
                let target_code = wotd.target_code;
                format::render(&Response::WordOfTheDay(wotd), out)?;

                let view = client.scraped_view(target_code, english, true).await?;
                out.push_str("\nExtended Info:\n");
                format::render(&Response::ScrapedView(view), out)?;
            }
            Demo::SemanticCategory => {
                let page = client
                    .semantic_category_words("인간 > 신체 부위", english)
                    .await?;
                format::render(&Response::Word(page), out)?;
            }
            Demo::SubjectCategory => {
                let categories = ["인사하기".to_string()];
                let page = client.subject_category_words(&categories, english).await?;
                format::render(&Response::Word(page), out)?;
            }
            Demo::HanjaInfo => {
                // 가감승제
                let view = client.scraped_view(14951, None, false).await?;
                render_hanja(&view, out)?;
            }
        }
        Ok(())
    }
}

async fn render_search(
    client: &impl Dictionary,
    req: &SearchRequest,
    out: &mut String,
) -> Result<(), AppError> {
    let response = krdict::search(client, req).await?;
    format::render(&response, out)?;
    Ok(())
}

fn banner(number: usize) -> String {
    let pad = RULE.to_string().repeat(BANNER_PAD);
    format!("{pad} Example {number:02} {pad}")
}

/// Run every demo in order, handing each one's text to `emit` as soon as it
/// finishes. The first failure stops the run after its partial output is emitted.
pub async fn run_all(
    client: &impl Dictionary,
    mut emit: impl FnMut(&str),
) -> Result<(), AppError> {
    for (idx, demo) in Demo::ALL.into_iter().enumerate() {
        let mut out = format!("{}\n{}\n", banner(idx + 1), demo.description());
        info!(demo = ?demo, "running demo");

        let result = demo.run(client, &mut out).await;
        if result.is_ok() {
            out.push('\n');
        }
        emit(&out);
        result?;
    }

    emit(&format!("{}\n", RULE.to_string().repeat(CLOSING_RULE)));
    Ok(())
}
