mod args;
pub mod demos;
mod errors;

pub use args::{Cli, Command};
pub use errors::AppError;

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::info;

use args::{PaginateArgs, ScrapedViewArgs, SearchArgs, ViewArgs};

use crate::config::Config;
use crate::format::{self, FormatError};
use crate::krdict::types::{Response, SearchResponse};
use crate::krdict::{self, Dictionary, KrdictClient};
use crate::paginate::{collect_pages, describe_page, describe_total};

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Most view lookups in flight at once.
const MAX_CONCURRENT_VIEWS: usize = 4;

/// Build the client from the environment plus CLI overrides and run one command.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env(cli.api_url, cli.timeout)?;
    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(config.timeout)
        .build()?;
    let client = KrdictClient::new(http, &config)?;

    execute(&client, cli.command, &mut |chunk: &str| print!("{chunk}")).await
}

/// Run one command, handing rendered text to `emit` in output order.
async fn execute(
    client: &impl Dictionary,
    command: Command,
    emit: &mut impl FnMut(&str),
) -> Result<(), AppError> {
    match command {
        Command::Search(args) => search(client, &args, emit).await,
        Command::Paginate(args) => paginate(client, &args, emit).await,
        Command::View(args) => view(client, &args, emit).await,
        Command::ScrapedView(args) => scraped_view(client, &args, emit).await,
        Command::WordOfTheDay(translation) => {
            info!("command:word-of-the-day");
            let wotd = client.word_of_the_day(translation.language).await?;
            emit_rendered(emit, |out| format::render(&Response::WordOfTheDay(wotd), out))
        }
        Command::SemanticCategory {
            category,
            translation,
        } => {
            info!(%category, "command:semantic-category");
            let page = client
                .semantic_category_words(&category, translation.language)
                .await?;
            emit_rendered(emit, |out| format::render(&Response::Word(page), out))
        }
        Command::SubjectCategory {
            categories,
            translation,
        } => {
            info!(categories = ?categories, "command:subject-category");
            let page = client
                .subject_category_words(&categories, translation.language)
                .await?;
            emit_rendered(emit, |out| format::render(&Response::Word(page), out))
        }
        Command::Hanja { target_code } => {
            info!(target_code, "command:hanja");
            let view = client.scraped_view(target_code, None, false).await?;
            emit_rendered(emit, |out| format::render_hanja(&view, out))
        }
        Command::Demo => demos::run_all(client, &mut *emit).await,
    }
}

/// Render into a buffer and emit it. Lines rendered before a fault are
/// still emitted.
fn emit_rendered(
    emit: &mut impl FnMut(&str),
    render: impl FnOnce(&mut String) -> Result<(), FormatError>,
) -> Result<(), AppError> {
    let mut out = String::new();
    let result = render(&mut out);
    emit(&out);
    result.map_err(AppError::from)
}

async fn search(
    client: &impl Dictionary,
    args: &SearchArgs,
    emit: &mut impl FnMut(&str),
) -> Result<(), AppError> {
    let req = args.to_request();
    info!(query = %req.query, search_type = ?req.search_type, page = req.page, "command:search");

    let response = krdict::search(client, &req).await?;
    emit_rendered(emit, |out| format::render(&response, out))
}

async fn paginate(
    client: &impl Dictionary,
    args: &PaginateArgs,
    emit: &mut impl FnMut(&str),
) -> Result<(), AppError> {
    let req = args.to_request();
    req.validate()?;
    info!(query = %req.query, per_page = req.per_page, "command:paginate");

    let collected = collect_pages(
        async |page| {
            let page_req = req.at_page(page);
            client.search_words(&page_req).await
        },
        |report| emit(&format!("{}\n", describe_page(report))),
    )
    .await?;
    emit(&format!("{}\n", describe_total(&collected)));

    if args.list {
        let all = SearchResponse {
            total_results: collected.total,
            page: 1,
            per_page: u32::try_from(collected.results.len()).unwrap_or(u32::MAX),
            results: collected.results,
        };
        let response = if args.idioms {
            Response::Idiom(all)
        } else {
            Response::Word(all)
        };
        emit("\n");
        emit_rendered(emit, |out| format::render(&response, out))?;
    }
    Ok(())
}

async fn view(
    client: &impl Dictionary,
    args: &ViewArgs,
    emit: &mut impl FnMut(&str),
) -> Result<(), AppError> {
    let requests = args.to_requests();
    info!(lookups = requests.len(), "command:view");

    // Lookups overlap; output keeps the order they were requested in.
    let mut responses = stream::iter(requests)
        .map(|req| async move { client.view(&req).await })
        .buffered(MAX_CONCURRENT_VIEWS);

    let mut first = true;
    while let Some(result) = responses.next().await {
        let view = result?;
        if !first {
            emit("\n");
        }
        first = false;
        emit_rendered(emit, |out| format::render(&Response::View(view), out))?;
    }
    Ok(())
}

async fn scraped_view(
    client: &impl Dictionary,
    args: &ScrapedViewArgs,
    emit: &mut impl FnMut(&str),
) -> Result<(), AppError> {
    info!(target_code = args.target_code, "command:scraped-view");
    let view = client
        .scraped_view(
            args.target_code,
            args.translation.language,
            !args.no_multimedia,
        )
        .await?;
    emit_rendered(emit, |out| format::render(&Response::ScrapedView(view), out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::krdict::mock::MockDictionary;
    use crate::krdict::types::{ViewResponse, WordEntry, WordOfDayResponse};
    use clap::Parser;

    fn view_with_word(word: &str) -> ViewResponse {
        serde_json::from_value(serde_json::json!({
            "url": format!("https://krdict.korean.go.kr/{word}"),
            "results": [{
                "word_info": {"word": word, "part_of_speech": "명사"}
            }]
        }))
        .unwrap()
    }

    fn word_page(page: u32, count: u32, total: u32) -> SearchResponse<WordEntry> {
        serde_json::from_value(serde_json::json!({
            "total_results": total,
            "page": page,
            "per_page": 20,
            "results": (0..count)
                .map(|i| serde_json::json!({
                    "word": format!("나무{i}"),
                    "definitions": [{"definition": "뜻."}]
                }))
                .collect::<Vec<_>>()
        }))
        .unwrap()
    }

    async fn run_command(mock: &MockDictionary, args: &[&str]) -> (Result<(), AppError>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut output = String::new();
        let result = execute(mock, cli.command, &mut |chunk: &str| output.push_str(chunk)).await;
        (result, output)
    }

    #[tokio::test]
    async fn view_fetches_every_target_code() {
        let mock = MockDictionary::with_views(vec![view_with_word("나무"), view_with_word("숲")]);
        let (result, _) = run_command(
            &mock,
            &["krdict", "view", "--target-code", "1", "--target-code", "2"],
        )
        .await;

        result.unwrap();
        assert_eq!(mock.captured_requests(), vec!["view", "view"]);
    }

    #[tokio::test]
    async fn view_output_follows_request_order_when_first_lookup_finishes_last() {
        let mock = MockDictionary::with_keyed_views(vec![
            (1, Duration::from_millis(80), view_with_word("나무")),
            (2, Duration::ZERO, view_with_word("숲")),
            (3, Duration::from_millis(20), view_with_word("단풍나무")),
        ]);
        let (result, output) = run_command(
            &mock,
            &[
                "krdict", "view", "--target-code", "1", "--target-code", "2", "--target-code", "3",
            ],
        )
        .await;

        result.unwrap();
        let headers: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("「명사」"))
            .collect();
        assert_eq!(
            headers,
            vec!["나무 「명사」", "숲 「명사」", "단풍나무 「명사」"]
        );
    }

    #[tokio::test]
    async fn view_propagates_missing_entry_as_format_error() {
        let empty: ViewResponse = serde_json::from_value(serde_json::json!({
            "url": "https://krdict.korean.go.kr/none",
            "results": []
        }))
        .unwrap();
        let mock = MockDictionary::with_views(vec![empty]);
        let (result, _) = run_command(&mock, &["krdict", "view", "없는말"]).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Format(FormatError::MissingField("results[0]"))));
    }

    #[tokio::test]
    async fn paginate_rejects_invalid_page_size_before_fetching() {
        let mock = MockDictionary::default();
        let (result, output) =
            run_command(&mock, &["krdict", "paginate", "나무", "--per-page", "500"]).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Krdict(krdict::KrdictError::InvalidParameter(_))));
        assert!(mock.captured_requests().is_empty());
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn paginate_reports_pages_fetched_before_a_failure() {
        // Page 2 is never served, so the walk fails after page 1.
        let mock = MockDictionary::with_word_pages(vec![word_page(1, 20, 45)]);
        let (result, output) =
            run_command(&mock, &["krdict", "paginate", "나무", "--per-page", "20"]).await;

        assert!(matches!(result, Err(AppError::Krdict(_))));
        assert_eq!(output, "Collected 20 results from page 1. Querying next page.\n");
    }

    #[tokio::test]
    async fn paginate_list_renders_every_collected_result() {
        let mock = MockDictionary::with_word_pages(vec![word_page(1, 20, 25), word_page(2, 5, 25)]);
        let (result, output) = run_command(
            &mock,
            &["krdict", "paginate", "나무", "--per-page", "20", "--list"],
        )
        .await;

        result.unwrap();
        assert!(output.starts_with(
            "Collected 20 results from page 1. Querying next page.\n\
             Collected 5 results from page 2. All results collected.\n\
             25 results collected. Total results: 25.\n\n\
             Total Results: 25\n"
        ));
        assert!(output.contains("\n25. 나무4: 뜻.\n"), "got: {output}");
    }

    #[tokio::test]
    async fn word_of_the_day_command_renders_word_and_link() {
        let mock = MockDictionary::default();
        let wotd: WordOfDayResponse = serde_json::from_value(serde_json::json!({
            "target_code": 12345,
            "word": "가을",
            "definition": "일 년의 네 계절 가운데 세 번째 계절.",
            "translations": [{"word": "autumn", "definition": "The third season."}],
            "translation_urls": [{"url": "https://krdict.korean.go.kr/eng/12345"}]
        }))
        .unwrap();
        *mock.word_of_day.lock().unwrap() = Some(wotd);

        let (result, output) =
            run_command(&mock, &["krdict", "word-of-the-day", "-t", "english"]).await;

        result.unwrap();
        assert_eq!(
            output,
            "Word of the Day: 가을 (autumn)\n\
             일 년의 네 계절 가운데 세 번째 계절.\n\
             https://krdict.korean.go.kr/eng/12345\n"
        );
    }

    #[tokio::test]
    async fn hanja_command_requests_scraped_view() {
        let mock = MockDictionary::with_views(vec![view_with_word("가감승제")]);
        let (result, _) = run_command(&mock, &["krdict", "hanja", "14951"]).await;

        result.unwrap();
        assert_eq!(mock.captured_requests(), vec!["scraped_view:14951:false"]);
    }
}
