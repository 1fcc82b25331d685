//! Console rendering of dictionary responses.
//!
//! Renderers append to a caller-owned `String`. On a [`FormatError`] the
//! lines written before the fault stay in the buffer.

mod detail;
mod list;

pub use detail::{render_hanja, render_view};
pub use list::{render_examples, render_list};

use crate::krdict::types::{Response, WordOfDayResponse};

/// Most examples or multimedia entries listed under one definition.
const MAX_LISTED: usize = 5;
const TRUNCATION_MARKER: &str = "…";
const EXAMPLE_BULLET: char = '•';
const MULTIMEDIA_BULLET: char = '►';

/// A field the renderer needs is absent from the response.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("response is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Render any response: single-entry views get the detail layout, result
/// pages get the list layout.
pub fn render(response: &Response, out: &mut String) -> Result<(), FormatError> {
    match response {
        Response::View(view) | Response::ScrapedView(view) => render_view(view, out),
        Response::Word(page) | Response::Idiom(page) => render_list(page, out),
        Response::Definition(page) => render_list(page, out),
        Response::Example(page) => render_examples(page, out),
        Response::WordOfTheDay(wotd) => render_word_of_the_day(wotd, out),
    }
}

fn render_word_of_the_day(
    wotd: &WordOfDayResponse,
    out: &mut String,
) -> Result<(), FormatError> {
    let translated = wotd
        .translations
        .first()
        .and_then(|t| t.word.as_deref())
        .map(|w| format!(" ({w})"))
        .unwrap_or_default();
    out.push_str(&format!("Word of the Day: {}{translated}\n", wotd.word));
    out.push_str(&format!("{}\n", wotd.definition));

    let link = wotd
        .translation_urls
        .first()
        .ok_or(FormatError::MissingField("translation_urls[0]"))?;
    out.push_str(&format!("{}\n", link.url));
    Ok(())
}

/// Bulleted lines for at most [`MAX_LISTED`] items, then one marker line if
/// any were left out.
fn push_truncated<T>(
    out: &mut String,
    bullet: char,
    items: &[T],
    line: impl Fn(&T) -> Result<String, FormatError>,
) -> Result<(), FormatError> {
    for item in items.iter().take(MAX_LISTED) {
        out.push_str(&format!("   {bullet} {}\n", line(item)?));
    }
    if items.len() > MAX_LISTED {
        out.push_str(&format!("   {bullet} {TRUNCATION_MARKER}\n"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::krdict::types::{
        SearchResponse, Translation, TranslationUrl, ViewResponse, WordEntry,
    };

    fn empty_view() -> ViewResponse {
        ViewResponse {
            url: "https://krdict.korean.go.kr/dicSearch/SearchView?ParaWordNo=1".into(),
            results: vec![],
        }
    }

    fn page() -> SearchResponse<WordEntry> {
        SearchResponse {
            total_results: 0,
            page: 1,
            per_page: 10,
            results: vec![],
        }
    }

    #[test]
    fn search_kinds_render_summary_line() {
        for response in [Response::Word(page()), Response::Idiom(page())] {
            let mut out = String::new();
            render(&response, &mut out).unwrap();
            assert!(out.starts_with("Total Results: 0"), "got: {out}");
        }
    }

    #[test]
    fn view_kinds_never_render_summary_line() {
        let json = serde_json::json!({
            "url": "https://krdict.korean.go.kr/x",
            "results": [{
                "target_code": 1,
                "word_info": {"word": "나무", "part_of_speech": "명사"}
            }]
        });
        let view: ViewResponse = serde_json::from_value(json).unwrap();
        for response in [Response::View(view.clone()), Response::ScrapedView(view)] {
            let mut out = String::new();
            render(&response, &mut out).unwrap();
            assert!(!out.contains("Total Results:"), "got: {out}");
            assert!(out.starts_with("나무 「명사」"));
        }
    }

    #[test]
    fn empty_view_is_a_format_fault() {
        let mut out = String::new();
        let err = render(&Response::View(empty_view()), &mut out).unwrap_err();
        assert!(err.to_string().contains("results[0]"));
    }

    #[test]
    fn word_of_the_day_with_translation() {
        let wotd = WordOfDayResponse {
            target_code: 42075,
            word: "단풍나무".into(),
            definition: "잎이 손바닥 모양으로 갈라진 나무.".into(),
            translations: vec![Translation {
                word: Some("maple".into()),
                definition: "A tree with hand-shaped leaves.".into(),
            }],
            translation_urls: vec![TranslationUrl {
                url: "https://krdict.korean.go.kr/eng/dicSearch/SearchView?ParaWordNo=42075".into(),
            }],
        };
        let mut out = String::new();
        render(&Response::WordOfTheDay(wotd), &mut out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Word of the Day: 단풍나무 (maple)");
        assert_eq!(lines[1], "잎이 손바닥 모양으로 갈라진 나무.");
        assert!(lines[2].contains("ParaWordNo=42075"));
    }

    #[test]
    fn word_of_the_day_without_url_keeps_partial_output() {
        let wotd = WordOfDayResponse {
            target_code: 1,
            word: "나무".into(),
            definition: "식물.".into(),
            translations: vec![],
            translation_urls: vec![],
        };
        let mut out = String::new();
        let err = render_word_of_the_day(&wotd, &mut out).unwrap_err();
        assert!(matches!(err, FormatError::MissingField("translation_urls[0]")));
        assert_eq!(out, "Word of the Day: 나무\n식물.\n");
    }

    #[test]
    fn truncation_emits_marker_only_past_limit() {
        for n in [0usize, 1, 5, 6, 12] {
            let items: Vec<usize> = (0..n).collect();
            let mut out = String::new();
            push_truncated(&mut out, '•', &items, |i| Ok(i.to_string())).unwrap();
            let lines: Vec<_> = out.lines().collect();
            let markers = lines.iter().filter(|l| l.ends_with(TRUNCATION_MARKER)).count();
            assert_eq!(lines.len() - markers, n.min(MAX_LISTED), "n={n}");
            assert_eq!(markers, usize::from(n > MAX_LISTED), "n={n}");
        }
    }
}
