use tracing::{info, warn};

use crate::krdict::types::SearchResponse;

/// One fetched page, as observed by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReport {
    pub page: u32,
    pub count: usize,
    pub has_next: bool,
}

#[derive(Debug)]
pub struct Collected<T> {
    /// Results of every page, in page order.
    pub results: Vec<T>,
    /// `total_results` reported by the last page fetched.
    pub total: u32,
}

/// Fetch pages `1, 2, ...` one at a time until the last response says no
/// page follows (`page * per_page >= total_results`).
///
/// A page's results are appended only once its fetch resolved successfully;
/// the first error is returned as-is and ends the walk. `on_page` sees each
/// page's report as soon as that page arrives.
pub async fn collect_pages<T, E, F>(
    mut fetch: F,
    mut on_page: impl FnMut(&PageReport),
) -> Result<Collected<T>, E>
where
    F: AsyncFnMut(u32) -> Result<SearchResponse<T>, E>,
{
    let mut page = 1;
    let mut results = Vec::new();
    let mut total;

    loop {
        let response = fetch(page).await?;
        total = response.total_results;

        let count = response.results.len();
        let has_next = has_next_page(&response);
        results.extend(response.results);
        let report = PageReport {
            page,
            count,
            has_next,
        };
        info!(page, count, total, has_next, "page collected");
        on_page(&report);

        if !has_next {
            break;
        }
        page += 1;
    }

    Ok(Collected { results, total })
}

fn has_next_page<T>(response: &SearchResponse<T>) -> bool {
    if response.per_page == 0 {
        warn!(
            page = response.page,
            "response reported per_page = 0, stopping pagination"
        );
        return false;
    }
    u64::from(response.page) * u64::from(response.per_page) < u64::from(response.total_results)
}

/// Progress line for one fetched page.
pub fn describe_page(report: &PageReport) -> String {
    let next = if report.has_next {
        "Querying next page."
    } else {
        "All results collected."
    };
    format!(
        "Collected {} results from page {}. {next}",
        report.count, report.page
    )
}

/// Closing line once every page has been collected.
pub fn describe_total<T>(collected: &Collected<T>) -> String {
    format!(
        "{} results collected. Total results: {}.",
        collected.results.len(),
        collected.total
    )
}
