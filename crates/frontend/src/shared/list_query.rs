//! Server-side list state shared by every list page.
//!
//! Holds the filter draft (what the inputs show) separately from the applied
//! filters (what the last query used). Only applying, paging, ordering and
//! page-size changes lead to a fetch.

use super::request_seq::RequestSeq;
use contracts::domain::common::ListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub const DEFAULT_ORDERING: &str = "-created_at";

/// Applied-filter set of one resource
pub trait ListFilters: Clone + Default + PartialEq {
    /// Query parameters in a stable order. Blank values are dropped later.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    fn active_count(&self) -> usize {
        self.query_pairs()
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .count()
    }
}

/// `k=v&k=v` with blank values left out and values percent-encoded
pub fn build_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v.trim())))
        .collect::<Vec<_>>()
        .join("&")
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Paging line under a table
pub fn summary_text(count: usize, page: usize, pages: usize) -> String {
    format!("Toplam: {} kayıt — Sayfa {} / {}", count, page, pages)
}

/// `(value, label)` pairs for a select over ordering options
pub fn ordering_choices(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(k, l)| (k.to_string(), l.to_string()))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ListController<F: ListFilters, T> {
    pub filter_draft: F,
    pub filters: F,
    pub ordering: String,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub rows: Vec<T>,
    pub count: usize,
    pub loading: bool,
    pub error: Option<String>,
    seq: RequestSeq,
}

impl<F: ListFilters, T> ListController<F, T> {
    pub fn new(ordering: &str, page_size: usize) -> Self {
        Self {
            filter_draft: F::default(),
            filters: F::default(),
            ordering: ordering.to_string(),
            page: 1,
            page_size,
            rows: Vec::new(),
            count: 0,
            loading: false,
            error: None,
            seq: RequestSeq::new(),
        }
    }

    /// Fixed filters that both draft and applied set start from
    pub fn with_filters(mut self, filters: F) -> Self {
        self.filter_draft = filters.clone();
        self.filters = filters;
        self
    }

    pub fn apply_filters(&mut self) {
        self.filters = self.filter_draft.clone();
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter_draft = F::default();
        self.filters = F::default();
        self.page = 1;
    }

    pub fn set_ordering(&mut self, ordering: &str) {
        self.ordering = ordering.to_string();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Clamped to `1..=total_pages`
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.count, self.page_size)
    }

    /// Called after a row of the current page was deleted. When it was the
    /// last row on a page past the first, that page no longer exists and the
    /// reload goes one page back.
    pub fn step_back_after_delete(&mut self) {
        if self.rows.len() <= 1 && self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn summary(&self) -> String {
        summary_text(self.count, self.page, self.total_pages())
    }

    /// Applied filters, then `ordering`, `page`, `page_size`
    pub fn query_string(&self) -> String {
        let mut pairs = self.filters.query_pairs();
        pairs.push(("ordering", self.ordering.clone()));
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        build_query(&pairs)
    }

    /// Marks a load as started. Returns its ticket and query string.
    pub fn begin_load(&mut self) -> (u64, String) {
        self.loading = true;
        (self.seq.next(), self.query_string())
    }

    /// Stores a response if `ticket` is still the newest one.
    /// Returns `false` when the response was stale and got dropped.
    pub fn finish_load(&mut self, ticket: u64, result: Result<ListResponse<T>, String>) -> bool {
        if !self.seq.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                let (rows, count) = resp.into_parts();
                self.rows = rows;
                self.count = count;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        true
    }

    /// Like [`Self::finish_load`], but a failure just empties the list
    pub fn finish_load_quiet(&mut self, ticket: u64, result: Result<ListResponse<T>, String>) -> bool {
        let result = result.or_else(|_| Ok(ListResponse::Bare(Vec::new())));
        self.finish_load(ticket, result)
    }
}

/// Starts a fetch for the current state of `state`.
///
/// The answer is stored only if no newer fetch started in the meantime.
/// With `quiet`, a failure shows as an empty list instead of an error.
pub fn spawn_list_load<F, T, Fut>(
    state: RwSignal<ListController<F, T>>,
    quiet: bool,
    fetch: impl FnOnce(String) -> Fut + 'static,
) where
    F: ListFilters + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<ListResponse<T>, String>> + 'static,
{
    let Some((ticket, query)) = state.try_update(|s| s.begin_load()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch(query).await;
        let applied = state
            .try_update(|s| {
                if quiet {
                    s.finish_load_quiet(ticket, result)
                } else {
                    s.finish_load(ticket, result)
                }
            })
            .unwrap_or(false);
        if !applied {
            log::debug!("dropped stale list response #{}", ticket);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Filters {
        q: String,
        code: String,
    }

    impl ListFilters for Filters {
        fn query_pairs(&self) -> Vec<(&'static str, String)> {
            vec![("q", self.q.clone()), ("code", self.code.clone())]
        }
    }

    type Controller = ListController<Filters, u32>;

    fn controller() -> Controller {
        ListController::new(DEFAULT_ORDERING, 50)
    }

    #[test]
    fn draft_is_not_queried_until_applied() {
        let mut c = controller();
        c.filter_draft.q = "sikke".into();
        assert_eq!(c.query_string(), "ordering=-created_at&page=1&page_size=50");
        c.page = 3;
        c.apply_filters();
        assert_eq!(c.page, 1);
        assert_eq!(c.query_string(), "q=sikke&ordering=-created_at&page=1&page_size=50");
    }

    #[test]
    fn cleared_filters_leave_only_paging_params() {
        let mut c = controller();
        c.filter_draft = Filters {
            q: "x".into(),
            code: "AAB".into(),
        };
        c.apply_filters();
        c.clear_filters();
        assert_eq!(c.filter_draft, Filters::default());
        assert_eq!(c.query_string(), "ordering=-created_at&page=1&page_size=50");
    }

    #[test]
    fn blank_values_are_omitted_and_values_encoded() {
        let pairs = vec![("q", "  ".to_string()), ("finding_place", "Açma 3".to_string())];
        assert_eq!(build_query(&pairs), "finding_place=A%C3%A7ma%203");
    }

    #[test]
    fn ordering_and_page_size_reset_page() {
        let mut c = controller();
        c.count = 500;
        c.set_page(4);
        assert_eq!(c.page, 4);
        c.set_ordering("code");
        assert_eq!(c.page, 1);
        c.set_page(4);
        c.set_page_size(100);
        assert_eq!(c.page, 1);
        assert_eq!(c.query_string(), "ordering=code&page=1&page_size=100");
    }

    #[test]
    fn page_change_keeps_filters() {
        let mut c = controller();
        c.filter_draft.code = "AAC".into();
        c.apply_filters();
        c.count = 120;
        c.set_page(2);
        assert_eq!(c.query_string(), "code=AAC&ordering=-created_at&page=2&page_size=50");
        c.set_page(99);
        assert_eq!(c.page, 3);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(summary_text(51, 2, 2), "Toplam: 51 kayıt — Sayfa 2 / 2");
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut c = controller();
        let (old, _) = c.begin_load();
        let (new, _) = c.begin_load();
        assert!(c.finish_load(new, Ok(ListResponse::Paginated { count: 1, results: vec![7] })));
        assert!(!c.finish_load(old, Ok(ListResponse::Bare(vec![1, 2, 3]))));
        assert_eq!(c.rows, vec![7]);
        assert_eq!(c.count, 1);
        assert!(!c.loading);
    }

    #[test]
    fn deleting_last_row_of_last_page_reloads_previous_page() {
        let mut c = controller();
        c.page_size = 25;
        c.count = 26;
        c.set_page(2);
        let (t, _) = c.begin_load();
        c.finish_load(t, Ok(ListResponse::Paginated { count: 26, results: vec![26] }));

        c.step_back_after_delete();
        assert_eq!(c.page, 1);
        let (t, query) = c.begin_load();
        assert_eq!(query, "ordering=-created_at&page=1&page_size=25");
        let page_one: Vec<u32> = (1..=25).collect();
        c.finish_load(t, Ok(ListResponse::Paginated { count: 25, results: page_one }));
        assert!(!c.rows.contains(&26));
        assert_eq!(c.error, None);
    }

    #[test]
    fn deleting_one_of_several_rows_keeps_page() {
        let mut c = controller();
        c.count = 120;
        c.set_page(3);
        c.rows = vec![101, 102];
        c.step_back_after_delete();
        assert_eq!(c.page, 3);

        c.set_page(1);
        c.rows = vec![1];
        c.step_back_after_delete();
        assert_eq!(c.page, 1);
    }

    #[test]
    fn bare_array_sets_count_from_length() {
        let mut c = controller();
        let (t, _) = c.begin_load();
        c.finish_load(t, Ok(ListResponse::Bare(vec![1, 2])));
        assert_eq!(c.count, 2);
    }

    #[test]
    fn errors_keep_rows_unless_quiet() {
        let mut c = controller();
        let (t, _) = c.begin_load();
        c.finish_load(t, Ok(ListResponse::Bare(vec![1])));
        let (t, _) = c.begin_load();
        c.finish_load(t, Err("Sunucuya ulaşılamadı: x".into()));
        assert_eq!(c.error.as_deref(), Some("Sunucuya ulaşılamadı: x"));
        assert_eq!(c.rows, vec![1]);

        let (t, _) = c.begin_load();
        c.finish_load_quiet(t, Err("boom".into()));
        assert!(c.rows.is_empty());
        assert_eq!(c.count, 0);
        assert_eq!(c.error, None);
    }
}
