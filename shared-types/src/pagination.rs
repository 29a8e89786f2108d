use serde::{Deserialize, Serialize};

use crate::image::{SearchPage, SpaceImage};

/// Number of images requested per page.
pub const PAGE_SIZE: u32 = 20;

/// A short page means the service ran out of results.
pub fn has_more(returned: usize, page_size: u32) -> bool {
    returned == page_size as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// A fresh search; the response replaces the current results.
    Replace,
    /// A continuation; the response is appended to the current results.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    pub query: String,
    pub page: u32,
    pub page_size: u32,
    pub mode: RequestMode,
}

/// State behind the search view.
///
/// At most one request is in flight. Every request handed out carries an id,
/// and only the response for the current id is applied, so a late answer to
/// a superseded request can never overwrite newer results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    query: String,
    images: Vec<SpaceImage>,
    page: u32,
    has_more: bool,
    has_searched: bool,
    error: Option<String>,
    in_flight: Option<PageRequest>,
    failed: Option<PageRequest>,
    next_id: u64,
    revision: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last query that was submitted, trimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn images(&self) -> &[SpaceImage] {
        &self.images
    }

    /// Bumped every time the result list changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn result_count(&self) -> usize {
        self.images.len()
    }

    /// Last page that was loaded successfully, 0 before the first one.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.error.is_none() && !self.images.is_empty() && self.has_more
    }

    pub fn can_retry(&self) -> bool {
        !self.is_loading() && self.failed.is_some()
    }

    /// Nothing to show: no results, no error, nothing loading.
    pub fn is_empty(&self) -> bool {
        !self.is_loading() && self.images.is_empty() && self.error.is_none()
    }

    /// Starts a fresh search. Blank queries are ignored.
    pub fn submit(&mut self, query: &str) -> Option<PageRequest> {
        let query = query.trim();
        if query.is_empty() || self.is_loading() {
            return None;
        }

        self.query = query.to_string();
        self.has_searched = true;
        Some(self.issue(self.query.clone(), 1, RequestMode::Replace))
    }

    /// Requests the page after the last one loaded, for the committed query.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }

        Some(self.issue(self.query.clone(), self.page + 1, RequestMode::Append))
    }

    /// Re-issues the request that last failed, keeping its page and mode.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }

        let failed = self.failed.take()?;
        Some(self.issue(failed.query, failed.page, failed.mode))
    }

    /// Applies a response. Returns `false` when the request is stale.
    pub fn complete(&mut self, request: &PageRequest, page: SearchPage) -> bool {
        if !self.is_current(request) {
            return false;
        }

        self.in_flight = None;
        self.page = request.page;
        self.has_more = has_more(page.returned, request.page_size);
        match request.mode {
            RequestMode::Replace => self.images = page.images,
            RequestMode::Append => self.images.extend(page.images),
        }
        self.revision += 1;
        true
    }

    /// Records a failure. Returns `false` when the request is stale.
    pub fn fail(&mut self, request: &PageRequest, message: impl Into<String>) -> bool {
        if !self.is_current(request) {
            return false;
        }

        self.in_flight = None;
        self.error = Some(message.into());
        self.failed = Some(request.clone());
        true
    }

    fn is_current(&self, request: &PageRequest) -> bool {
        self.in_flight.as_ref().map(|r| r.id) == Some(request.id)
    }

    fn issue(&mut self, query: String, page: u32, mode: RequestMode) -> PageRequest {
        self.next_id += 1;
        self.error = None;
        self.failed = None;

        let request = PageRequest {
            id: self.next_id,
            query,
            page,
            page_size: PAGE_SIZE,
            mode,
        };
        self.in_flight = Some(request.clone());
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(prefix: &str, count: usize) -> Vec<SpaceImage> {
        (0..count)
            .map(|i| SpaceImage {
                nasa_id: format!("{prefix}-{i}"),
                title: format!("{prefix} {i}"),
                description: None,
                preview_url: None,
                date_created: None,
            })
            .collect()
    }

    fn full_page(prefix: &str) -> SearchPage {
        SearchPage {
            images: images(prefix, PAGE_SIZE as usize),
            returned: PAGE_SIZE as usize,
            skipped: 0,
        }
    }

    fn short_page(prefix: &str, count: usize) -> SearchPage {
        SearchPage {
            images: images(prefix, count),
            returned: count,
            skipped: 0,
        }
    }

    #[test]
    fn has_more_only_on_a_full_page() {
        assert!(has_more(20, 20));
        assert!(!has_more(19, 20));
        assert!(!has_more(0, 20));
        assert!(!has_more(21, 20));
    }

    #[test]
    fn blank_queries_are_ignored() {
        let mut state = SearchState::new();
        assert!(state.submit("").is_none());
        assert!(state.submit("   \t").is_none());
        assert!(!state.has_searched());
        assert!(!state.is_loading());
    }

    #[test]
    fn submit_issues_first_page_for_trimmed_query() {
        let mut state = SearchState::new();
        let request = state.submit("  orion nebula ").unwrap();

        assert_eq!(request.query, "orion nebula");
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, PAGE_SIZE);
        assert_eq!(request.mode, RequestMode::Replace);
        assert_eq!(state.query(), "orion nebula");
        assert!(state.has_searched());
        assert!(state.is_loading());
        assert!(!state.is_empty());
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut state = SearchState::new();
        state.submit("mars").unwrap();
        assert!(state.submit("venus").is_none());
        assert!(state.load_more().is_none());
        assert!(state.retry().is_none());
        assert_eq!(state.query(), "mars");
    }

    #[test]
    fn load_more_appends_next_page() {
        let mut state = SearchState::new();
        let first = state.submit("jupiter").unwrap();
        assert!(state.complete(&first, full_page("p1")));
        assert_eq!(state.page(), 1);
        assert!(state.has_more());
        assert!(state.can_load_more());

        let second = state.load_more().unwrap();
        assert_eq!(second.page, 2);
        assert_eq!(second.mode, RequestMode::Append);
        assert_eq!(second.query, "jupiter");

        assert!(state.complete(&second, short_page("p2", 5)));
        assert_eq!(state.page(), 2);
        assert_eq!(state.result_count(), PAGE_SIZE as usize + 5);
        assert_eq!(state.images()[0].nasa_id, "p1-0");
        assert_eq!(state.images()[PAGE_SIZE as usize].nasa_id, "p2-0");
        assert!(!state.has_more());
        assert!(!state.can_load_more());
        assert!(state.load_more().is_none());
    }

    #[test]
    fn fresh_search_replaces_results() {
        let mut state = SearchState::new();
        let first = state.submit("saturn").unwrap();
        state.complete(&first, full_page("saturn"));
        let more = state.load_more().unwrap();
        state.complete(&more, full_page("saturn-2"));
        assert_eq!(state.page(), 2);

        let fresh = state.submit("pluto").unwrap();
        assert_eq!(fresh.page, 1);
        // previous results stay visible until the new page arrives
        assert_eq!(state.result_count(), 2 * PAGE_SIZE as usize);

        state.complete(&fresh, short_page("pluto", 3));
        assert_eq!(state.page(), 1);
        assert_eq!(state.result_count(), 3);
        assert_eq!(state.images()[0].nasa_id, "pluto-0");
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = SearchState::new();
        let first = state.submit("moon").unwrap();
        state.fail(&first, "HTTP error! status: 502");
        let retried = state.retry().unwrap();
        assert_ne!(first.id, retried.id);

        assert!(!state.complete(&first, full_page("late")));
        assert!(state.is_loading());
        assert!(state.images().is_empty());

        assert!(state.complete(&retried, short_page("moon", 2)));
        assert!(!state.fail(&retried, "too late"));
        assert!(state.error().is_none());
        assert_eq!(state.result_count(), 2);
    }

    #[test]
    fn failure_keeps_results_and_exposes_retry() {
        let mut state = SearchState::new();
        let first = state.submit("comet").unwrap();
        state.complete(&first, full_page("comet"));

        let more = state.load_more().unwrap();
        assert!(state.fail(&more, "HTTP error! status: 500"));
        assert_eq!(state.error(), Some("HTTP error! status: 500"));
        assert!(!state.is_loading());
        assert!(state.can_retry());
        assert!(!state.can_load_more());
        assert!(!state.is_empty());
        assert_eq!(state.page(), 1);
        assert_eq!(state.result_count(), PAGE_SIZE as usize);

        let retried = state.retry().unwrap();
        assert_eq!(retried.page, 2);
        assert_eq!(retried.mode, RequestMode::Append);
        assert_eq!(retried.query, "comet");
        assert!(state.error().is_none());
        assert!(!state.can_retry());

        state.complete(&retried, short_page("comet-2", 4));
        assert_eq!(state.result_count(), PAGE_SIZE as usize + 4);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn retry_without_failure_does_nothing() {
        let mut state = SearchState::new();
        assert!(state.retry().is_none());

        let first = state.submit("sun").unwrap();
        state.complete(&first, short_page("sun", 1));
        assert!(state.retry().is_none());
    }

    #[test]
    fn empty_result_after_search() {
        let mut state = SearchState::new();
        assert!(state.is_empty());
        assert!(!state.has_searched());

        let request = state.submit("nothing here").unwrap();
        state.complete(&request, SearchPage::default());
        assert!(state.is_empty());
        assert!(state.has_searched());
        assert!(!state.has_more());
    }

    #[test]
    fn reported_count_drives_has_more() {
        let mut state = SearchState::new();
        let request = state.submit("andromeda").unwrap();
        state.complete(
            &request,
            SearchPage {
                images: images("a", 3),
                returned: PAGE_SIZE as usize,
                skipped: 0,
            },
        );
        assert!(state.has_more());
        assert_eq!(state.result_count(), 3);
    }

    #[test]
    fn revision_tracks_result_changes_only() {
        let mut state = SearchState::new();
        assert_eq!(state.revision(), 0);

        let first = state.submit("io").unwrap();
        assert_eq!(state.revision(), 0);
        state.complete(&first, full_page("io"));
        assert_eq!(state.revision(), 1);

        let more = state.load_more().unwrap();
        state.fail(&more, "HTTP error! status: 500");
        assert_eq!(state.revision(), 1);

        let retried = state.retry().unwrap();
        assert!(!state.complete(&more, full_page("late")));
        assert_eq!(state.revision(), 1);
        state.complete(&retried, short_page("io-2", 2));
        assert_eq!(state.revision(), 2);
    }
}
