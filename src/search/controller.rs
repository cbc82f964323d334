use super::pagination::PageWindow;
use super::results::ResultEnvelope;
use super::sort::SortOption;
use super::state::SearchFilterState;
use crate::api::{ApiError, HotelListResponse, HotelListing, ListingRequest};
use crate::models::Hotel;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Identifies one fetch; only the latest ticket may apply its response
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Keeps the visible controls, the route query and the fetched results in
/// step with each other
///
/// Every mutating operation returns whether anything changed. A change
/// rewrites the query and marks a fetch as pending; callers push
/// [`SearchController::query_string`] to the route and then run
/// [`SearchController::begin_fetch`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    state: SearchFilterState,
    results: ResultEnvelope<Hotel>,
    page_size: u32,
    latest_ticket: u64,
    needs_fetch: bool,
    page_corrected: bool,
}

impl SearchController {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: SearchFilterState::default(),
            results: ResultEnvelope::loading(),
            page_size: page_size.max(1),
            latest_ticket: 0,
            needs_fetch: true,
            page_corrected: false,
        }
    }

    pub fn from_query(raw: &str, page_size: u32) -> Self {
        let mut controller = Self::new(page_size);
        controller.state = SearchFilterState::from_query(raw);
        controller
    }

    pub fn state(&self) -> &SearchFilterState {
        &self.state
    }

    pub fn results(&self) -> &ResultEnvelope<Hotel> {
        &self.results
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn needs_fetch(&self) -> bool {
        self.needs_fetch
    }

    /// Whether the last response moved the page back into range since the
    /// previous call; the route query should then be replaced
    pub fn take_page_correction(&mut self) -> bool {
        std::mem::take(&mut self.page_corrected)
    }

    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(self.state.page, self.results.total_pages())
    }

    /// Current state as a query string, foreign keys kept in place
    pub fn query_string(&self) -> String {
        self.state.to_query().to_string()
    }

    fn mark_changed(&mut self) {
        self.state.commit_query();
        self.needs_fetch = true;
    }

    pub fn update_filter(&mut self, group_id: &str, filter_id: &str) -> bool {
        if !self.state.filters.toggle(group_id, filter_id) {
            return false;
        }
        debug!("Toggled filter {}/{}", group_id, filter_id);
        self.state.page = 1;
        self.mark_changed();
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        if !self.state.filters.clear() {
            return false;
        }
        debug!("Cleared all filters");
        self.state.page = 1;
        self.mark_changed();
        true
    }

    pub fn update_sort(&mut self, option: SortOption) -> bool {
        if self.state.sort == option {
            return false;
        }
        debug!("Sort changed to {}", option.value());
        self.state.sort = option;
        self.state.page = 1;
        self.mark_changed();
        true
    }

    /// Move to page `page` (1-indexed); out of range requests are ignored
    pub fn change_page(&mut self, page: u32) -> bool {
        let window = self.page_window();
        if !window.contains(page) {
            warn!("Ignoring page {} outside 1..={}", page, window.total);
            return false;
        }
        if page == self.state.page {
            return false;
        }
        self.state.page = page;
        self.mark_changed();
        true
    }

    /// Search box submit: replaces city, guests and dates and goes back to page 1
    pub fn submit_search(
        &mut self,
        city: &str,
        num_guests: Option<u32>,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) {
        info!("🔍 Search submitted: city={:?} guests={:?}", city, num_guests);
        self.state.city = city.trim().to_string();
        self.state.num_guests = num_guests.filter(|n| *n > 0);
        self.state.check_in = check_in;
        self.state.check_out = check_out;
        self.state.page = 1;
        self.mark_changed();
    }

    /// Adopt a query string that changed underneath us (back/forward, link)
    pub fn reconcile(&mut self, raw: &str) -> bool {
        let incoming = SearchFilterState::from_query(raw);
        if incoming.to_query() == self.state.to_query() {
            return false;
        }
        debug!("Route query changed, reloading search state");
        self.state = incoming;
        self.needs_fetch = true;
        true
    }

    /// Which endpoint the current state calls for
    pub fn listing_request(&self) -> ListingRequest {
        let state = &self.state;
        let city = Some(state.city.trim().to_string()).filter(|c| !c.is_empty());
        let has_filters = state.filters.has_selection();
        let has_sort = state.sort != SortOption::Default;

        if !has_filters && !has_sort {
            if city.is_none() && state.num_guests.is_none() {
                return ListingRequest::All;
            }
            return ListingRequest::Search {
                city,
                num_guests: state.num_guests,
            };
        }

        let mut params: Vec<(String, String)> = Vec::new();
        if let Some(city) = city {
            params.push(("city".to_string(), city));
        }
        if let Some(guests) = state.num_guests {
            params.push(("numGuests".to_string(), guests.to_string()));
        }
        if let Some((min, max)) = state.filters.price_range() {
            params.push(("minPrice".to_string(), min.to_string()));
            if let Some(max) = max {
                params.push(("maxPrice".to_string(), max.to_string()));
            }
        }
        let stars = state.filters.selected_stars();
        if !stars.is_empty() {
            let stars = stars
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("stars".to_string(), stars));
        }
        if let Some((sort_by, direction)) = state.sort.sort_params() {
            params.push(("sortBy".to_string(), sort_by.to_string()));
            params.push(("sortDirection".to_string(), direction.as_str().to_string()));
        }
        params.push(("page".to_string(), state.page.saturating_sub(1).to_string()));
        params.push(("size".to_string(), self.page_size.to_string()));

        ListingRequest::Filter { params }
    }

    /// Start a fetch: issues a new ticket and the request to send
    pub fn begin_fetch(&mut self) -> (RequestTicket, ListingRequest) {
        self.latest_ticket += 1;
        self.needs_fetch = false;
        self.results.is_loading = true;
        self.results.errors.clear();
        (RequestTicket(self.latest_ticket), self.listing_request())
    }

    /// Apply a response; returns false when `ticket` has been superseded
    pub fn finish_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<HotelListResponse, ApiError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            debug!(
                "Discarding stale response for request {} (latest is {})",
                ticket.0, self.latest_ticket
            );
            return false;
        }

        if let Err(e) = &result {
            warn!("✗ Hotel search failed: {}", e);
        }

        let server_paged = matches!(result, Ok(HotelListResponse::Page(_)));
        self.results = ResultEnvelope::from_result(result, self.state.page, self.page_size);
        if let Some(pagination) = self.results.pagination {
            if pagination.current_page != self.state.page {
                debug!(
                    "Page {} is out of range, showing page {}",
                    self.state.page, pagination.current_page
                );
                self.state.page = pagination.current_page;
                self.state.commit_query();
                self.page_corrected = true;
                // The server answered for a page that does not exist
                if server_paged && self.results.data.is_empty() {
                    self.needs_fetch = true;
                    self.results.is_loading = true;
                }
            }
            info!(
                "✓ Loaded {} hotels (page {}/{})",
                self.results.data.len(),
                pagination.current_page,
                pagination.total_pages
            );
        }
        true
    }

    /// Begin, send and apply in one go
    pub async fn fetch_results(&mut self, listing: &dyn HotelListing) -> &ResultEnvelope<Hotel> {
        let (ticket, request) = self.begin_fetch();
        let result = listing.fetch_listing(&request).await;
        self.finish_fetch(ticket, result);
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HotelPage;
    use crate::search::filters::{PRICE_RANGE_GROUP, STAR_RATING_GROUP};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn hotels(n: i64) -> Vec<Hotel> {
        (1..=n)
            .map(|id| Hotel {
                hotel_id: id,
                price: 100_000.0 * id as f64,
                ..Default::default()
            })
            .collect()
    }

    fn five_pages() -> HotelListResponse {
        HotelListResponse::Page(HotelPage {
            content: hotels(10),
            total_pages: Some(5),
            total_elements: Some(50),
            number: Some(0),
            size: Some(10),
        })
    }

    struct MockListing {
        response: Mutex<Option<Result<HotelListResponse, ApiError>>>,
        requests: Mutex<Vec<ListingRequest>>,
    }

    impl MockListing {
        fn returning(result: Result<HotelListResponse, ApiError>) -> Self {
            Self {
                response: Mutex::new(Some(result)),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HotelListing for MockListing {
        async fn fetch_listing(
            &self,
            request: &ListingRequest,
        ) -> Result<HotelListResponse, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(HotelListResponse::List(Vec::new())))
        }
    }

    fn param<'a>(request: &'a ListingRequest, key: &str) -> Option<&'a str> {
        match request {
            ListingRequest::Filter { params } => params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_toggle_twice_restores_query() {
        let mut controller = SearchController::from_query("city=Hanoi", 10);
        let before = controller.query_string();

        assert!(controller.update_filter(STAR_RATING_GROUP, "5_star"));
        assert!(controller.query_string().contains("stars=5"));
        assert!(controller.update_filter(STAR_RATING_GROUP, "5_star"));
        assert_eq!(controller.query_string(), before);
    }

    #[test]
    fn test_unknown_filter_does_not_refetch() {
        let mut controller = SearchController::new(10);
        controller.begin_fetch();
        assert!(!controller.update_filter("amenities", "pool"));
        assert!(!controller.needs_fetch());
    }

    #[test]
    fn test_sort_high_to_low_sets_params() {
        let mut controller = SearchController::new(10);
        assert!(controller.update_sort(SortOption::PriceHighToLow));
        assert_eq!(
            controller.query_string(),
            "sortBy=price&sortDirection=desc"
        );

        let request = controller.listing_request();
        assert_eq!(param(&request, "sortBy"), Some("price"));
        assert_eq!(param(&request, "sortDirection"), Some("desc"));

        assert!(controller.update_sort(SortOption::Default));
        assert_eq!(controller.query_string(), "");
        assert!(!controller.update_sort(SortOption::Default));
    }

    #[test]
    fn test_url_page_is_zero_indexed() {
        let controller = SearchController::from_query("city=Hanoi&page=2", 10);
        assert_eq!(controller.state().city, "Hanoi");
        assert_eq!(controller.state().page, 3);
    }

    #[test]
    fn test_change_page_stays_in_bounds() {
        let mut controller = SearchController::new(10);
        let (ticket, _) = controller.begin_fetch();
        assert!(controller.finish_fetch(ticket, Ok(five_pages())));

        let window = controller.page_window();
        assert_eq!(window.pages().count(), 5);

        assert!(!controller.change_page(0));
        assert!(!controller.change_page(6));
        assert_eq!(controller.state().page, 1);

        assert!(controller.change_page(5));
        assert_eq!(controller.state().page, 5);
        assert!(!controller.page_window().has_next());
        assert!(controller.query_string().contains("page=4"));
        assert!(!controller.change_page(5));
    }

    #[test]
    fn test_foreign_keys_survive_changes() {
        let mut controller = SearchController::from_query("ref=mail&city=Hue&x=1", 10);
        controller.update_sort(SortOption::PriceLowToHigh);
        controller.update_filter(PRICE_RANGE_GROUP, "over_2m");

        let query = controller.query_string();
        assert!(query.starts_with("ref=mail&city=Hue&x=1"));
        assert!(query.contains("price=over_2m"));
        assert!(query.contains("sortDirection=asc"));
    }

    #[test]
    fn test_out_of_range_page_is_corrected_and_refetched() {
        let mut controller = SearchController::from_query("city=Hue&stars=4&page=8", 10);
        assert_eq!(controller.state().page, 9);

        let (ticket, request) = controller.begin_fetch();
        assert_eq!(param(&request, "page"), Some("8"));
        let beyond_end = HotelListResponse::Page(HotelPage {
            content: Vec::new(),
            total_pages: Some(5),
            total_elements: Some(50),
            number: None,
            size: Some(10),
        });
        assert!(controller.finish_fetch(ticket, Ok(beyond_end)));

        assert_eq!(controller.state().page, 5);
        assert!(controller.query_string().contains("page=4"));
        assert!(controller.take_page_correction());
        assert!(!controller.take_page_correction());
        assert!(controller.needs_fetch());

        let (ticket, request) = controller.begin_fetch();
        assert_eq!(param(&request, "page"), Some("4"));
        let last_page = HotelListResponse::Page(HotelPage {
            content: hotels(10),
            total_pages: Some(5),
            total_elements: Some(50),
            number: Some(4),
            size: Some(10),
        });
        assert!(controller.finish_fetch(ticket, Ok(last_page)));
        assert!(!controller.needs_fetch());
        assert!(!controller.take_page_correction());
        assert_eq!(controller.results().data.len(), 10);
    }

    #[test]
    fn test_bare_array_page_is_clamped_without_refetch() {
        let mut controller = SearchController::from_query("city=Hue&page=6", 10);
        let (ticket, _) = controller.begin_fetch();
        assert!(controller.finish_fetch(ticket, Ok(HotelListResponse::List(hotels(12)))));

        assert_eq!(controller.state().page, 2);
        assert_eq!(controller.results().data.len(), 2);
        assert!(controller.take_page_correction());
        assert!(!controller.needs_fetch());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = SearchController::new(10);
        let (first, _) = controller.begin_fetch();
        let (second, _) = controller.begin_fetch();

        assert!(controller.finish_fetch(second, Ok(HotelListResponse::List(hotels(2)))));
        assert!(!controller.finish_fetch(first, Ok(HotelListResponse::List(hotels(7)))));
        assert_eq!(controller.results().data.len(), 2);
    }

    #[test]
    fn test_listing_request_shapes() {
        let controller = SearchController::new(10);
        assert_eq!(controller.listing_request(), ListingRequest::All);

        let controller = SearchController::from_query("city=Da%20Nang&numGuests=2", 10);
        assert_eq!(
            controller.listing_request(),
            ListingRequest::Search {
                city: Some("Da Nang".to_string()),
                num_guests: Some(2)
            }
        );

        let controller =
            SearchController::from_query("city=Hue&stars=4,5&price=500k_1m&page=1", 20);
        let request = controller.listing_request();
        assert_eq!(request.path(), "api/hotels/filter");
        assert_eq!(param(&request, "city"), Some("Hue"));
        assert_eq!(param(&request, "stars"), Some("5,4"));
        assert_eq!(param(&request, "minPrice"), Some("500000"));
        assert_eq!(param(&request, "maxPrice"), Some("1000000"));
        assert_eq!(param(&request, "page"), Some("1"));
        assert_eq!(param(&request, "size"), Some("20"));
    }

    #[test]
    fn test_submit_search_resets_page() {
        let mut controller = SearchController::from_query("city=Hue&page=3", 10);
        controller.submit_search(" Hanoi ", Some(2), NaiveDate::from_ymd_opt(2025, 1, 2), None);
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.state().city, "Hanoi");
        assert_eq!(
            controller.query_string(),
            "city=Hanoi&numGuests=2&checkIn=2025-01-02"
        );
        assert!(controller.needs_fetch());
    }

    #[test]
    fn test_reconcile_only_on_change() {
        let mut controller = SearchController::from_query("city=Hue", 10);
        controller.begin_fetch();
        assert!(!controller.reconcile("?city=Hue"));
        assert!(controller.reconcile("city=Hue&stars=3"));
        assert!(controller.needs_fetch());
        assert_eq!(controller.state().filters.selected_stars(), vec![3]);
    }

    #[tokio::test]
    async fn test_fetch_results_normalizes_bare_array() {
        let listing = MockListing::returning(Ok(HotelListResponse::List(hotels(12))));
        let mut controller = SearchController::new(5);

        let results = controller.fetch_results(&listing).await;
        assert_eq!(results.data.len(), 5);
        assert_eq!(results.total_pages(), 3);
        assert!(!results.is_loading);
        assert_eq!(
            listing.requests.lock().unwrap().as_slice(),
            &[ListingRequest::All]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_error_message() {
        let listing = MockListing::returning(Err(ApiError::NotFound));
        let mut controller = SearchController::from_query("city=Hue", 10);

        let results = controller.fetch_results(&listing).await;
        assert_eq!(results.errors, vec!["Not found".to_string()]);
        assert!(results.data.is_empty());
    }
}
