mod support;

use async_trait::async_trait;
use hotelhub::api::{ApiError, HotelListResponse, HotelListing, ListingRequest};
use hotelhub::models::Hotel;
use hotelhub::search::{SearchController, SortOption, STAR_RATING_GROUP};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use support::tracing_init;

/// Answers listing calls from a queue and records what was asked
struct ScriptedListing {
    responses: Mutex<VecDeque<Result<HotelListResponse, ApiError>>>,
    requests: Mutex<Vec<ListingRequest>>,
}

impl ScriptedListing {
    fn new(responses: Vec<Result<HotelListResponse, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ListingRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HotelListing for ScriptedListing {
    async fn fetch_listing(&self, request: &ListingRequest) -> Result<HotelListResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Backend("no scripted response".to_string())))
    }
}

fn hotel_list(count: i64) -> HotelListResponse {
    let hotels: Vec<Hotel> = (1..=count)
        .map(|id| Hotel {
            hotel_id: id,
            title: format!("Hotel {}", id),
            city: "Hanoi".to_string(),
            price: 400_000.0 + 50_000.0 * id as f64,
            ..Default::default()
        })
        .collect();
    HotelListResponse::List(hotels)
}

fn filter_param<'a>(request: &'a ListingRequest, key: &str) -> Option<&'a str> {
    match request {
        ListingRequest::Filter { params } => params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

#[tokio::test]
async fn test_search_page_and_filter_flow() {
    tracing_init();

    let page_envelope: HotelListResponse = serde_json::from_value(json!({
        "content": [
            { "hotelId": 7, "title": "Lotus", "city": "Hanoi", "price": 1200000, "ratings": 4.6 },
            { "id": 8, "title": "Pearl", "city": "Hanoi", "price": 900000 }
        ],
        "totalPages": 2,
        "totalElements": 12,
        "number": 0,
        "size": 10
    }))
    .unwrap();

    let listing = ScriptedListing::new(vec![
        Ok(hotel_list(25)),
        Ok(hotel_list(25)),
        Ok(page_envelope),
    ]);

    let mut controller = SearchController::from_query("city=Hanoi&utm_source=mail", 10);

    // First load: city only goes to the search endpoint, paged locally
    let results = controller.fetch_results(&listing).await;
    assert_eq!(results.data.len(), 10);
    assert_eq!(results.total_pages(), 3);

    // Last page holds the remaining five
    assert!(controller.change_page(3));
    assert!(controller.query_string().contains("page=2"));
    let results = controller.fetch_results(&listing).await;
    assert_eq!(results.data.len(), 5);
    assert_eq!(results.data[0].hotel_id, 21);
    assert!(!controller.page_window().has_next());

    // A filter resets to the first page and switches to the filter endpoint
    assert!(controller.update_filter(STAR_RATING_GROUP, "4_star"));
    assert_eq!(controller.state().page, 1);
    let results = controller.fetch_results(&listing).await;
    assert_eq!(results.data.len(), 2);
    assert_eq!(results.data[1].hotel_id, 8);
    assert_eq!(results.total_pages(), 2);

    let requests = listing.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0],
        ListingRequest::Search {
            city: Some("Hanoi".to_string()),
            num_guests: None,
        }
    );
    assert_eq!(requests[2].path(), "api/hotels/filter");
    assert_eq!(filter_param(&requests[2], "stars"), Some("4"));
    assert_eq!(filter_param(&requests[2], "page"), Some("0"));
    assert_eq!(filter_param(&requests[2], "size"), Some("10"));

    let query = controller.query_string();
    assert!(query.contains("utm_source=mail"));
    assert!(query.contains("stars=4"));
    assert!(!query.contains("page="));
}

#[tokio::test]
async fn test_failed_fetch_reports_error_and_keeps_state() {
    tracing_init();

    let listing = ScriptedListing::new(vec![Err(ApiError::Backend(
        "Search service unavailable".to_string(),
    ))]);
    let mut controller = SearchController::from_query("sortBy=price&sortDirection=asc", 10);
    assert_eq!(controller.state().sort, SortOption::PriceLowToHigh);

    let results = controller.fetch_results(&listing).await;
    assert!(results.has_errors());
    assert!(results.errors[0].contains("Search service unavailable"));
    assert!(results.data.is_empty());
    assert!(!results.is_loading);

    assert_eq!(
        controller.query_string(),
        "sortBy=price&sortDirection=asc"
    );
}

#[tokio::test]
async fn test_back_navigation_reconciles_state() {
    tracing_init();

    let mut controller = SearchController::from_query("city=Hue", 10);
    let listing = ScriptedListing::new(vec![Ok(hotel_list(3))]);
    controller.fetch_results(&listing).await;
    assert!(!controller.needs_fetch());

    assert!(!controller.reconcile("city=Hue"));
    assert!(controller.reconcile("city=Da%20Nang&numGuests=3"));
    assert!(controller.needs_fetch());
    assert_eq!(controller.state().city, "Da Nang");
    assert_eq!(controller.state().num_guests, Some(3));
}
