use super::client::{ApiClient, ApiError};
use crate::models::{Hotel, HotelDraft, Review};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// One of the three listing endpoints, with its query parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ListingRequest {
    /// `GET api/hotels`
    All,
    /// `GET api/hotels/search`
    Search {
        city: Option<String>,
        num_guests: Option<u32>,
    },
    /// `GET api/hotels/filter`
    Filter { params: Vec<(String, String)> },
}

impl ListingRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ListingRequest::All => "api/hotels",
            ListingRequest::Search { .. } => "api/hotels/search",
            ListingRequest::Filter { .. } => "api/hotels/filter",
        }
    }

    pub fn query(&self) -> Vec<(String, String)> {
        match self {
            ListingRequest::All => Vec::new(),
            ListingRequest::Search { city, num_guests } => {
                let mut query = Vec::new();
                if let Some(city) = city {
                    query.push(("city".to_string(), city.clone()));
                }
                if let Some(guests) = num_guests {
                    query.push(("numGuests".to_string(), guests.to_string()));
                }
                query
            }
            ListingRequest::Filter { params } => params.clone(),
        }
    }
}

/// Listing replies come back either as a bare array or as a page envelope
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum HotelListResponse {
    List(Vec<Hotel>),
    Page(HotelPage),
}

impl HotelListResponse {
    /// The hotels in the reply, whichever shape it came in
    pub fn into_hotels(self) -> Vec<Hotel> {
        match self {
            HotelListResponse::List(hotels) => hotels,
            HotelListResponse::Page(page) => page.content,
        }
    }
}

/// Paginated envelope of the filter endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelPage {
    #[serde(alias = "elements", alias = "data", alias = "hotels")]
    pub content: Vec<Hotel>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    /// 0-indexed page number
    #[serde(default, alias = "page")]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// The listing seam the search controller fetches through
#[async_trait]
pub trait HotelListing: Send + Sync {
    async fn fetch_listing(&self, request: &ListingRequest)
        -> Result<HotelListResponse, ApiError>;
}

#[async_trait]
impl HotelListing for ApiClient {
    async fn fetch_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<HotelListResponse, ApiError> {
        match request {
            ListingRequest::Search { city, num_guests } => {
                self.search_hotels(city.clone(), *num_guests).await
            }
            ListingRequest::Filter { params } => self.filter_hotels(params.clone()).await,
            ListingRequest::All => self.get(request.path(), &[]).await,
        }
    }
}

impl ApiClient {
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        let response: HotelListResponse = self.get("api/hotels", &[]).await?;
        Ok(response.into_hotels())
    }

    pub async fn search_hotels(
        &self,
        city: Option<String>,
        num_guests: Option<u32>,
    ) -> Result<HotelListResponse, ApiError> {
        let request = ListingRequest::Search { city, num_guests };
        self.get(request.path(), &request.query()).await
    }

    pub async fn filter_hotels(
        &self,
        params: Vec<(String, String)>,
    ) -> Result<HotelListResponse, ApiError> {
        info!("📡 Filtering hotels with {} params", params.len());
        let request = ListingRequest::Filter { params };
        self.get(request.path(), &request.query()).await
    }

    pub async fn get_hotel(&self, hotel_id: i64) -> Result<Hotel, ApiError> {
        self.get(&format!("api/hotels/{}", hotel_id), &[]).await
    }

    pub async fn get_reviews(&self, hotel_id: i64, page: u32) -> Result<Vec<Review>, ApiError> {
        let query = vec![("currentPage".to_string(), page.to_string())];
        self.get(&format!("api/hotels/{}/reviews", hotel_id), &query)
            .await
    }

    pub async fn post_review(&self, hotel_id: i64, review: &Review) -> Result<Value, ApiError> {
        if !(1..=5).contains(&review.rating) {
            return Err(ApiError::InvalidInput(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        if review.review.trim().is_empty() {
            return Err(ApiError::InvalidInput("Review text is empty".to_string()));
        }

        info!("Posting {}-star review for hotel {}", review.rating, hotel_id);
        self.post(&format!("api/hotels/{}/reviews", hotel_id), review)
            .await
    }

    pub async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        check_draft(draft)?;
        self.post("api/hotels", draft).await
    }

    pub async fn update_hotel(&self, hotel_id: i64, draft: &HotelDraft) -> Result<Hotel, ApiError> {
        check_draft(draft)?;
        self.put(&format!("api/hotels/{}", hotel_id), draft).await
    }

    pub async fn delete_hotel(&self, hotel_id: i64) -> Result<Value, ApiError> {
        self.delete(&format!("api/hotels/{}", hotel_id)).await
    }
}

fn check_draft(draft: &HotelDraft) -> Result<(), ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::InvalidInput("Hotel title is required".to_string()));
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(ApiError::InvalidInput("Price must be 0 or more".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::parse_body;

    #[test]
    fn test_hotel_list_accepts_both_shapes() {
        let bare: HotelListResponse =
            parse_body(r#"[{"hotelId": 1, "title": "Lotus"}, {"id": 2}]"#).unwrap();
        let hotels = bare.into_hotels();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[1].hotel_id, 2);

        let paged: HotelListResponse = parse_body(
            r#"{"content": [{"hotelId": 3, "title": "Pearl"}], "totalPages": 1, "number": 0}"#,
        )
        .unwrap();
        let hotels = paged.into_hotels();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].title, "Pearl");
    }

    #[test]
    fn test_listing_request_paths_and_query() {
        assert_eq!(ListingRequest::All.path(), "api/hotels");
        assert!(ListingRequest::All.query().is_empty());

        let search = ListingRequest::Search {
            city: Some("Hanoi".to_string()),
            num_guests: Some(2),
        };
        assert_eq!(search.path(), "api/hotels/search");
        assert_eq!(
            search.query(),
            vec![
                ("city".to_string(), "Hanoi".to_string()),
                ("numGuests".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: HotelListResponse =
            serde_json::from_str(r#"[{"hotelId": 1}, {"hotelId": 2}]"#).unwrap();
        assert!(matches!(bare, HotelListResponse::List(ref h) if h.len() == 2));

        let page: HotelListResponse = serde_json::from_str(
            r#"{"content": [{"hotelId": 1}], "totalPages": 5, "totalElements": 41, "number": 0, "size": 10}"#,
        )
        .unwrap();
        match page {
            HotelListResponse::Page(page) => {
                assert_eq!(page.content.len(), 1);
                assert_eq!(page.total_pages, Some(5));
                assert_eq!(page.number, Some(0));
            }
            other => panic!("expected page envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_check_draft_rejects_negative_price() {
        let mut draft = HotelDraft::from_hotel(&Hotel {
            title: "Sea View".to_string(),
            ..Default::default()
        });
        assert!(check_draft(&draft).is_ok());
        draft.price = -1.0;
        assert!(matches!(check_draft(&draft), Err(ApiError::InvalidInput(_))));
    }
}
