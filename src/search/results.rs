use crate::api::{ApiError, HotelListResponse};
use crate::models::Hotel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-indexed
    pub current_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub page_size: u32,
}

/// What the result list renders, whichever endpoint answered
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    pub is_loading: bool,
    pub data: Vec<T>,
    pub pagination: Option<Pagination>,
    pub errors: Vec<String>,
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            data: Vec::new(),
            pagination: None,
            errors: Vec::new(),
        }
    }
}

impl<T> ResultEnvelope<T> {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages).unwrap_or(1)
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.map(|p| p.current_page).unwrap_or(1)
    }
}

impl ResultEnvelope<Hotel> {
    /// Normalize either reply shape
    ///
    /// A bare array is sliced to `page` (1-indexed) with `page_size` rows; an
    /// envelope is taken as the server paged it.
    pub fn from_response(response: HotelListResponse, page: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1);

        match response {
            HotelListResponse::List(hotels) => {
                let total_elements = hotels.len() as u64;
                let total_pages = total_elements.div_ceil(page_size as u64).max(1) as u32;
                let current_page = page.clamp(1, total_pages);
                let start = ((current_page - 1) * page_size) as usize;

                Self {
                    is_loading: false,
                    data: hotels
                        .into_iter()
                        .skip(start)
                        .take(page_size as usize)
                        .collect(),
                    pagination: Some(Pagination {
                        current_page,
                        total_pages,
                        total_elements,
                        page_size,
                    }),
                    errors: Vec::new(),
                }
            }
            HotelListResponse::Page(envelope) => {
                let total_elements = envelope
                    .total_elements
                    .unwrap_or(envelope.content.len() as u64);
                let size = envelope.size.filter(|s| *s > 0).unwrap_or(page_size);
                let total_pages = envelope
                    .total_pages
                    .unwrap_or_else(|| total_elements.div_ceil(size as u64) as u32)
                    .max(1);
                let current_page = envelope
                    .number
                    .map(|n| n.saturating_add(1))
                    .unwrap_or(page)
                    .clamp(1, total_pages);

                Self {
                    is_loading: false,
                    data: envelope.content,
                    pagination: Some(Pagination {
                        current_page,
                        total_pages,
                        total_elements,
                        page_size: size,
                    }),
                    errors: Vec::new(),
                }
            }
        }
    }

    pub fn from_result(
        result: Result<HotelListResponse, ApiError>,
        page: u32,
        page_size: u32,
    ) -> Self {
        match result {
            Ok(response) => Self::from_response(response, page, page_size),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HotelPage;

    fn hotels(n: i64) -> Vec<Hotel> {
        (1..=n)
            .map(|id| Hotel {
                hotel_id: id,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_bare_array_is_paged_locally() {
        let envelope = ResultEnvelope::from_response(HotelListResponse::List(hotels(23)), 3, 10);
        let pagination = envelope.pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.total_elements, 23);
        assert_eq!(envelope.data.len(), 3);
        assert_eq!(envelope.data[0].hotel_id, 21);
    }

    #[test]
    fn test_empty_array_has_one_page() {
        let envelope = ResultEnvelope::from_response(HotelListResponse::List(Vec::new()), 4, 10);
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.total_pages(), 1);
        assert_eq!(envelope.current_page(), 1);
    }

    #[test]
    fn test_envelope_number_is_zero_indexed() {
        let page = HotelPage {
            content: hotels(10),
            total_pages: Some(5),
            total_elements: Some(48),
            number: Some(2),
            size: Some(10),
        };
        let envelope = ResultEnvelope::from_response(HotelListResponse::Page(page), 1, 10);
        assert_eq!(envelope.current_page(), 3);
        assert_eq!(envelope.total_pages(), 5);
        assert_eq!(envelope.data.len(), 10);
    }

    #[test]
    fn test_failure_has_message_and_no_data() {
        let envelope = ResultEnvelope::from_result(
            Err(ApiError::Backend("Search is down".to_string())),
            1,
            10,
        );
        assert_eq!(envelope.errors, vec!["Search is down".to_string()]);
        assert!(envelope.data.is_empty());
        assert!(!envelope.is_loading);
    }
}
