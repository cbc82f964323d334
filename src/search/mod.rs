pub mod controller;
pub mod destinations;
pub mod filters;
pub mod pagination;
pub mod query;
pub mod results;
pub mod sort;
pub mod state;

pub use controller::{RequestTicket, SearchController};
pub use destinations::{city_suggestions, Destination, AVAILABLE_CITIES, POPULAR_DESTINATIONS};
pub use filters::{FilterGroup, FilterOption, FilterSet, PRICE_RANGE_GROUP, STAR_RATING_GROUP};
pub use pagination::PageWindow;
pub use query::QueryString;
pub use results::{Pagination, ResultEnvelope};
pub use sort::{SortDirection, SortOption};
pub use state::SearchFilterState;
