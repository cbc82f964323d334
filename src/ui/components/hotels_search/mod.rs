mod filters_panel;
mod hotel_card;
mod page;
mod pagination_bar;

pub use hotel_card::HotelCard;
pub use page::HotelsSearch;
pub use pagination_bar::PaginationBar;
