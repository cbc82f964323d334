use super::filters::{FilterSet, PRICE_RANGE_GROUP, STAR_RATING_GROUP};
use super::query::QueryString;
use super::sort::SortOption;
use chrono::NaiveDate;

// Query keys owned by the search state
pub const KEY_CITY: &str = "city";
pub const KEY_NUM_GUESTS: &str = "numGuests";
pub const KEY_CHECK_IN: &str = "checkIn";
pub const KEY_CHECK_OUT: &str = "checkOut";
pub const KEY_STARS: &str = "stars";
pub const KEY_PRICE: &str = "price";
pub const KEY_SORT_BY: &str = "sortBy";
pub const KEY_SORT_DIRECTION: &str = "sortDirection";
pub const KEY_PAGE: &str = "page";

const OWNED_KEYS: [&str; 9] = [
    KEY_CITY,
    KEY_NUM_GUESTS,
    KEY_CHECK_IN,
    KEY_CHECK_OUT,
    KEY_STARS,
    KEY_PRICE,
    KEY_SORT_BY,
    KEY_SORT_DIRECTION,
    KEY_PAGE,
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the search page shows in its controls
///
/// `page` is 1-indexed here; the query string carries the 0-indexed API
/// page, so `page=2` in the URL is page 3 on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilterState {
    pub city: String,
    pub num_guests: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub filters: FilterSet,
    pub sort: SortOption,
    pub page: u32,
    /// The full query last read or written, foreign keys included
    query: QueryString,
}

impl Default for SearchFilterState {
    fn default() -> Self {
        Self {
            city: String::new(),
            num_guests: None,
            check_in: None,
            check_out: None,
            filters: FilterSet::default(),
            sort: SortOption::Default,
            page: 1,
            query: QueryString::new(),
        }
    }
}

impl SearchFilterState {
    /// Rebuild state from a query string; unrecognised or malformed values
    /// fall back to defaults
    pub fn from_query(raw: &str) -> Self {
        let query = QueryString::parse(raw);
        let mut state = Self::default();

        if let Some(city) = query.get_non_empty(KEY_CITY) {
            state.city = city.to_string();
        }
        state.num_guests = query
            .get_non_empty(KEY_NUM_GUESTS)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0);
        state.check_in = query
            .get_non_empty(KEY_CHECK_IN)
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok());
        state.check_out = query
            .get_non_empty(KEY_CHECK_OUT)
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok());

        if let Some(stars) = query.get_non_empty(KEY_STARS) {
            let ids: Vec<String> = split_list(stars)
                .map(|star| format!("{}_star", star))
                .collect();
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            state.filters.select_only(STAR_RATING_GROUP, &ids);
        }
        if let Some(prices) = query.get_non_empty(KEY_PRICE) {
            let ids: Vec<&str> = split_list(prices).collect();
            state.filters.select_only(PRICE_RANGE_GROUP, &ids);
        }

        state.sort = SortOption::from_params(
            query.get_non_empty(KEY_SORT_BY),
            query.get_non_empty(KEY_SORT_DIRECTION),
        );

        state.page = query
            .get_non_empty(KEY_PAGE)
            .and_then(|v| v.parse::<u32>().ok())
            .map(|api_page| api_page.saturating_add(1))
            .unwrap_or(1);

        state.query = query;
        state
    }

    /// Query keys this state does not own, untouched
    pub fn foreign_pairs(&self) -> Vec<(String, String)> {
        self.query
            .pairs()
            .iter()
            .filter(|(key, _)| !OWNED_KEYS.contains(&key.as_str()))
            .cloned()
            .collect()
    }

    /// Canonical query string for the current state
    pub fn to_query(&self) -> QueryString {
        let mut query = self.query.clone();

        set_or_remove(&mut query, KEY_CITY, Some(self.city.trim().to_string()));
        set_or_remove(
            &mut query,
            KEY_NUM_GUESTS,
            self.num_guests.map(|n| n.to_string()),
        );
        set_or_remove(
            &mut query,
            KEY_CHECK_IN,
            self.check_in.map(|d| d.format(DATE_FORMAT).to_string()),
        );
        set_or_remove(
            &mut query,
            KEY_CHECK_OUT,
            self.check_out.map(|d| d.format(DATE_FORMAT).to_string()),
        );

        let stars = self
            .filters
            .selected_stars()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        set_or_remove(&mut query, KEY_STARS, Some(stars));
        set_or_remove(
            &mut query,
            KEY_PRICE,
            Some(self.filters.selected_ids(PRICE_RANGE_GROUP).join(",")),
        );

        match self.sort.sort_params() {
            Some((sort_by, direction)) => {
                query.set(KEY_SORT_BY, sort_by);
                query.set(KEY_SORT_DIRECTION, direction.as_str());
            }
            None => {
                query.remove(KEY_SORT_BY);
                query.remove(KEY_SORT_DIRECTION);
            }
        }

        let api_page = self.page.saturating_sub(1);
        set_or_remove(
            &mut query,
            KEY_PAGE,
            Some(api_page).filter(|p| *p > 0).map(|p| p.to_string()),
        );

        query
    }

    /// Remember the query just written so later rewrites start from it
    pub(crate) fn commit_query(&mut self) -> QueryString {
        let query = self.to_query();
        self.query = query.clone();
        query
    }
}

fn set_or_remove(query: &mut QueryString, key: &str, value: Option<String>) {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => query.set(key, value),
        None => query.remove(key),
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|v| !v.is_empty())
}
