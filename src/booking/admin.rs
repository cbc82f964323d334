use crate::models::{Booking, Hotel, PaymentStatus};
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

pub const ADMIN_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingSort {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl BookingSort {
    pub const ALL: [BookingSort; 5] = [
        BookingSort::Default,
        BookingSort::PriceAsc,
        BookingSort::PriceDesc,
        BookingSort::DateAsc,
        BookingSort::DateDesc,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BookingSort::Default => "default",
            BookingSort::PriceAsc => "price-asc",
            BookingSort::PriceDesc => "price-desc",
            BookingSort::DateAsc => "date-asc",
            BookingSort::DateDesc => "date-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingSort::Default => "Default order",
            BookingSort::PriceAsc => "Price: low to high",
            BookingSort::PriceDesc => "Price: high to low",
            BookingSort::DateAsc => "Check-in: earliest",
            BookingSort::DateDesc => "Check-in: latest",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == value)
            .unwrap_or_default()
    }

    fn compare(&self, a: &Booking, b: &Booking) -> Ordering {
        match self {
            BookingSort::Default => Ordering::Equal,
            BookingSort::PriceAsc => a.amount().total_cmp(&b.amount()),
            BookingSort::PriceDesc => b.amount().total_cmp(&a.amount()),
            BookingSort::DateAsc => a.check_in_date.cmp(&b.check_in_date),
            BookingSort::DateDesc => b.check_in_date.cmp(&a.check_in_date),
        }
    }
}

/// Per-tab filter; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabFilter {
    pub customer: String,
    pub email: String,
    /// Minimum total amount
    pub min_price: Option<f64>,
    /// Check-in strictly inside `(start, end)`
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl TabFilter {
    /// Build from the raw filter inputs; blank or unparsable price and
    /// dates leave that criterion off, and a range needs both ends
    pub fn from_inputs(customer: &str, email: &str, min_price: &str, start: &str, end: &str) -> Self {
        let min_price = min_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite());
        let parse_date = |value: &str| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
        let date_range = parse_date(start).zip(parse_date(end));

        Self {
            customer: customer.to_string(),
            email: email.to_string(),
            min_price,
            date_range,
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        let customer = self.customer.trim().to_lowercase();
        if !customer.is_empty()
            && !booking
                .display_guest_name()
                .to_lowercase()
                .contains(&customer)
        {
            return false;
        }

        let email = self.email.trim().to_lowercase();
        if !email.is_empty() {
            let guest_email = booking.guest_email.as_deref().unwrap_or_default();
            if !guest_email.to_lowercase().contains(&email) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if booking.amount() < min {
                return false;
            }
        }

        if let Some((start, end)) = self.date_range {
            match booking.check_in_date {
                Some(check_in) if check_in > start && check_in < end => {}
                _ => return false,
            }
        }

        true
    }
}

/// One status tab of the admin booking table
#[derive(Debug, Clone, PartialEq)]
pub struct BookingTab {
    pub status: PaymentStatus,
    bookings: Vec<Booking>,
    filter: TabFilter,
    sort: BookingSort,
    page: usize,
}

impl BookingTab {
    fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            bookings: Vec::new(),
            filter: TabFilter::default(),
            sort: BookingSort::Default,
            page: 1,
        }
    }

    pub fn filter(&self) -> &TabFilter {
        &self.filter
    }

    pub fn sort(&self) -> BookingSort {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Filtered then sorted, across all pages
    pub fn visible(&self) -> Vec<&Booking> {
        let mut rows: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| self.filter.matches(b))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    pub fn total_pages(&self) -> usize {
        self.visible().len().div_ceil(ADMIN_PAGE_SIZE).max(1)
    }

    pub fn page_rows(&self) -> Vec<&Booking> {
        self.visible()
            .into_iter()
            .skip((self.page - 1) * ADMIN_PAGE_SIZE)
            .take(ADMIN_PAGE_SIZE)
            .collect()
    }

    /// Replace the filter and go back to the first page
    pub fn set_filter(&mut self, filter: TabFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: BookingSort) {
        self.sort = sort;
    }

    pub fn change_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }
}

/// Admin bookings grouped into one tab per payment status
#[derive(Debug, Clone, PartialEq)]
pub struct BookingTabs {
    tabs: Vec<BookingTab>,
}

impl Default for BookingTabs {
    fn default() -> Self {
        Self {
            tabs: PaymentStatus::ALL.into_iter().map(BookingTab::new).collect(),
        }
    }
}

impl BookingTabs {
    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        let mut tabs = Self::default();
        tabs.replace_bookings(bookings);
        tabs
    }

    /// Regroup after a reload; filters and sort survive, pages are clamped
    pub fn replace_bookings(&mut self, bookings: Vec<Booking>) {
        for tab in self.tabs.iter_mut() {
            tab.bookings.clear();
        }
        for booking in bookings {
            if let Some(tab) = self
                .tabs
                .iter_mut()
                .find(|t| t.status == booking.payment_status)
            {
                tab.bookings.push(booking);
            }
        }
        for tab in self.tabs.iter_mut() {
            tab.page = tab.page.min(tab.total_pages());
            debug!("{} bookings in tab {}", tab.bookings.len(), tab.status);
        }
    }

    pub fn tabs(&self) -> &[BookingTab] {
        &self.tabs
    }

    pub fn tab(&self, status: PaymentStatus) -> Option<&BookingTab> {
        self.tabs.iter().find(|t| t.status == status)
    }

    pub fn tab_mut(&mut self, status: PaymentStatus) -> Option<&mut BookingTab> {
        self.tabs.iter_mut().find(|t| t.status == status)
    }
}

/// Headline figures on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_bookings: usize,
    pub total_revenue: f64,
    pub total_hotels: usize,
    /// Mean of the rated hotels, one decimal
    pub average_rating: f64,
    /// Share of PAID bookings, rounded percent
    pub success_rate: u32,
}

impl DashboardSummary {
    pub fn compute(bookings: &[Booking], hotels: &[Hotel]) -> Self {
        let total_bookings = bookings.len();
        let total_revenue = bookings.iter().map(Booking::amount).sum();

        let ratings: Vec<f64> = hotels
            .iter()
            .map(|h| h.ratings)
            .filter(|r| *r > 0.0)
            .collect();
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let paid = bookings
            .iter()
            .filter(|b| b.payment_status == PaymentStatus::Paid)
            .count();
        let success_rate = if total_bookings == 0 {
            0
        } else {
            ((paid as f64 / total_bookings as f64) * 100.0).round() as u32
        };

        Self {
            total_bookings,
            total_revenue,
            total_hotels: hotels.len(),
            average_rating,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: i64, status: PaymentStatus, amount: f64, name: &str, day: u32) -> Booking {
        Booking {
            booking_id: id,
            payment_status: status,
            total_amount: Some(amount),
            guest_full_name: Some(name.to_string()),
            guest_email: Some(format!("{}@example.com", name.to_lowercase())),
            check_in_date: NaiveDate::from_ymd_opt(2025, 4, day),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking(1, PaymentStatus::Paid, 300.0, "An", 3),
            booking(2, PaymentStatus::Pending, 100.0, "Binh", 5),
            booking(3, PaymentStatus::Paid, 200.0, "Chi", 1),
            booking(4, PaymentStatus::Canceled, 50.0, "Dung", 2),
        ]
    }

    #[test]
    fn test_filter_from_inputs() {
        let filter = TabFilter::from_inputs("an", "", " 150 ", "2025-04-01", "");
        assert_eq!(filter.min_price, Some(150.0));
        assert_eq!(filter.date_range, None);

        let filter = TabFilter::from_inputs("", "", "abc", "2025-04-01", "2025-04-04");
        assert_eq!(filter.min_price, None);
        assert_eq!(
            filter.date_range,
            NaiveDate::from_ymd_opt(2025, 4, 1).zip(NaiveDate::from_ymd_opt(2025, 4, 4))
        );
    }

    #[test]
    fn test_grouping_by_status() {
        let tabs = BookingTabs::from_bookings(sample());
        assert_eq!(tabs.tabs().len(), 3);
        assert_eq!(tabs.tab(PaymentStatus::Paid).unwrap().len(), 2);
        assert_eq!(tabs.tab(PaymentStatus::Pending).unwrap().len(), 1);
        assert_eq!(tabs.tab(PaymentStatus::Canceled).unwrap().len(), 1);
    }

    #[test]
    fn test_tab_sort_and_filter() {
        let mut tabs = BookingTabs::from_bookings(sample());
        let paid = tabs.tab_mut(PaymentStatus::Paid).unwrap();

        paid.set_sort(BookingSort::PriceAsc);
        let ids: Vec<i64> = paid.visible().iter().map(|b| b.booking_id).collect();
        assert_eq!(ids, vec![3, 1]);

        paid.set_sort(BookingSort::DateDesc);
        let ids: Vec<i64> = paid.visible().iter().map(|b| b.booking_id).collect();
        assert_eq!(ids, vec![1, 3]);

        paid.set_filter(TabFilter {
            customer: "an".to_string(),
            ..Default::default()
        });
        assert_eq!(paid.visible().len(), 1);

        paid.set_filter(TabFilter {
            min_price: Some(250.0),
            ..Default::default()
        });
        assert_eq!(paid.visible()[0].booking_id, 1);

        paid.set_filter(TabFilter {
            date_range: Some((
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 4).unwrap(),
            )),
            ..Default::default()
        });
        let ids: Vec<i64> = paid.visible().iter().map(|b| b.booking_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_tab_pages_of_five() {
        let bookings: Vec<Booking> = (1..=12)
            .map(|id| booking(id, PaymentStatus::Pending, 10.0 * id as f64, "Guest", 1))
            .collect();
        let mut tabs = BookingTabs::from_bookings(bookings);
        let pending = tabs.tab_mut(PaymentStatus::Pending).unwrap();

        assert_eq!(pending.total_pages(), 3);
        assert!(pending.change_page(3));
        assert_eq!(pending.page_rows().len(), 2);
        assert!(!pending.change_page(4));

        pending.set_filter(TabFilter {
            email: "nobody".to_string(),
            ..Default::default()
        });
        assert_eq!(pending.page(), 1);
        assert!(pending.page_rows().is_empty());
    }

    #[test]
    fn test_dashboard_summary() {
        let hotels = vec![
            Hotel {
                ratings: 4.0,
                ..Default::default()
            },
            Hotel {
                ratings: 4.5,
                ..Default::default()
            },
            Hotel::default(),
        ];
        let summary = DashboardSummary::compute(&sample(), &hotels);
        assert_eq!(summary.total_bookings, 4);
        assert_eq!(summary.total_revenue, 650.0);
        assert_eq!(summary.total_hotels, 3);
        assert_eq!(summary.average_rating, 4.3);
        assert_eq!(summary.success_rate, 50);

        let empty = DashboardSummary::compute(&[], &[]);
        assert_eq!(empty.success_rate, 0);
        assert_eq!(empty.average_rating, 0.0);
    }
}
