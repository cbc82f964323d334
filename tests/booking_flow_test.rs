mod support;

use chrono::NaiveDate;
use hotelhub::booking::{
    BookingForm, BookingSort, BookingTabs, DashboardSummary, PaymentForm, RoomType, TabFilter,
};
use hotelhub::format::format_price;
use hotelhub::models::{Booking, Hotel, PaymentStatus, UserProfile};
use serde_json::json;
use support::tracing_init;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_details_card_to_payment_body() {
    tracing_init();

    let guest = UserProfile {
        first_name: "Minh".to_string(),
        last_name: "Tran".to_string(),
        email: "minh@example.com".to_string(),
        ..Default::default()
    };

    let mut form = BookingForm::new(42);
    form.check_in = Some(date(2025, 6, 10));
    form.check_out = Some(date(2025, 6, 13));
    form.rooms = 2;
    form.room_type = RoomType::Deluxe;

    let quote = form.quote(1_000_000.0);
    assert_eq!(quote.nights, 3);
    assert_eq!(quote.subtotal, 6_000_000.0);
    assert_eq!(quote.tax, 480_000.0);
    assert_eq!(format_price(quote.total), "6.480.000 VND");

    let request = form.to_request(Some(&guest)).unwrap();
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["guestFullName"], "Minh Tran");
    assert_eq!(body["roomType"], "Deluxe Room");
    assert_eq!(body["checkInDate"], "2025-06-10");
    assert_eq!(body["status"], "PENDING");

    let payment = PaymentForm {
        email: guest.email.clone(),
        name_on_card: "MINH TRAN".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiry: "09/27".to_string(),
        cvc: "123".to_string(),
        address: "1 Trang Tien".to_string(),
        city: "Hanoi".to_string(),
        state: "Hoan Kiem".to_string(),
        postal_code: "100000".to_string(),
    };
    let payment = payment.to_request(Some(77), quote.total).unwrap();
    let body = serde_json::to_value(&payment).unwrap();
    assert_eq!(body["bookingId"], 77);
    assert_eq!(body["cardNumber"], "4111111111111111");
    assert_eq!(body["currency"], "VND");
}

#[test]
fn test_admin_tabs_from_backend_payload() {
    tracing_init();

    let bookings: Vec<Booking> = serde_json::from_value(json!([
        { "bookingId": 1, "guestFullName": "An Nguyen", "guestEmail": "an@example.com",
          "checkInDate": "2025-04-03", "totalAmount": 3000000, "paymentStatus": "PAID" },
        { "bookingId": 2, "guestFullName": "Binh Le", "guestEmail": "binh@example.com",
          "checkInDate": "2025-04-05", "totalAmount": 1000000, "paymentStatus": "WAITING_PAYMENT" },
        { "bookingId": 3, "guestFullName": "Chi Vo", "guestEmail": "chi@example.com",
          "checkInDate": "2025-04-01", "totalAmount": 2000000, "paymentStatus": "PAID" },
        { "bookingId": 4, "guestFullName": "Dung Ho", "guestEmail": "dung@example.com",
          "checkInDate": "2025-04-02", "totalAmount": 500000, "paymentStatus": "CONFIRMED" },
        { "id": 5, "guestFullName": "Em Do", "totalAmount": 800000, "paymentStatus": "CANCELED" }
    ]))
    .unwrap();

    let mut tabs = BookingTabs::from_bookings(bookings.clone());
    assert_eq!(tabs.tab(PaymentStatus::Pending).unwrap().len(), 2);
    assert_eq!(tabs.tab(PaymentStatus::Paid).unwrap().len(), 2);
    assert_eq!(tabs.tab(PaymentStatus::Canceled).unwrap().len(), 1);

    let paid = tabs.tab_mut(PaymentStatus::Paid).unwrap();
    paid.set_sort(BookingSort::from_value("date-asc"));
    let order: Vec<i64> = paid.visible().iter().map(|b| b.booking_id).collect();
    assert_eq!(order, vec![3, 1]);

    paid.set_filter(TabFilter::from_inputs("", "AN@", "", "", ""));
    let matched: Vec<i64> = paid.visible().iter().map(|b| b.booking_id).collect();
    assert_eq!(matched, vec![1]);

    // A reload keeps the per-tab filter
    tabs.replace_bookings(bookings.clone());
    let paid = tabs.tab(PaymentStatus::Paid).unwrap();
    assert_eq!(paid.visible().len(), 1);
    assert_eq!(paid.sort(), BookingSort::DateAsc);

    let hotels = vec![
        Hotel {
            hotel_id: 1,
            ratings: 4.0,
            ..Default::default()
        },
        Hotel {
            hotel_id: 2,
            ratings: 0.0,
            ..Default::default()
        },
        Hotel {
            hotel_id: 3,
            ratings: 4.6,
            ..Default::default()
        },
    ];
    let summary = DashboardSummary::compute(&bookings, &hotels);
    assert_eq!(summary.total_bookings, 5);
    assert_eq!(summary.total_revenue, 7_300_000.0);
    assert_eq!(summary.total_hotels, 3);
    assert_eq!(summary.average_rating, 4.3);
    assert_eq!(summary.success_rate, 40);
}
