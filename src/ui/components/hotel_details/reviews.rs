use crate::models::{Review, ReviewSummary};
use crate::search::PageWindow;
use crate::ui::use_api;
use chrono::Utc;
use dioxus::prelude::*;
use tracing::{info, warn};

use super::super::auth_context::use_auth;
use super::super::rating::StarRating;
use super::super::toast::use_toast;

const REVIEWS_PAGE_SIZE: usize = 5;

#[component]
pub fn ReviewsSection(hotel_id: ReadSignal<i64>) -> Element {
    let api = use_api();
    let mut page = use_signal(|| 1u32);
    let mut reload = use_signal(|| 0u32);

    let reviews = use_resource(move || {
        let api = api.clone();
        let hotel_id = hotel_id();
        let _ = reload();
        // The backend answers with every review; paging happens here
        async move { api.get_reviews(hotel_id, 1).await }
    });

    let body = match reviews.value().read().as_ref() {
        None => rsx! {
            p { class: "text-gray-500", "Loading reviews..." }
        },
        Some(Err(e)) => rsx! {
            p { class: "text-red-600", "Could not load reviews: {e}" }
        },
        Some(Ok(list)) => {
            let summary = ReviewSummary::from_reviews(list);
            let total_pages = list.len().div_ceil(REVIEWS_PAGE_SIZE).max(1) as u32;
            let window = PageWindow::new(page(), total_pages);
            let shown: Vec<Review> = list
                .iter()
                .skip((window.current as usize - 1) * REVIEWS_PAGE_SIZE)
                .take(REVIEWS_PAGE_SIZE)
                .cloned()
                .collect();
            rsx! {
                SummaryBars { summary }
                if shown.is_empty() {
                    p { class: "text-gray-500", "No reviews yet" }
                }
                for (index, review) in shown.into_iter().enumerate() {
                    ReviewItem { key: "{index}", review }
                }
                if window.total > 1 {
                    div { class: "flex gap-2 justify-center mt-4",
                        for n in window.pages() {
                            button {
                                key: "{n}",
                                class: if n == window.current { "px-3 py-1 rounded bg-indigo-600 text-white" } else { "px-3 py-1 rounded border" },
                                onclick: move |_| page.set(n),
                                "{n}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "p-6 border-t border-gray-100",
            h2 { class: "text-2xl font-semibold mb-4", "Guest reviews" }
            {body}
            ReviewForm {
                hotel_id: hotel_id(),
                on_posted: move |_| {
                    page.set(1);
                    reload.set(reload() + 1);
                },
            }
        }
    }
}

#[component]
fn SummaryBars(summary: ReviewSummary) -> Element {
    let total = summary.total_reviews.max(1);
    rsx! {
        div { class: "flex gap-8 mb-6",
            div { class: "text-center",
                div { class: "text-4xl font-bold", "{summary.average_rating:.1}" }
                StarRating { rating: summary.average_rating }
                div { class: "text-sm text-gray-500", "{summary.total_reviews} reviews" }
            }
            div { class: "flex-1 space-y-1",
                for (stars, count) in summary.star_counts.iter().rev().map(|(s, c)| (*s, *c)) {
                    div { key: "{stars}", class: "flex items-center gap-2 text-sm",
                        span { class: "w-12", "{stars} ★" }
                        div { class: "flex-1 h-2 bg-gray-200 rounded",
                            div {
                                class: "h-2 bg-yellow-400 rounded",
                                width: "{count * 100 / total}%",
                            }
                        }
                        span { class: "w-8 text-right", "{count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review) -> Element {
    rsx! {
        article { class: "border-b border-gray-100 py-4",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    span { class: "font-semibold", "{review.reviewer_name}" }
                    if review.verified {
                        span { class: "text-xs bg-green-100 text-green-700 px-2 rounded", "Verified stay" }
                    }
                }
                StarRating { rating: review.rating as f64 }
            }
            p { class: "text-gray-700 mt-2", "{review.review}" }
            p { class: "text-xs text-gray-400 mt-1", "{review.stay_date}" }
        }
    }
}

#[component]
fn ReviewForm(hotel_id: i64, on_posted: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut rating = use_signal(|| 0u8);
    let mut text = use_signal(String::new);
    let mut is_posting = use_signal(|| false);

    let reviewer_name = auth
        .user
        .read()
        .as_ref()
        .map(|u| u.full_name())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Anonymous".to_string());
    let verified = *auth.is_authenticated.read();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if rating() == 0 || text().trim().is_empty() {
            toast.error("Please choose a star rating and write your review");
            return;
        }

        let review = Review {
            reviewer_name: reviewer_name.clone(),
            rating: rating(),
            review: text().trim().to_string(),
            stay_date: Utc::now().to_rfc3339(),
            verified,
        };
        let api = api.clone();
        spawn(async move {
            is_posting.set(true);
            match api.post_review(hotel_id, &review).await {
                Ok(_) => {
                    info!("Review posted for hotel {}", hotel_id);
                    toast.success("Thanks, your review has been posted");
                    rating.set(0);
                    text.set(String::new());
                    on_posted.call(());
                }
                Err(e) => {
                    warn!("Failed to post review: {}", e);
                    toast.error(format!("Could not post review: {}", e));
                }
            }
            is_posting.set(false);
        });
    };

    rsx! {
        form { class: "mt-6 space-y-3", onsubmit: submit,
            h3 { class: "text-lg font-semibold", "Write a review" }
            div { class: "flex gap-1 text-2xl",
                for star in 1..=5u8 {
                    button {
                        key: "{star}",
                        r#type: "button",
                        class: "text-yellow-400",
                        onclick: move |_| rating.set(star),
                        if star <= rating() { "★" } else { "☆" }
                    }
                }
            }
            textarea {
                class: "w-full border border-gray-300 rounded-lg p-3",
                rows: "4",
                placeholder: "How was your stay?",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            button {
                class: "px-4 py-2 bg-indigo-600 text-white rounded-lg disabled:opacity-50",
                r#type: "submit",
                disabled: is_posting(),
                if is_posting() { "Posting..." } else { "Post review" }
            }
        }
    }
}
