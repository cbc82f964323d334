use dioxus::prelude::*;

/// Five stars, filled up to the rounded rating
#[component]
pub fn StarRating(rating: f64) -> Element {
    let filled = rating.round().clamp(0.0, 5.0) as usize;

    rsx! {
        span { class: "text-yellow-400 whitespace-nowrap", title: "{rating:.1}",
            for i in 0..5 {
                span { key: "{i}", if i < filled { "★" } else { "☆" } }
            }
        }
    }
}
