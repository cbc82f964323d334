use crate::search::{city_suggestions, SearchFilterState};
use chrono::NaiveDate;
use dioxus::prelude::*;

/// What the search box submits
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSubmit {
    pub city: String,
    pub num_guests: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl From<&SearchFilterState> for SearchSubmit {
    fn from(state: &SearchFilterState) -> Self {
        Self {
            city: state.city.clone(),
            num_guests: state.num_guests,
            check_in: state.check_in,
            check_out: state.check_out,
        }
    }
}

impl SearchSubmit {
    /// Changes whenever any field does; used to remount the search box so
    /// its inputs follow the route
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.city,
            self.num_guests.map(|n| n.to_string()).unwrap_or_default(),
            date_value(self.check_in),
            date_value(self.check_out)
        )
    }
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[component]
pub fn SearchBox(initial: SearchSubmit, on_submit: EventHandler<SearchSubmit>) -> Element {
    let mut city = use_signal(|| initial.city.clone());
    let mut guests = use_signal(|| initial.num_guests.map(|n| n.to_string()).unwrap_or_default());
    let mut check_in = use_signal(|| initial.check_in);
    let mut check_out = use_signal(|| initial.check_out);
    let mut date_error = use_signal(|| None::<String>);
    let suggestions = city_suggestions(&city.read());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let (Some(start), Some(end)) = (check_in(), check_out()) {
            if end <= start {
                date_error.set(Some("Check-out must be after check-in".to_string()));
                return;
            }
        }
        date_error.set(None);
        on_submit.call(SearchSubmit {
            city: city().trim().to_string(),
            num_guests: guests().trim().parse::<u32>().ok().filter(|n| *n > 0),
            check_in: check_in(),
            check_out: check_out(),
        });
    };

    rsx! {
        form {
            class: "bg-white rounded-xl shadow p-4 grid grid-cols-1 md:grid-cols-5 gap-3",
            onsubmit: submit,
            div { class: "relative md:col-span-2",
                input {
                    class: "w-full border border-gray-300 rounded-lg px-3 py-2",
                    placeholder: "Where are you going?",
                    value: "{city}",
                    oninput: move |evt| city.set(evt.value()),
                }
                if !suggestions.is_empty() {
                    ul { class: "absolute z-10 mt-1 w-full bg-white border border-gray-200 rounded-lg shadow text-gray-800",
                        for suggestion in suggestions {
                            li {
                                key: "{suggestion}",
                                class: "px-3 py-2 cursor-pointer hover:bg-indigo-50",
                                onclick: move |_| city.set(suggestion.to_string()),
                                "{suggestion}"
                            }
                        }
                    }
                }
            }
            input {
                class: "border border-gray-300 rounded-lg px-3 py-2",
                r#type: "date",
                value: "{date_value(check_in())}",
                oninput: move |evt| check_in.set(parse_date(&evt.value())),
            }
            input {
                class: "border border-gray-300 rounded-lg px-3 py-2",
                r#type: "date",
                value: "{date_value(check_out())}",
                oninput: move |evt| check_out.set(parse_date(&evt.value())),
            }
            div { class: "flex gap-2",
                input {
                    class: "border border-gray-300 rounded-lg px-3 py-2 w-24",
                    r#type: "number",
                    min: "1",
                    placeholder: "Guests",
                    value: "{guests}",
                    oninput: move |evt| guests.set(evt.value()),
                }
                button {
                    class: "flex-1 bg-indigo-600 text-white rounded-lg px-4 py-2 hover:bg-indigo-700",
                    r#type: "submit",
                    "Search"
                }
            }
            if let Some(message) = date_error() {
                p { class: "text-sm text-red-600 md:col-span-5", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchController;

    #[test]
    fn test_submit_follows_reconciled_route() {
        let mut controller = SearchController::from_query("city=Hanoi&numGuests=2", 10);
        let before = SearchSubmit::from(controller.state());
        assert_eq!(before.city, "Hanoi");

        assert!(controller.reconcile("city=Hue&numGuests=4&checkIn=2025-07-01"));
        let after = SearchSubmit::from(controller.state());
        assert_eq!(after.city, "Hue");
        assert_eq!(after.num_guests, Some(4));
        assert_eq!(after.check_in, NaiveDate::from_ymd_opt(2025, 7, 1));
        assert_eq!(after.check_out, None);
        assert_ne!(after.key(), before.key());
    }

    #[test]
    fn test_key_is_stable_for_same_values() {
        let controller = SearchController::from_query("city=Hue&stars=5", 10);
        let submit = SearchSubmit::from(controller.state());
        assert_eq!(submit.key(), SearchSubmit::from(controller.state()).key());
        assert_eq!(submit.key(), "Hue|||");
    }
}
