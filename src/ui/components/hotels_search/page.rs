use crate::api::HotelListing;
use crate::config::use_config;
use crate::search::{SearchController, SortOption};
use crate::ui::{use_api, Route, SearchQuery};
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use super::super::search_box::{SearchBox, SearchSubmit};
use super::super::toast::use_toast;
use super::filters_panel::FiltersPanel;
use super::hotel_card::HotelCard;
use super::pagination_bar::PaginationBar;

/// Search results with filters, sort and pagination, all mirrored in the
/// route's query string
#[component]
pub fn HotelsSearch(query: ReadSignal<SearchQuery>) -> Element {
    let config = use_config();
    let api = use_api();
    let toast = use_toast();
    let navigator = use_navigator();

    let mut controller =
        use_signal(|| SearchController::from_query(query.peek().as_str(), config.page_size));
    let mut in_flight = use_signal(|| None::<Task>);

    // Back/forward and links land here with a new query
    use_effect(move || {
        let raw = query.read().to_string();
        controller.write().reconcile(&raw);
    });

    use_effect(move || {
        if !controller.read().needs_fetch() {
            return;
        }

        let (ticket, request) = controller.write().begin_fetch();
        if let Some(previous) = in_flight.write().take() {
            debug!("Cancelling superseded hotel search");
            previous.cancel();
        }

        let api = api.clone();
        let task = spawn(async move {
            let result = api.fetch_listing(&request).await;
            let corrected_query = {
                let mut controller = controller.write();
                if !controller.finish_fetch(ticket, result) {
                    return;
                }
                if let Some(message) = controller.results().errors.first() {
                    toast.error(message.clone());
                }
                controller
                    .take_page_correction()
                    .then(|| controller.query_string())
            };
            if let Some(query) = corrected_query {
                navigator.replace(Route::HotelsSearch {
                    query: SearchQuery(query),
                });
            }
        });
        in_flight.set(Some(task));
    });

    let push_query = move || {
        let query = controller.peek().query_string();
        navigator.push(Route::HotelsSearch {
            query: SearchQuery(query),
        });
    };

    let on_search = move |submit: SearchSubmit| {
        controller.write().submit_search(
            &submit.city,
            submit.num_guests,
            submit.check_in,
            submit.check_out,
        );
        push_query();
    };

    let on_toggle = move |(group_id, filter_id): (String, String)| {
        if controller.write().update_filter(&group_id, &filter_id) {
            push_query();
        }
    };

    let on_clear = move |_| {
        if controller.write().clear_filters() {
            push_query();
        }
    };

    let on_sort = move |evt: FormEvent| {
        let option = SortOption::from_value(&evt.value()).unwrap_or_default();
        if controller.write().update_sort(option) {
            push_query();
        }
    };

    let on_page = move |page: u32| {
        if controller.write().change_page(page) {
            push_query();
        }
    };

    let snapshot = controller.read();
    let state = snapshot.state();
    let results = snapshot.results();
    let initial = SearchSubmit::from(state);
    let search_key = initial.key();
    let groups = state.filters.groups().to_vec();
    let sort_value = state.sort.value();
    let window = snapshot.page_window();
    let total_elements = results.pagination.map(|p| p.total_elements).unwrap_or(0);
    let hotels = results.data.clone();
    let is_loading = results.is_loading;
    let has_errors = results.has_errors();

    rsx! {
        div { class: "container mx-auto px-6 py-8",
            SearchBox { key: "{search_key}", initial, on_submit: on_search }

            div { class: "grid grid-cols-1 md:grid-cols-4 gap-6 mt-8",
                aside { class: "md:col-span-1",
                    FiltersPanel { groups, on_toggle, on_clear }
                }
                section { class: "md:col-span-3",
                    div { class: "flex items-center justify-between mb-4",
                        p { class: "text-gray-600",
                            if is_loading {
                                "Searching..."
                            } else {
                                "{total_elements} hotels found"
                            }
                        }
                        select {
                            class: "border border-gray-300 rounded-lg px-3 py-2",
                            value: sort_value,
                            onchange: on_sort,
                            for sort in SortOption::ALL {
                                option {
                                    key: "{sort.value()}",
                                    value: sort.value(),
                                    selected: sort.value() == sort_value,
                                    "{sort.label()}"
                                }
                            }
                        }
                    }

                    if is_loading && hotels.is_empty() {
                        div { class: "text-center text-gray-500 py-12", "Loading hotels..." }
                    } else if hotels.is_empty() && !has_errors {
                        div { class: "text-center text-gray-500 py-12", "No hotels match your search" }
                    } else {
                        div { class: "space-y-4",
                            for hotel in hotels {
                                HotelCard { key: "{hotel.hotel_id}", hotel }
                            }
                        }
                    }

                    PaginationBar { window, on_change: on_page }
                }
            }
        }
    }
}
