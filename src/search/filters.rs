use std::collections::BTreeSet;
use tracing::debug;

pub const STAR_RATING_GROUP: &str = "star_ratings";
pub const PRICE_RANGE_GROUP: &str = "price_range";

/// One checkbox in the filter sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub id: String,
    pub title: String,
    pub is_selected: bool,
}

/// A named set of checkboxes
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGroup {
    pub group_id: String,
    pub title: String,
    /// At most one option may be selected
    pub single_select: bool,
    pub filters: Vec<FilterOption>,
}

/// Price buckets in VND; `max` of `None` means no upper bound
const PRICE_BUCKETS: [(&str, &str, f64, Option<f64>); 4] = [
    ("under_500k", "Under 500.000 VND", 0.0, Some(500_000.0)),
    ("500k_1m", "500.000 - 1.000.000 VND", 500_000.0, Some(1_000_000.0)),
    ("1m_2m", "1.000.000 - 2.000.000 VND", 1_000_000.0, Some(2_000_000.0)),
    ("over_2m", "Over 2.000.000 VND", 2_000_000.0, None),
];

fn star_filter_id(stars: u8) -> String {
    format!("{}_star", stars)
}

fn star_value(filter_id: &str) -> Option<u8> {
    filter_id
        .strip_suffix("_star")
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=5).contains(n))
}

fn price_bucket(filter_id: &str) -> Option<(f64, Option<f64>)> {
    PRICE_BUCKETS
        .iter()
        .find(|(id, ..)| *id == filter_id)
        .map(|(_, _, min, max)| (*min, *max))
}

/// Selection pushed out of a single-select group by the last toggle
#[derive(Debug, Clone, PartialEq)]
struct Displaced {
    group_id: String,
    by: String,
    previous: String,
}

/// The filter sidebar: star ratings (any number) and one price bucket
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
    groups: Vec<FilterGroup>,
    displaced: Option<Displaced>,
}

impl Default for FilterSet {
    fn default() -> Self {
        let star_group = FilterGroup {
            group_id: STAR_RATING_GROUP.to_string(),
            title: "Star rating".to_string(),
            single_select: false,
            filters: (1..=5)
                .rev()
                .map(|stars| FilterOption {
                    id: star_filter_id(stars),
                    title: format!("{} star{}", stars, if stars > 1 { "s" } else { "" }),
                    is_selected: false,
                })
                .collect(),
        };

        let price_group = FilterGroup {
            group_id: PRICE_RANGE_GROUP.to_string(),
            title: "Price per night".to_string(),
            single_select: true,
            filters: PRICE_BUCKETS
                .iter()
                .map(|(id, title, ..)| FilterOption {
                    id: id.to_string(),
                    title: title.to_string(),
                    is_selected: false,
                })
                .collect(),
        };

        Self {
            groups: vec![star_group, price_group],
            displaced: None,
        }
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    /// Flip one filter; returns false when the group or filter is unknown
    ///
    /// Selecting in a single-select group replaces the current choice, and
    /// deselecting right after brings that choice back.
    pub fn toggle(&mut self, group_id: &str, filter_id: &str) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.group_id == group_id) else {
            debug!("Ignoring toggle of unknown filter {}/{}", group_id, filter_id);
            return false;
        };
        let Some(index) = group.filters.iter().position(|f| f.id == filter_id) else {
            debug!("Ignoring toggle of unknown filter {}/{}", group_id, filter_id);
            return false;
        };

        let displaced = self.displaced.take();
        let filter = &mut group.filters[index];
        filter.is_selected = !filter.is_selected;
        if !group.single_select {
            return true;
        }

        if group.filters[index].is_selected {
            let previous = group
                .filters
                .iter_mut()
                .enumerate()
                .filter(|(i, f)| *i != index && f.is_selected)
                .map(|(_, f)| {
                    f.is_selected = false;
                    f.id.clone()
                })
                .last();
            self.displaced = previous.map(|previous| Displaced {
                group_id: group_id.to_string(),
                by: filter_id.to_string(),
                previous,
            });
        } else if let Some(d) = displaced.filter(|d| d.group_id == group_id && d.by == filter_id) {
            if let Some(previous) = group.filters.iter_mut().find(|f| f.id == d.previous) {
                previous.is_selected = true;
            }
        }
        true
    }

    /// Deselect everything; returns whether anything was selected
    pub fn clear(&mut self) -> bool {
        self.displaced = None;
        let mut changed = false;
        for filter in self.groups.iter_mut().flat_map(|g| g.filters.iter_mut()) {
            changed |= filter.is_selected;
            filter.is_selected = false;
        }
        changed
    }

    /// Make exactly `ids` selected in `group_id`, ignoring unknown ids;
    /// a single-select group keeps the first known id
    pub fn select_only(&mut self, group_id: &str, ids: &[&str]) {
        self.displaced = None;
        if let Some(group) = self.groups.iter_mut().find(|g| g.group_id == group_id) {
            let ids: Vec<&str> = if group.single_select {
                ids.iter()
                    .copied()
                    .find(|id| group.filters.iter().any(|f| f.id == *id))
                    .into_iter()
                    .collect()
            } else {
                ids.to_vec()
            };
            for filter in group.filters.iter_mut() {
                filter.is_selected = ids.contains(&filter.id.as_str());
            }
        }
    }

    pub fn selected_ids(&self, group_id: &str) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.group_id == group_id)
            .flat_map(|g| g.filters.iter())
            .filter(|f| f.is_selected)
            .map(|f| f.id.as_str())
            .collect()
    }

    /// Every selected `(group_id, filter_id)` pair
    pub fn active_filters(&self) -> BTreeSet<(String, String)> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.filters
                    .iter()
                    .filter(|f| f.is_selected)
                    .map(move |f| (g.group_id.clone(), f.id.clone()))
            })
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.filters.iter())
            .filter(|f| f.is_selected)
            .count()
    }

    pub fn has_selection(&self) -> bool {
        self.selected_count() > 0
    }

    /// Selected star values, highest first
    pub fn selected_stars(&self) -> Vec<u8> {
        self.selected_ids(STAR_RATING_GROUP)
            .into_iter()
            .filter_map(star_value)
            .collect()
    }

    /// The selected price bucket as `(min, max)`
    pub fn price_range(&self) -> Option<(f64, Option<f64>)> {
        self.selected_ids(PRICE_RANGE_GROUP)
            .into_iter()
            .find_map(price_bucket)
    }
}
