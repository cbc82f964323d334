use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Sort choices offered above the result list
///
/// Every option but `Default` maps to a `(sortBy, sortDirection)` pair
/// sent to the filter endpoint; `Default` sends neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    #[default]
    Default,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::Default,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
    ];

    /// Value used by the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceLowToHigh => "priceLowToHigh",
            SortOption::PriceHighToLow => "priceHighToLow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Sort by",
            SortOption::PriceLowToHigh => "Price: low to high",
            SortOption::PriceHighToLow => "Price: high to low",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }

    pub fn sort_params(&self) -> Option<(&'static str, SortDirection)> {
        match self {
            SortOption::Default => None,
            SortOption::PriceLowToHigh => Some(("price", SortDirection::Asc)),
            SortOption::PriceHighToLow => Some(("price", SortDirection::Desc)),
        }
    }

    /// Inverse of `sort_params`; unrecognised pairs fall back to `Default`
    pub fn from_params(sort_by: Option<&str>, direction: Option<&str>) -> Self {
        let (Some(sort_by), Some(direction)) = (sort_by, direction.and_then(SortDirection::parse))
        else {
            return SortOption::Default;
        };

        Self::ALL
            .into_iter()
            .find(|option| option.sort_params() == Some((sort_by, direction)))
            .unwrap_or_default()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_params() {
        assert_eq!(SortOption::Default.sort_params(), None);
        assert_eq!(
            SortOption::PriceLowToHigh.sort_params(),
            Some(("price", SortDirection::Asc))
        );
        assert_eq!(
            SortOption::PriceHighToLow.sort_params(),
            Some(("price", SortDirection::Desc))
        );
    }

    #[test]
    fn test_from_params() {
        assert_eq!(
            SortOption::from_params(Some("price"), Some("DESC")),
            SortOption::PriceHighToLow
        );
        assert_eq!(
            SortOption::from_params(Some("rating"), Some("desc")),
            SortOption::Default
        );
        assert_eq!(SortOption::from_params(Some("price"), None), SortOption::Default);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            SortOption::from_value("priceLowToHigh"),
            Some(SortOption::PriceLowToHigh)
        );
        assert_eq!(SortOption::from_value("bogus"), None);
    }
}
