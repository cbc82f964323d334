/// A city card on the home page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    pub name: &'static str,
    pub image_url: &'static str,
}

pub const POPULAR_DESTINATIONS: [Destination; 5] = [
    Destination {
        name: "Hanoi",
        image_url: "https://imgcy.trivago.com/c_fill,d_dummy.jpeg,e_sharpen:60,f_auto,h_258,q_auto,w_258/categoryimages/68/08/68088_v59.jpeg",
    },
    Destination {
        name: "Da Nang",
        image_url: "https://images.unsplash.com/photo-1559592413-7cec4d0cae2b",
    },
    Destination {
        name: "Ho Chi Minh City",
        image_url: "https://images.unsplash.com/photo-1583417319070-4a69db38a482",
    },
    Destination {
        name: "Nha Trang",
        image_url: "https://imgcy.trivago.com/c_fill,d_dummy.jpeg,e_sharpen:60,f_auto,h_258,q_auto,w_258/categoryimages/68/09/68091_v72.jpeg",
    },
    Destination {
        name: "Da Lat",
        image_url: "https://images.unsplash.com/photo-1555921015-5532091f6026",
    },
];

/// Cities offered while typing in the search box
pub const AVAILABLE_CITIES: [&str; 8] = [
    "Hanoi",
    "Da Nang",
    "Ho Chi Minh City",
    "Nha Trang",
    "Da Lat",
    "Phu Quoc",
    "Hue",
    "Hoi An",
];

/// Cities containing `typed`, case-insensitively
///
/// Blank input and an exact match both yield nothing, so the list closes
/// once a suggestion has been picked.
pub fn city_suggestions(typed: &str) -> Vec<&'static str> {
    let typed = typed.trim().to_lowercase();
    if typed.is_empty() {
        return Vec::new();
    }

    let matches: Vec<&'static str> = AVAILABLE_CITIES
        .into_iter()
        .filter(|city| city.to_lowercase().contains(&typed))
        .collect();

    if matches.len() == 1 && matches[0].to_lowercase() == typed {
        return Vec::new();
    }
    matches
}
