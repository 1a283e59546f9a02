use crate::models::{Category, GuestType, Listing};
use crate::search::types::FilterCriteria;

/// Hard AND-filter: a listing is included only when every active
/// criterion passes. Invalid input on a single criterion degrades
/// that criterion to "no constraint" rather than failing the search.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    matches_query(listing, &criteria.query)
        && matches_area(listing, criteria.area.as_deref())
        && matches_price(listing, criteria.max_price)
        && matches_category(listing, criteria.category)
        && matches_guest_type(listing, criteria.guest_type)
        && matches_amenities(listing, &criteria.amenities)
}

/// Case-insensitive substring match against title or area name.
fn matches_query(listing: &Listing, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    listing.title.to_lowercase().contains(&query)
        || listing.location.to_lowercase().contains(&query)
}

fn matches_area(listing: &Listing, area: Option<&str>) -> bool {
    match area {
        None => true,
        Some(area) => listing.location == area,
    }
}

fn matches_price(listing: &Listing, max_price: i64) -> bool {
    // A negative ceiling is stale UI input, not a constraint.
    if max_price < 0 {
        return true;
    }
    listing.price_value <= max_price
}

fn matches_category(listing: &Listing, selected: Option<Category>) -> bool {
    match selected {
        None => true,
        Some(category) => listing.category == category,
    }
}

/// Asymmetric on purpose: only the listing's own `Any` is a wildcard.
/// A listing restricted to one guest type never matches a different
/// selection.
fn matches_guest_type(listing: &Listing, selected: Option<GuestType>) -> bool {
    match selected {
        None => true,
        Some(selected) => {
            listing.allowed_guest == GuestType::Any || listing.allowed_guest == selected
        }
    }
}

fn matches_amenities(listing: &Listing, selected: &[String]) -> bool {
    selected.iter().all(|amenity| listing.amenities.contains(amenity))
}
