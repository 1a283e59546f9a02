use crate::models::{Category, GuestType};
use serde::{Deserialize, Serialize};

/// Default price ceiling when no filter has been applied (₹/month).
pub const DEFAULT_MAX_PRICE: i64 = 20_000;

/// Active filter selections for a search session. `None` on an
/// optional field means "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query matched against title and area name
    pub query: String,
    /// Exact area name, or `None` for all areas
    pub area: Option<String>,
    /// Inclusive price ceiling; negative values mean "no constraint"
    pub max_price: i64,
    pub category: Option<Category>,
    pub guest_type: Option<GuestType>,
    /// Every selected amenity must be present on a listing
    pub amenities: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            area: None,
            max_price: DEFAULT_MAX_PRICE,
            category: None,
            guest_type: None,
            amenities: Vec::new(),
        }
    }
}

/// Sort order for results without a reference location. Proximity
/// ranking takes over whenever a reference location is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Rating,
    PriceAscending,
    PriceDescending,
}
