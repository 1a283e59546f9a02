use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Property category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Villa,
    Apartment,
    #[serde(rename = "PG")]
    Pg,
    Hostel,
    Cottage,
}

/// Which guests a listing accepts. `Any` on a listing is a wildcard;
/// a restricted listing only matches its own guest type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestType {
    Any,
    Family,
    Male,
    Female,
}

/// Moderation state of a user-submitted listing. Built-in catalog
/// records carry no status on the wire; a missing field reads as
/// `Approved`, so nothing downstream ever branches on absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityStatus {
    #[default]
    Approved,
    Pending,
    Rejected,
}

/// Contact details of the person offering a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOwner {
    pub name: String,
    pub contact: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Core listing data model. Field names serialize camelCase to match
/// the stored JSON produced by the upload/moderation collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Free-text area name, e.g. "Nehrunagar"
    pub location: String,
    pub category: Category,
    pub allowed_guest: GuestType,
    /// Pre-formatted display price, e.g. "₹8,500"
    pub price: String,
    /// Numeric monthly rent used for filtering and sorting
    pub price_value: i64,
    pub rating: f32,
    pub main_image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub status: VisibilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ListingOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Guest review attached to a built-in listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub listing_id: String,
    pub user_name: String,
    pub rating: f32,
    pub date: String,
    pub comment: String,
}
