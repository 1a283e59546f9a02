use crate::models::{Coordinates, Listing};
use crate::search::geo::distance_km;
use crate::search::types::SortKey;

/// A listing in ranked order, annotated with its distance from the
/// reference location when proximity ranking was used.
#[derive(Debug, Clone)]
pub struct RankedListing {
    pub listing: Listing,
    pub distance_km: Option<f64>,
}

/// Totally order the filtered listings.
///
/// A reference location overrides the sort key entirely: every listing
/// is decorated with its haversine distance and sorted nearest-first.
/// All sorts are stable, so ties keep repository order.
pub fn rank(
    listings: Vec<Listing>,
    reference: Option<Coordinates>,
    sort_key: SortKey,
) -> Vec<RankedListing> {
    if let Some(reference) = reference {
        let mut ranked: Vec<RankedListing> = listings
            .into_iter()
            .map(|listing| {
                let distance = distance_km(reference, listing.coordinates);
                RankedListing { listing, distance_km: Some(distance) }
            })
            .collect();
        ranked.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
        });
        return ranked;
    }

    let mut ranked: Vec<RankedListing> = listings
        .into_iter()
        .map(|listing| RankedListing { listing, distance_km: None })
        .collect();

    match sort_key {
        SortKey::Rating => {
            ranked.sort_by(|a, b| b.listing.rating.total_cmp(&a.listing.rating));
        }
        SortKey::PriceAscending => {
            ranked.sort_by(|a, b| a.listing.price_value.cmp(&b.listing.price_value));
        }
        SortKey::PriceDescending => {
            ranked.sort_by(|a, b| b.listing.price_value.cmp(&a.listing.price_value));
        }
    }

    ranked
}
