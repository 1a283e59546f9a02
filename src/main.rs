use std::sync::Arc;

use stay_scout::catalog::built_in_listings;
use stay_scout::models::Coordinates;
use stay_scout::search::{ListingRepository, SearchSession, SortKey};
use stay_scout::store::JsonFileStore;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Stay Scout - Puttur Rental Discovery");
    info!("========================================");

    let store = Arc::new(JsonFileStore::new("submitted_listings.json"));
    let repository = ListingRepository::new(built_in_listings(), store);
    let mut session = SearchSession::new(repository).await;

    info!("Searching stays under ₹10,000, cheapest first...");
    session.set_max_price(10_000).await;
    let token = session.set_sort_key(SortKey::PriceAscending).await;
    session.settle(token).await;

    print_page(&session);

    info!("Re-ranking by distance from Puttur town centre...");
    let token = session
        .set_reference_location(Some(Coordinates { lat: 12.7685, lng: 75.2023 }))
        .await;
    session.settle(token).await;

    print_page(&session);

    Ok(())
}

fn print_page(session: &SearchSession) {
    let page = session.visible_page();

    info!(
        "{} stays, page {}/{}",
        page.total_results, page.page_index, page.total_pages
    );

    for (i, ranked) in page.items.iter().enumerate() {
        let listing = &ranked.listing;
        println!("{}. {} ({})", i + 1, listing.title, listing.price);
        println!("   {} · {:?} · rated {}", listing.location, listing.category, listing.rating);
        if let Some(km) = ranked.distance_km {
            println!("   {:.1} km away", km);
        }
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!();
    }
}
