use crate::models::{Category, Coordinates, GuestType};
use crate::search::filter;
use crate::search::paginate::{paginate, PAGE_SIZE};
use crate::search::ranking::{rank, RankedListing};
use crate::search::repository::ListingRepository;
use crate::search::types::{FilterCriteria, SortKey};
use std::time::Duration;
use tracing::debug;

/// How long the skeleton UI stays up after a filter change. Purely a
/// pacing delay; results are already committed when it starts.
pub const LOADING_DELAY: Duration = Duration::from_millis(800);

/// Session phase driving the skeleton-loading affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
}

/// Handle for one pending loading delay. Only the token issued by the
/// most recent state change may flip the session to `Ready`; stale
/// tokens are discarded, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// The current page plus result metadata for the presentation layer.
#[derive(Debug, Clone)]
pub struct VisiblePage {
    pub items: Vec<RankedListing>,
    pub total_results: usize,
    pub total_pages: usize,
    pub page_index: usize,
}

/// Orchestrates repository → filter → ranking → pagination and owns
/// all session-scoped search state. Every mutation recomputes the
/// ranked result set synchronously, so `visible_page` never reads
/// stale results regardless of pending loading delays.
pub struct SearchSession {
    repository: ListingRepository,
    criteria: FilterCriteria,
    sort_key: SortKey,
    reference: Option<Coordinates>,
    page_index: usize,
    phase: SessionPhase,
    generation: u64,
    ranked: Vec<RankedListing>,
}

impl SearchSession {
    pub async fn new(repository: ListingRepository) -> Self {
        let mut session = Self {
            repository,
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            reference: None,
            page_index: 1,
            phase: SessionPhase::Idle,
            generation: 0,
            ranked: Vec::new(),
        };
        session.recompute().await;
        session
    }

    pub async fn set_query(&mut self, query: impl Into<String>) -> LoadToken {
        self.criteria.query = query.into();
        self.begin_loading().await
    }

    pub async fn set_area(&mut self, area: Option<String>) -> LoadToken {
        self.criteria.area = area;
        self.begin_loading().await
    }

    pub async fn set_max_price(&mut self, max_price: i64) -> LoadToken {
        self.criteria.max_price = max_price;
        self.begin_loading().await
    }

    pub async fn set_category(&mut self, category: Option<Category>) -> LoadToken {
        self.criteria.category = category;
        self.begin_loading().await
    }

    pub async fn set_guest_type(&mut self, guest_type: Option<GuestType>) -> LoadToken {
        self.criteria.guest_type = guest_type;
        self.begin_loading().await
    }

    /// Add the amenity to the selection, or remove it if present.
    pub async fn toggle_amenity(&mut self, amenity: impl Into<String>) -> LoadToken {
        let amenity = amenity.into();
        if let Some(pos) = self.criteria.amenities.iter().position(|a| *a == amenity) {
            self.criteria.amenities.remove(pos);
        } else {
            self.criteria.amenities.push(amenity);
        }
        self.begin_loading().await
    }

    pub async fn set_sort_key(&mut self, sort_key: SortKey) -> LoadToken {
        self.sort_key = sort_key;
        self.begin_loading().await
    }

    /// Proximity ranking applies whenever a reference location is set,
    /// overriding the sort key until it is cleared again.
    pub async fn set_reference_location(
        &mut self,
        reference: Option<Coordinates>,
    ) -> LoadToken {
        self.reference = reference;
        self.begin_loading().await
    }

    /// Restore every filter, the sort key and the reference location
    /// to their defaults. Idempotent.
    pub async fn reset_filters(&mut self) -> LoadToken {
        self.criteria = FilterCriteria::default();
        self.sort_key = SortKey::default();
        self.reference = None;
        self.begin_loading().await
    }

    /// Change only the visible page. Pagination is local slicing of
    /// the cached results, so no store read and no `Loading` phase.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index.max(1);
    }

    /// Wait out the skeleton delay for `token`, then try to commit it.
    /// Returns whether the session transitioned to `Ready`.
    pub async fn settle(&mut self, token: LoadToken) -> bool {
        tokio::time::sleep(LOADING_DELAY).await;
        self.commit(token)
    }

    /// Commit a finished loading delay. A token from a superseded
    /// state change is discarded and leaves the phase untouched.
    pub fn commit(&mut self, token: LoadToken) -> bool {
        if token.0 == self.generation && self.phase == SessionPhase::Loading {
            self.phase = SessionPhase::Ready;
            true
        } else {
            debug!("discarding stale load token {:?}", token);
            false
        }
    }

    pub fn visible_page(&self) -> VisiblePage {
        let page = paginate(&self.ranked, PAGE_SIZE, self.page_index);
        VisiblePage {
            items: page.items,
            total_results: self.ranked.len(),
            total_pages: page.total_pages,
            page_index: self.page_index,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn reference_location(&self) -> Option<Coordinates> {
        self.reference
    }

    async fn begin_loading(&mut self) -> LoadToken {
        self.page_index = 1;
        self.generation += 1;
        self.phase = SessionPhase::Loading;
        self.recompute().await;
        LoadToken(self.generation)
    }

    async fn recompute(&mut self) {
        let candidates = self.repository.discoverable().await;
        let filtered: Vec<_> = candidates
            .into_iter()
            .filter(|listing| filter::matches(listing, &self.criteria))
            .collect();
        self.ranked = rank(filtered, self.reference, self.sort_key);
        debug!("recomputed {} results (generation {})", self.ranked.len(), self.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::built_in_listings;
    use crate::models::{Listing, VisibilityStatus};
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn scenario_listing(
        id: &str,
        price_value: i64,
        rating: f32,
        status: VisibilityStatus,
        coordinates: Coordinates,
    ) -> Listing {
        let mut listing = built_in_listings().remove(0);
        listing.id = id.to_string();
        listing.title = format!("Stay {id}");
        listing.price_value = price_value;
        listing.rating = rating;
        listing.status = status;
        listing.coordinates = coordinates;
        listing
    }

    fn scenario_repository() -> ListingRepository {
        let near = Coordinates { lat: 12.7700, lng: 75.2040 };
        let farther = Coordinates { lat: 12.8000, lng: 75.2400 };
        let store = MemoryStore::with_listings(vec![
            scenario_listing("A", 4_000, 4.2, VisibilityStatus::Approved, near),
            scenario_listing("B", 8_500, 4.8, VisibilityStatus::Approved, farther),
            scenario_listing("C", 20_000, 3.0, VisibilityStatus::Pending, farther),
        ]);
        ListingRepository::new(Vec::new(), Arc::new(store))
    }

    fn visible_ids(session: &SearchSession) -> Vec<String> {
        session.visible_page().items.iter().map(|r| r.listing.id.clone()).collect()
    }

    #[tokio::test]
    async fn price_filter_and_rating_sort_scenario() {
        let mut session = SearchSession::new(scenario_repository()).await;
        let token = session.set_max_price(10_000).await;

        // Results are committed before the delay resolves.
        assert_eq!(visible_ids(&session), vec!["B", "A"]);

        let page = session.visible_page();
        assert_eq!(page.total_results, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page_index, 1);

        assert!(session.commit(token));
        assert_eq!(session.phase(), SessionPhase::Ready);
    }

    #[tokio::test]
    async fn reference_location_wins_over_any_sort_key() {
        let mut session = SearchSession::new(scenario_repository()).await;
        session.set_max_price(10_000).await;
        session.set_sort_key(SortKey::Rating).await;
        session
            .set_reference_location(Some(Coordinates { lat: 12.7685, lng: 75.2023 }))
            .await;

        // A is nearer than B even though B outranks it on rating.
        assert_eq!(visible_ids(&session), vec!["A", "B"]);
        assert!(session.visible_page().items[0].distance_km.is_some());
    }

    #[tokio::test]
    async fn reset_filters_is_idempotent() {
        let mut session = SearchSession::new(scenario_repository()).await;
        session.set_query("nowhere").await;
        session.set_max_price(1).await;

        session.reset_filters().await;
        let first = visible_ids(&session);
        let first_criteria = session.criteria().clone();

        session.reset_filters().await;
        assert_eq!(visible_ids(&session), first);
        assert_eq!(session.criteria(), &first_criteria);
        assert_eq!(session.criteria(), &FilterCriteria::default());
        assert_eq!(session.sort_key(), SortKey::Rating);
        assert!(session.reference_location().is_none());
    }

    #[tokio::test]
    async fn empty_result_set_is_a_valid_state() {
        let mut session = SearchSession::new(scenario_repository()).await;
        session.set_query("no such stay anywhere").await;

        let page = session.visible_page();
        assert_eq!(page.total_results, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn page_change_does_not_reenter_loading_or_reset_filters() {
        let mut session = SearchSession::new(scenario_repository()).await;
        let token = session.set_max_price(10_000).await;
        assert!(session.settle(token).await);

        session.set_page_index(2);
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.criteria().max_price, 10_000);
        assert_eq!(session.visible_page().page_index, 2);
        assert!(session.visible_page().items.is_empty());

        // Page index clamps to the 1-based minimum.
        session.set_page_index(0);
        assert_eq!(session.visible_page().page_index, 1);
    }

    #[tokio::test]
    async fn filter_changes_reset_the_page() {
        let mut session = SearchSession::new(scenario_repository()).await;
        session.set_page_index(3);
        session.set_query("stay").await;
        assert_eq!(session.visible_page().page_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_load_token_is_discarded() {
        let mut session = SearchSession::new(scenario_repository()).await;

        let stale = session.set_query("stay a").await;
        let current = session.set_query("stay").await;

        assert!(!session.settle(stale).await);
        assert_eq!(session.phase(), SessionPhase::Loading);

        assert!(session.settle(current).await);
        assert_eq!(session.phase(), SessionPhase::Ready);

        // Only the latest criteria's results are visible: both approved
        // listings match "stay", not just "stay a".
        assert_eq!(session.criteria().query, "stay");
        assert_eq!(session.visible_page().total_results, 2);
    }

    #[tokio::test]
    async fn amenity_toggle_flips_selection() {
        let mut session = SearchSession::new(scenario_repository()).await;
        session.toggle_amenity("Parking").await;
        assert_eq!(session.criteria().amenities, vec!["Parking".to_string()]);

        session.toggle_amenity("Parking").await;
        assert!(session.criteria().amenities.is_empty());
    }
}
