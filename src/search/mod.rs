pub mod filter;
pub mod geo;
pub mod paginate;
pub mod ranking;
pub mod repository;
pub mod session;
pub mod types;

pub use paginate::{paginate, Page, PAGE_SIZE};
pub use ranking::{rank, RankedListing};
pub use repository::ListingRepository;
pub use session::{LoadToken, SearchSession, SessionPhase, VisiblePage, LOADING_DELAY};
pub use types::{FilterCriteria, SortKey};
