pub mod fetcher;
pub mod manager;

pub use fetcher::FeedFetcher;
pub use manager::{FeedCollector, FeedManager};

pub mod prelude {
    pub use super::manager::{FeedCollector, FeedManager};
    pub use fd_core::{Article, Error, FeedSource, Result};
}
