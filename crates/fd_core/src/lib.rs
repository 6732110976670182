pub mod classify;
pub mod config;
pub mod error;
pub mod seen;
pub mod types;

pub use classify::TopicClassifier;
pub use config::{Config, FeedSource};
pub use error::Error;
pub use seen::SeenStore;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{Article, Config, Error, FeedSource, Result, SeenStore, TopicClassifier};
}
