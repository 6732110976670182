pub mod chunk;
pub mod format;
pub mod pipeline;

pub use chunk::chunk_message;
pub use format::{render_article, render_digest};
pub use pipeline::{Digest, DigestService};

pub mod prelude {
    pub use super::pipeline::{Digest, DigestService};
    pub use fd_core::{Article, Result};
}
