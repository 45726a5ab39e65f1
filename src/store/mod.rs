pub mod backend;
pub mod review_store;

pub use backend::{FileBackend, KvBackend, MemoryBackend};
pub use review_store::{ReviewStore, ADMIN_KEY, REVIEWS_KEY};
