pub mod error;
pub mod types;

pub mod admin;
pub mod aggregate;
pub mod debounce;
pub mod metadata;
pub mod mutation;
#[cfg(feature = "server")]
pub mod server;
pub mod store;
pub mod title;
pub mod trending;
