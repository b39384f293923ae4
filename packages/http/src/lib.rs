//! # blockdoc-http
//!
//! Blocking HTTP fetch of precomputed artifacts into local caches.
//!
//! The [`RemoteRepository`] client resolves resources against a base URL and
//! downloads them on demand. [`RemoteRepository::fetch_to`] is idempotent
//! with respect to the local filesystem: when the destination file already
//! exists nothing is fetched, which is the caching contract the rest of the
//! stack relies on.

mod error;
mod repository;

pub use error::Error;
pub use repository::RemoteRepository;
