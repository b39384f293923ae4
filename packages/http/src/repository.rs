use std::fs;
use std::path::Path;

use bytes::Bytes;
use reqwest::blocking::Client;
use url::Url;

use crate::error::Error;

/// A remote share of precomputed artifacts, addressed relative to a base URL.
///
/// This is the fetch side of a local cache: experiment results and figures
/// are produced elsewhere, published on a share, and pulled down once. The
/// cache policy lives in [`RemoteRepository::fetch_to`] - if the local
/// destination already exists the fetch is a no-op.
///
/// # Example
///
/// ```ignore
/// use blockdoc_http::RemoteRepository;
///
/// let repo = RemoteRepository::new("https://share.example.org/results/")?;
///
/// // Raw bytes
/// let csv = repo.fetch("combined_results.csv")?;
///
/// // Cached download; false means the file was already present
/// let downloaded = repo.fetch_to("combined_results.csv", "cache/results.csv".as_ref())?;
/// ```
pub struct RemoteRepository {
    client: Client,
    base_url: Url,
}

impl RemoteRepository {
    /// Create a repository rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Create a repository with a custom reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Resolve `resource` against the base URL.
    ///
    /// Absolute `http(s)://` resources bypass the join and are fetched as
    /// given.
    fn resolve(&self, resource: &str) -> Result<Url, Error> {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            Url::parse(resource).map_err(Error::from)
        } else {
            self.base_url.join(resource).map_err(Error::from)
        }
    }

    /// Fetch `resource` and return its raw bytes.
    ///
    /// Any non-success status is an error carrying the resolved URL and the
    /// status code; there is no retry.
    pub fn fetch(&self, resource: &str) -> Result<Bytes, Error> {
        let url = self.resolve(resource)?;
        log::debug!("Fetching {}...", url);

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }
        response.bytes().map_err(Error::from)
    }

    /// Fetch `resource` into the file at `destination`, unless it is already
    /// there.
    ///
    /// Returns `false` without touching the network when `destination`
    /// exists, `true` after a successful download. Parent directories are
    /// created as needed. A failed fetch leaves no partial file behind.
    pub fn fetch_to(&self, resource: &str, destination: &Path) -> Result<bool, Error> {
        if destination.exists() {
            log::debug!(
                "{} already present, skipping fetch of {}",
                destination.display(),
                resource
            );
            return Ok(false);
        }

        let bytes = self.fetch(resource)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::io(parent, source))?;
            }
        }
        fs::write(destination, &bytes).map_err(|source| Error::io(destination, source))?;
        log::info!(
            "Downloaded {} ({} bytes) to {}",
            resource,
            bytes.len(),
            destination.display()
        );
        Ok(true)
    }
}
