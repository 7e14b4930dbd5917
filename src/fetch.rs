//! Fetcher: retrieve the komorebi rules document and persist it locally.
//!
//! One unauthenticated GET, no retries, no conditional requests.  The
//! response body is written verbatim to the cache file, overwriting any
//! prior contents, so a failed later stage can be debugged against the
//! exact bytes that were downloaded.

use std::path::Path;

use crate::error::FetchError;

/// Issues the HTTP request for the rules document.
///
/// A trait seam so tests can exercise [`download`] without touching the
/// network; production code uses [`HttpTransport`].
pub trait Transport {
    /// Fetch `url` and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure or a non-success status.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`Transport`] backed by a real blocking `ureq` request.
#[derive(Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut response = ureq::get(url).call().map_err(|source| FetchError::Request {
            url: url.to_owned(),
            source,
        })?;
        response
            .body_mut()
            .read_to_vec()
            .map_err(|source| FetchError::Request {
                url: url.to_owned(),
                source,
            })
    }
}

/// Download `url` and write the response body verbatim to `dest`.
///
/// Overwrites any existing file at `dest`.  On a transport failure the
/// previous cache contents are left untouched.
///
/// # Errors
///
/// Returns an error if the request fails or the cache file cannot be
/// written.
pub fn download(transport: &dyn Transport, url: &str, dest: &Path) -> Result<(), FetchError> {
    let body = transport.get(url)?;
    std::fs::write(dest, body).map_err(|source| FetchError::Io {
        path: dest.display().to_string(),
        source,
    })
}
