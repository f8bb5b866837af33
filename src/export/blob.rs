//! In-memory blobs and the object-URL registry that addresses them.
//!
//! The registry plays the role a browser's object-URL table plays for a
//! page: blobs go in, opaque `blob:` URLs come out, and a URL resolves
//! only until it is revoked.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

/// An immutable chunk of bytes with a declared media type.
#[derive(Debug, Clone)]
pub struct Blob {
    bytes: Arc<[u8]>,
    media_type: String,
}

impl Blob {
    pub fn new(bytes: Vec<u8>, media_type: &str) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.to_string(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A temporary, process-local address for a stored blob.
///
/// Only meaningful to the registry that minted it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobUrl(String);

impl BlobUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry of live object URLs.
///
/// Exports create two entries each (the SVG markup and the encoded PNG)
/// and revoke both before returning. Entries never expire on their own;
/// an unrevoked URL is a leak, exactly like in the browser.
#[derive(Debug, Default)]
pub struct BlobStore {
    entries: Mutex<HashMap<BlobUrl, Blob>>,
    next_id: AtomicU64,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used when no private one is supplied.
    pub fn shared() -> Arc<BlobStore> {
        SHARED.clone()
    }

    /// Store a blob and mint a fresh URL for it.
    pub fn create_url(&self, blob: Blob) -> BlobUrl {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let url = BlobUrl(format!("blob:ipss-diagram/{}", id));
        self.lock().insert(url.clone(), blob);
        url
    }

    /// Look up a live URL. Revoked or foreign URLs yield `None`.
    pub fn resolve(&self, url: &BlobUrl) -> Option<Blob> {
        self.lock().get(url).cloned()
    }

    /// Drop the entry behind `url`. Returns whether it was still live.
    pub fn revoke(&self, url: &BlobUrl) -> bool {
        self.lock().remove(url).is_some()
    }

    /// Number of currently live URLs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BlobUrl, Blob>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

lazy_static! {
    static ref SHARED: Arc<BlobStore> = Arc::new(BlobStore::new());
}

/// An object URL that revokes itself when dropped.
///
/// The export pipeline has several early returns between minting a URL
/// and finishing with it; the guard keeps every one of those paths from
/// leaking a registry entry.
#[derive(Debug)]
pub struct ScopedUrl<'a> {
    store: &'a BlobStore,
    url: BlobUrl,
}

impl<'a> ScopedUrl<'a> {
    /// Store `blob` and tie the lifetime of its URL to the guard.
    pub fn create(store: &'a BlobStore, blob: Blob) -> Self {
        let url = store.create_url(blob);
        Self { store, url }
    }

    pub fn url(&self) -> &BlobUrl {
        &self.url
    }
}

impl Drop for ScopedUrl<'_> {
    fn drop(&mut self) {
        self.store.revoke(&self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_urls_resolve_to_the_stored_blob() {
        let store = BlobStore::new();
        let url = store.create_url(Blob::new(b"<svg/>".to_vec(), "image/svg+xml;charset=utf-8"));

        let blob = store.resolve(&url).unwrap();
        assert_eq!(blob.data(), b"<svg/>");
        assert_eq!(blob.media_type(), "image/svg+xml;charset=utf-8");
        assert_eq!(blob.len(), 6);
        assert!(!blob.is_empty());
    }

    #[test]
    fn every_url_is_unique() {
        let store = BlobStore::new();
        let first = store.create_url(Blob::new(vec![1], "image/png"));
        let second = store.create_url(Blob::new(vec![1], "image/png"));
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn urls_carry_the_registry_scheme() {
        let store = BlobStore::new();
        let url = store.create_url(Blob::new(vec![], "image/png"));
        assert!(url.as_str().starts_with("blob:ipss-diagram/"));
        assert_eq!(url.to_string(), url.as_str());
    }

    #[test]
    fn revoked_urls_stop_resolving() {
        let store = BlobStore::new();
        let url = store.create_url(Blob::new(vec![0xff], "image/png"));

        assert!(store.revoke(&url));
        assert!(store.resolve(&url).is_none());
        // A second revoke is a no-op, as in the browser.
        assert!(!store.revoke(&url));
        assert!(store.is_empty());
    }

    #[test]
    fn scoped_url_revokes_on_drop() {
        let store = BlobStore::new();
        let url = {
            let scoped = ScopedUrl::create(&store, Blob::new(vec![1, 2, 3], "image/png"));
            assert!(store.resolve(scoped.url()).is_some());
            scoped.url().clone()
        };
        assert!(store.resolve(&url).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn scoped_url_revokes_on_error_paths() {
        fn fails_midway(store: &BlobStore) -> Result<(), String> {
            let _svg = ScopedUrl::create(store, Blob::new(vec![1], "image/svg+xml;charset=utf-8"));
            Err("decode failed".to_string())
        }

        let store = BlobStore::new();
        assert!(fails_midway(&store).is_err());
        assert!(store.is_empty(), "the guard must clean up on error paths");
    }
}
