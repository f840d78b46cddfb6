// src/cache.rs
//! In-process tag cache keyed by file path and validated by modification time.
//!
//! The cache is an explicit object: the caller creates it for a run, hands it
//! to the extraction pool and drops it afterwards. Nothing is persisted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use crate::error::Result;
use crate::types::Tag;

#[derive(Debug, Clone)]
struct CacheEntry {
    mtime: SystemTime,
    tags: Vec<Tag>,
}

type Slot = Arc<Mutex<Option<CacheEntry>>>;

/// Hit/miss counters for one cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Concurrency-safe `path -> (mtime, tags)` memo.
///
/// Each path owns its own slot lock, so a stale check and the refill that
/// follows it are atomic per key while different keys proceed in parallel.
#[derive(Debug, Default)]
pub struct TagCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl TagCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tags for `path` when they were stored with `mtime`,
    /// otherwise runs `extract`, stores its result and returns it.
    ///
    /// Failed extractions leave the slot untouched.
    ///
    /// # Errors
    /// Propagates the error returned by `extract`.
    pub fn get_or_extract<F>(&self, path: &Path, mtime: SystemTime, extract: F) -> Result<Vec<Tag>>
    where
        F: FnOnce() -> Result<Vec<Tag>>,
    {
        let slot = self.slot(path);
        let mut entry = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = entry.as_ref().filter(|e| e.mtime == mtime) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached.tags.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let tags = extract()?;
        *entry = Some(CacheEntry {
            mtime,
            tags: tags.clone(),
        });
        Ok(tags)
    }

    /// Number of paths with a stored entry.
    #[must_use]
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        slots
            .iter()
            .filter(|s| s.lock().unwrap_or_else(PoisonError::into_inner).is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn slot(&self, path: &Path) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(path.to_path_buf()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoMapError;
    use std::thread;
    use std::time::Duration;

    fn tags(name: &str) -> Vec<Tag> {
        vec![Tag::definition(Path::new("a.py"), Path::new("/a.py"), 0, name)]
    }

    #[test]
    fn test_hit_on_same_mtime() {
        let cache = TagCache::new();
        let t0 = SystemTime::UNIX_EPOCH;

        let first = cache.get_or_extract(Path::new("/a.py"), t0, || Ok(tags("foo"))).unwrap();
        let second = cache
            .get_or_extract(Path::new("/a.py"), t0, || panic!("should be cached"))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_refresh_on_changed_mtime() {
        let cache = TagCache::new();
        let t0 = SystemTime::UNIX_EPOCH;
        let t1 = t0 + Duration::from_secs(5);

        cache.get_or_extract(Path::new("/a.py"), t0, || Ok(tags("old"))).unwrap();
        let fresh = cache.get_or_extract(Path::new("/a.py"), t1, || Ok(tags("new"))).unwrap();
        let again = cache
            .get_or_extract(Path::new("/a.py"), t1, || panic!("should be cached"))
            .unwrap();

        assert_eq!(fresh[0].name, "new");
        assert_eq!(again[0].name, "new");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = TagCache::new();
        let t0 = SystemTime::UNIX_EPOCH;

        let err = cache.get_or_extract(Path::new("/a.py"), t0, || {
            Err(RepoMapError::Parse(PathBuf::from("/a.py")))
        });
        assert!(err.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_callers_extract_once_per_key() {
        const WORKERS: usize = 8;
        let cache = TagCache::new();
        let calls = AtomicUsize::new(0);
        let t0 = SystemTime::UNIX_EPOCH;

        thread::scope(|s| {
            for _ in 0..WORKERS {
                s.spawn(|| {
                    cache
                        .get_or_extract(Path::new("/a.py"), t0, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(20));
                            Ok(tags("foo"))
                        })
                        .unwrap()
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats(), CacheStats { hits: WORKERS - 1, misses: 1 });
    }

    #[test]
    fn test_distinct_keys_do_not_wait_on_each_other() {
        let cache = TagCache::new();
        let t0 = SystemTime::UNIX_EPOCH;
        let (entered_tx, entered_rx) = std::sync::mpsc::channel();

        thread::scope(|s| {
            // Holds the slot for /slow.py until /fast.py has finished.
            s.spawn(|| {
                cache
                    .get_or_extract(Path::new("/slow.py"), t0, || {
                        entered_tx.send(()).unwrap();
                        thread::sleep(Duration::from_millis(500));
                        Ok(tags("slow"))
                    })
                    .unwrap()
            });
            entered_rx.recv().unwrap();

            let start = std::time::Instant::now();
            cache.get_or_extract(Path::new("/fast.py"), t0, || Ok(tags("fast"))).unwrap();
            assert!(start.elapsed() < Duration::from_millis(250));
        });

        assert_eq!(cache.len(), 2);
    }
}
