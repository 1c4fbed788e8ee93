//! Memoizing front for the `Introspector` port.
//!
//! Each (annotation kind, declaring type, member) key is resolved at most
//! once; concurrent misses on one key wait for a single resolution. Entries
//! are never evicted, updated, or expired.

use moka::sync::Cache;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument, trace, warn};

use crate::domain::errors::{AnnotationError, AnnotationResult};
use crate::domain::models::{cache_key, Annotation, CacheSettings, Config, Entity, Subject, TypeName};
use crate::domain::ports::Introspector;

/// Stored sequence; the concrete type is `Vec<T>` for the key's kind.
type CachedSequence = Arc<dyn Any + Send + Sync>;

/// Why a resolution did not produce a cache entry.
enum Unresolved<T> {
    Failed(AnnotationError),
    /// Empty result with `cache_empty_results` off.
    NotCached(Arc<Vec<T>>),
}

/// Cache of annotation lookups keyed by kind and entity.
///
/// Owned by whoever needs it and shared through `Arc`; there is no global
/// instance.
pub struct AnnotationCache {
    introspector: Arc<dyn Introspector>,
    entries: Cache<String, CachedSequence>,
    settings: CacheSettings,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnnotationCache {
    /// Create a cache with default settings.
    pub fn new(introspector: Arc<dyn Introspector>) -> Self {
        Self::with_settings(introspector, CacheSettings::default())
    }

    pub fn with_settings(introspector: Arc<dyn Introspector>, settings: CacheSettings) -> Self {
        let entries = Cache::builder()
            .initial_capacity(settings.initial_capacity)
            .build();

        Self {
            introspector,
            entries,
            settings,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(introspector: Arc<dyn Introspector>, config: &Config) -> Self {
        Self::with_settings(introspector, config.cache.clone())
    }

    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// All annotations of kind `T` on the subject, in the order the
    /// introspector reports them.
    ///
    /// Returns an empty sequence when there are none. After the first
    /// resolution the same `Arc` is handed out for every equal key.
    pub fn get_annotations<T: Annotation>(
        &self,
        subject: Subject<'_>,
    ) -> AnnotationResult<Arc<Vec<T>>> {
        let entity = subject.resolve()?;
        let kind = T::kind();
        let key = cache_key(&kind, &entity);
        self.lookup::<T>(&key, &entity, &kind)
    }

    /// First annotation of kind `T` on the subject, if any.
    pub fn get_annotation<T: Annotation>(&self, subject: Subject<'_>) -> AnnotationResult<Option<T>> {
        Ok(self.get_annotations::<T>(subject)?.first().cloned())
    }

    pub fn stats(&self) -> CacheStats {
        self.entries.run_pending_tasks();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entry_count: self.entries.entry_count(),
        }
    }

    #[instrument(level = "debug", skip_all, fields(key = %key))]
    fn lookup<T: Annotation>(
        &self,
        key: &str,
        entity: &Entity,
        kind: &TypeName,
    ) -> AnnotationResult<Arc<Vec<T>>> {
        if let Some(cached) = self.entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Annotation cache hit");
            return downcast_sequence(key, cached);
        }

        let mut resolved_here = false;
        let init = || -> Result<CachedSequence, Unresolved<T>> {
            resolved_here = true;
            let annotations = self
                .resolve::<T>(key, entity, kind)
                .map_err(Unresolved::Failed)?;
            if annotations.is_empty() && !self.settings.cache_empty_results {
                return Err(Unresolved::NotCached(annotations));
            }
            Ok(annotations as CachedSequence)
        };
        let outcome = self.entries.try_get_with(key.to_string(), init);

        match outcome {
            Ok(cached) => {
                if !resolved_here {
                    // Another caller filled this entry while we waited.
                    self.hits.fetch_add(1, Ordering::Relaxed);
                }
                downcast_sequence(key, cached)
            }
            Err(shared) => {
                if !resolved_here {
                    // Shared an uncached resolution; nothing was served from the cache.
                    self.misses.fetch_add(1, Ordering::Relaxed);
                }
                match &*shared {
                    Unresolved::Failed(err) => Err(err.clone()),
                    Unresolved::NotCached(annotations) => Ok(Arc::clone(annotations)),
                }
            }
        }
    }

    fn resolve<T: Annotation>(
        &self,
        key: &str,
        entity: &Entity,
        kind: &TypeName,
    ) -> AnnotationResult<Arc<Vec<T>>> {
        self.misses.fetch_add(1, Ordering::Relaxed);

        let annotations = if self.introspector.is_defined(entity, kind) {
            self.introspector
                .annotations(entity, kind)
                .iter()
                .map(|erased| {
                    erased.downcast_ref::<T>().cloned().ok_or_else(|| {
                        warn!(found = %erased.kind(), "Introspector returned a foreign annotation kind");
                        AnnotationError::KindMismatch {
                            key: key.to_string(),
                            expected: kind.to_string(),
                            found: erased.kind().to_string(),
                        }
                    })
                })
                .collect::<AnnotationResult<Vec<T>>>()?
        } else {
            Vec::new()
        };

        debug!(%entity, count = annotations.len(), "Resolved annotations");
        Ok(Arc::new(annotations))
    }
}

fn downcast_sequence<T: Annotation>(key: &str, cached: CachedSequence) -> AnnotationResult<Arc<Vec<T>>> {
    cached.downcast::<Vec<T>>().map_err(|_| {
        warn!(key, "Cached sequence holds a different annotation kind");
        AnnotationError::KindMismatch {
            key: key.to_string(),
            expected: T::kind().to_string(),
            found: "a sequence of another kind".to_string(),
        }
    })
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from a cache entry.
    pub hits: u64,
    /// Lookups not answered from a cache entry: each introspector call, plus
    /// callers that shared a concurrent resolution which was not stored.
    pub misses: u64,
    /// Number of entries currently in cache.
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
