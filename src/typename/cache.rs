//! Flyweight cache of parsed type names.
//!
//! [`TypeNameCache`] memoizes [`TypeName::parse`] by the exact input string, so every
//! caller asking for the same string shares one [`Arc<TypeName>`]. The cache is an
//! ordinary value: the subsystem that resolves types by name owns it and hands it
//! to whoever needs it, and its lifetime ends with that owner.
//!
//! # Thread Safety
//!
//! Entries live in a [`DashMap`], so lookups and insertions from many threads proceed
//! without a global lock. Two threads missing on the same key may both parse it; the
//! first insertion wins and both receive the stored instance.

use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::{typename::TypeName, Result};

/// Memoization table mapping input strings to their parsed [`TypeName`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use clrtypename::TypeNameCache;
///
/// let cache = TypeNameCache::new();
/// let first = cache.get("System.String, mscorlib")?;
/// let second = cache.get("System.String, mscorlib")?;
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// # Ok::<(), clrtypename::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct TypeNameCache {
    entries: DashMap<String, Arc<TypeName>>,
}

impl TypeNameCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with room for `capacity` names
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Get the parsed name for `name`, parsing and caching it on first use.
    ///
    /// The key is the string exactly as passed; `"System.String"` and
    /// `" System.String"` are cached separately even though the resulting
    /// names compare equal.
    ///
    /// ## Arguments
    /// * 'name' - A fully or partially qualified type name
    ///
    /// # Errors
    /// Returns the parse error for empty or malformed input. Nothing is cached in that case.
    pub fn get(&self, name: &str) -> Result<Arc<TypeName>> {
        if let Some(existing) = self.entries.get(name) {
            log::trace!("[typename] cache hit for '{}'", name);
            return Ok(existing.value().clone());
        }

        log::trace!("[typename] cache miss for '{}'", name);
        let parsed = TypeName::parse(name).inspect_err(|error| {
            log::debug!("[typename] rejected '{}': {}", name, error);
        })?;

        let entry = self.entries.entry(name.to_string()).or_insert(parsed);
        Ok(entry.value().clone())
    }

    /// Get the parsed names for all of `names`, parsing misses in parallel.
    ///
    /// The result is in the same order as `names`. Names parsed before a failure
    /// stay cached.
    ///
    /// ## Arguments
    /// * 'names' - The type names to look up
    ///
    /// # Errors
    /// Returns the error of a name that failed to parse.
    pub fn get_all<S>(&self, names: &[S]) -> Result<Vec<Arc<TypeName>>>
    where
        S: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| self.get(name.as_ref()))
            .collect()
    }

    /// Whether `name` has already been parsed into this cache
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of cached names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached name. Instances already handed out stay valid.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
