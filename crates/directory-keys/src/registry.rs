//! Build-once lookup table behind every lookup-key category.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{KeyError, Result};
use crate::lookup::LookupKey;

/// Canonical-string index over one category's permitted key kinds.
///
/// Built once per category (see [`LookupKey::registry`]) and read-only
/// afterwards, so a shared reference can be used from any thread.
#[derive(Debug)]
pub struct LookupKeyRegistry<K: LookupKey> {
    by_wire: HashMap<&'static str, K>,
}

impl<K: LookupKey> LookupKeyRegistry<K> {
    /// Index every variant of `K` by its canonical string.
    pub fn build() -> Self {
        let by_wire: HashMap<_, _> = K::VARIANTS.iter().map(|&k| (k.as_str(), k)).collect();
        trace!("built {} lookup key registry with {} entries", K::KIND, by_wire.len());
        Self { by_wire }
    }

    /// Exact, case-sensitive parse of a raw key string.
    pub fn parse(&self, raw: &str) -> Result<K> {
        self.get(raw).ok_or_else(|| {
            debug!("rejected {} lookup key {raw:?}", K::KIND);
            KeyError::InvalidLookupKey {
                kind: K::KIND,
                raw: raw.to_string(),
            }
        })
    }

    /// Like [`parse`](Self::parse) but without building an error.
    pub fn get(&self, raw: &str) -> Option<K> {
        self.by_wire.get(raw).copied()
    }

    /// Whether `raw` is one of this category's canonical strings.
    pub fn contains(&self, raw: &str) -> bool {
        self.by_wire.contains_key(raw)
    }

    /// Permitted key kinds, in declaration order.
    pub fn variants(&self) -> &'static [K] {
        K::VARIANTS
    }

    pub fn len(&self) -> usize {
        self.by_wire.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_wire.is_empty()
    }
}
