//! Prefix→canonical-word index, the manual override table, and the
//! per-locale index cache.
//!
//! The index maps every vocabulary word and every proper prefix of it
//! (length ≥ [`DEFAULT_MIN_PREFIX_LEN`]) to the full word it should expand
//! to, so "tom" resolves to "tomorrow" and "dec" to "december". When two
//! words share a prefix the longer canonical form wins; curated overrides
//! are layered on top for the cases where that heuristic picks wrong.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};

use phf::{Map, phf_map};
use tracing::debug;

use crate::distance::edit_distance;
use crate::locale::{LocaleDescriptor, LocaleProvider};
use crate::normalize::NormalizeError;
use crate::vocab::extract_vocabulary;

/// Minimum prefix length registered per vocabulary word.
pub const DEFAULT_MIN_PREFIX_LEN: usize = 2;

/// Curated abbreviation → canonical-word corrections, shared by every
/// locale and applied after automatic construction, overwriting whatever
/// the longest-canonical-wins rule produced for the same key. Covers the
/// ambiguous one- and two-letter shorthands plus the common misspellings
/// of "tomorrow".
pub static MANUAL_OVERRIDES: Map<&'static str, &'static str> = phf_map! {
    "t" => "today",
    "to" => "tomorrow",
    "tod" => "today",
    "ton" => "tonight",
    "nxt" => "next",
    "prev" => "last",
    "bday" => "birthday",
    "wk" => "week",
    "wks" => "weeks",
    "yr" => "year",
    "yrs" => "years",
    "tommorow" => "tomorrow",
    "tommorrow" => "tomorrow",
};

/// The per-locale lookup table from an abbreviated token to the canonical
/// full word. Immutable once built; shared behind an `Arc` by the cache.
pub struct PrefixIndex {
    locale: String,
    entries: BTreeMap<String, String>,
}

impl PrefixIndex {
    fn build(descriptor: &LocaleDescriptor, min_prefix_len: usize) -> Self {
        let vocabulary = extract_vocabulary(descriptor);
        let mut entries = BTreeMap::new();

        for full in &vocabulary {
            // A word is always its own canonical match.
            register(&mut entries, full, full);

            // Proper prefixes, on char boundaries.
            for (seen, (offset, _)) in full.char_indices().enumerate() {
                if seen >= min_prefix_len {
                    register(&mut entries, &full[..offset], full);
                }
            }
        }

        for (key, canonical) in MANUAL_OVERRIDES.entries() {
            entries.insert((*key).to_owned(), (*canonical).to_owned());
        }

        debug!(
            locale = descriptor.code,
            words = vocabulary.len(),
            entries = entries.len(),
            "built prefix index"
        );

        Self {
            locale: descriptor.code.to_owned(),
            entries,
        }
    }

    /// Code of the locale this index was built for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Canonical word for `key`, if the index knows it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered keys, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Canonical word of the first key within edit distance 1 of `token`.
    ///
    /// Keys are scanned in lexicographic order, so the correction chosen
    /// for an ambiguous typo is stable across runs.
    pub(crate) fn correct_typo(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| edit_distance(token, key) == 1)
            .map(|(_, canonical)| canonical.as_str())
    }
}

/// Registration rule: keep the existing entry unless the new canonical
/// word is strictly longer. Vocabulary iteration is lexicographic, so
/// equal-length ties deterministically go to the first-registered word.
fn register(entries: &mut BTreeMap<String, String>, key: &str, canonical: &str) {
    match entries.get(key) {
        Some(existing) if existing.chars().count() >= canonical.chars().count() => {}
        _ => {
            entries.insert(key.to_owned(), canonical.to_owned());
        }
    }
}

/// Owns the locale-code → index map and the build-or-fetch decision.
///
/// An index is built on the first request for its locale code and lives
/// for the cache's lifetime; locale data does not hot-reload. The build
/// happens while the map lock is held, so concurrent first requests for
/// one locale serialize and at most one build occurs; no caller ever
/// observes a partially populated index. Subsequent hits clone the `Arc`
/// and read without synchronization.
#[derive(Default)]
pub struct IndexCache {
    indexes: Mutex<HashMap<String, Arc<PrefixIndex>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &self,
        code: &str,
        provider: &dyn LocaleProvider,
        min_prefix_len: usize,
    ) -> Result<Arc<PrefixIndex>, NormalizeError> {
        let mut indexes = self
            .indexes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(index) = indexes.get(code) {
            return Ok(Arc::clone(index));
        }

        let descriptor = provider
            .descriptor(code)
            .ok_or_else(|| NormalizeError::LocaleNotFound(code.to_owned()))?;
        let index = Arc::new(PrefixIndex::build(descriptor, min_prefix_len));
        indexes.insert(code.to_owned(), Arc::clone(&index));
        Ok(index)
    }
}
