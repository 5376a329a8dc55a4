//! Flattens a locale descriptor into the word set the prefix index is
//! built from: word lists, dictionary keys, and the surface forms inside
//! alternation patterns.

use std::collections::BTreeSet;

use crate::locale::LocaleDescriptor;

/// Separates alternative surface forms inside a pattern entry.
const ALTERNATION_DELIMITER: char = '|';

/// Marks an optional digit-sequence quantifier inside a surface form
/// ("`<num> weeks`"). Stripped before the remainder enters the vocabulary.
const NUMBER_PLACEHOLDER: &str = "<num>";

/// Collects every word the locale knows, lowercased and deduplicated.
///
/// The result is an ordered set so that downstream index construction is
/// deterministic. Empty fields contribute nothing; this is a pure function
/// of the descriptor.
pub fn extract_vocabulary(descriptor: &LocaleDescriptor) -> BTreeSet<String> {
    let mut words = BTreeSet::new();

    for list in descriptor.word_lists() {
        for &word in list {
            add_word(&mut words, word);
        }
    }

    for map in descriptor.word_maps() {
        for &(key, _) in map {
            add_word(&mut words, key);
        }
    }

    for pattern in descriptor.patterns {
        for word in alternation_words(pattern.alternation) {
            if !word.is_empty() {
                words.insert(word);
            }
        }
    }

    words
}

fn add_word(words: &mut BTreeSet<String>, word: &str) {
    if !word.is_empty() {
        words.insert(word.to_lowercase());
    }
}

/// Tokenizes one alternation pattern: split on `|`, drop `<num>`
/// placeholders, trim, lowercase. May yield empty strings for alternatives
/// that were nothing but a placeholder; callers skip those.
pub(crate) fn alternation_words(alternation: &str) -> impl Iterator<Item = String> + '_ {
    alternation
        .split(ALTERNATION_DELIMITER)
        .map(|alt| alt.replace(NUMBER_PLACEHOLDER, "").trim().to_lowercase())
}
