pub mod data;

pub use data::{DE, EN, ES, FR, all_locales};

/// A handle to one of the built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
}

impl Locale {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a built-in locale by code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Locale> {
        data::from_code(code)
    }
}

pub const DEFAULT_LOCALE: Locale = EN;

pub type WordList = &'static [&'static str];
pub type WordMap = &'static [(&'static str, &'static str)];

/// A named alternation pattern: surface forms separated by `|`, each
/// optionally containing the `<num>` digit-sequence placeholder
/// (see [`crate::vocab`]).
#[derive(Clone, Copy, Debug)]
pub struct PatternEntry {
    pub name: &'static str,
    pub alternation: &'static str,
}

/// Everything the normalizer knows about one locale's date vocabulary.
///
/// Word-list fields hold surface forms; the `*_map` dictionaries map
/// surface forms to semantic tokens (only the keys matter to the
/// normalizer, the tokens are for consumers that interpret phrases).
/// Absent fields are empty slices.
#[derive(Clone, Copy, Debug)]
pub struct LocaleDescriptor {
    pub code: &'static str,
    pub months: WordList,
    pub weekdays: WordList,
    pub units: WordList,
    pub numerals: WordList,
    pub articles: WordList,
    pub time_markers: WordList,
    pub month_map: WordMap,
    pub weekday_map: WordMap,
    pub unit_map: WordMap,
    pub modifier_map: WordMap,
    pub patterns: &'static [PatternEntry],
}

impl LocaleDescriptor {
    /// The plain word-list fields, in declaration order.
    #[inline]
    pub fn word_lists(&self) -> [WordList; 6] {
        [
            self.months,
            self.weekdays,
            self.units,
            self.numerals,
            self.articles,
            self.time_markers,
        ]
    }

    /// Every word→token dictionary this descriptor carries.
    #[inline]
    pub fn word_maps(&self) -> [WordMap; 4] {
        [
            self.month_map,
            self.weekday_map,
            self.unit_map,
            self.modifier_map,
        ]
    }
}

/// Source of locale descriptors.
///
/// Lookup must be idempotent and read-only. The normalizer lowercases
/// locale codes before calling in, so implementations see `"en"`, never
/// `"EN"`. Descriptors are static data; providers hand out references.
pub trait LocaleProvider: Send + Sync {
    fn descriptor(&self, code: &str) -> Option<&LocaleDescriptor>;
}

/// The default provider, backed by the compiled-in locale table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticLocales;

impl LocaleProvider for StaticLocales {
    fn descriptor(&self, code: &str) -> Option<&LocaleDescriptor> {
        data::LOCALE_TABLE.get(code.to_ascii_lowercase().as_str())
    }
}
