pub mod distance;
pub mod index;
pub mod locale;
pub mod normalize;
pub mod parse;
pub mod vocab;

pub use locale::{
    DE, DEFAULT_LOCALE, EN, ES, FR, Locale, LocaleDescriptor, LocaleProvider, PatternEntry,
    StaticLocales, all_locales,
};

pub use index::{DEFAULT_MIN_PREFIX_LEN, IndexCache, MANUAL_OVERRIDES, PrefixIndex};
pub use normalize::{NormalizeError, Normalizer, NormalizerBuilder};
pub use parse::{DateParser, NoParser};
