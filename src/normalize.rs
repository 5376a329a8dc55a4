//! The normalization pipeline.
//!
//! A raw phrase goes through, in order: passthrough check (anything the
//! parser already understands is left alone), numeric-month rewrite,
//! whole-input prefix lookup, per-token substitution, and a bounded
//! typo-correction pass. The pipeline never fails for a known locale;
//! the worst case is returning the input unchanged.

use std::sync::Arc;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::index::{DEFAULT_MIN_PREFIX_LEN, IndexCache, PrefixIndex};
use crate::locale::{LocaleDescriptor, LocaleProvider, StaticLocales};
use crate::parse::{DateParser, NoParser};

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The locale provider has no descriptor for the requested code.
    /// A configuration gap, not bad user input; never recovered internally.
    #[error("locale `{0}` not found")]
    LocaleNotFound(String),
}

/// Rewrites date phrases into the canonical form a natural-language date
/// parser is most likely to accept.
///
/// ```
/// use dately::Normalizer;
///
/// let normalizer = Normalizer::new();
/// assert_eq!(normalizer.normalize("tod", "en").unwrap(), "today");
/// assert_eq!(normalizer.normalize("nxt wk", "en").unwrap(), "next week");
/// assert_eq!(normalizer.normalize("25 december", "en").unwrap(), "25 of december");
/// ```
pub struct Normalizer {
    provider: Arc<dyn LocaleProvider>,
    parser: Arc<dyn DateParser>,
    cache: IndexCache,
    min_prefix_len: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    /// Built-in locales, no parser wired in.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn parser(&self) -> &dyn DateParser {
        self.parser.as_ref()
    }

    /// The prefix index for `locale_code`, building and caching it on the
    /// first request.
    pub fn index(&self, locale_code: &str) -> Result<Arc<PrefixIndex>, NormalizeError> {
        let code = locale_code.trim().to_ascii_lowercase();
        self.cache
            .get_or_build(&code, self.provider.as_ref(), self.min_prefix_len)
    }

    /// Normalizes `raw` against the given locale's vocabulary.
    ///
    /// Always produces *some* phrase for a known locale, possibly the
    /// input itself. Lowercases and trims first; an expression the
    /// configured parser already accepts is returned as-is, which makes
    /// normalization idempotent for already-canonical phrases.
    pub fn normalize(&self, raw: &str, locale_code: &str) -> Result<String, NormalizeError> {
        if raw.is_empty() {
            return Ok(String::new());
        }

        let lowered = raw.to_lowercase();
        let input = lowered.trim();

        let code = locale_code.trim().to_ascii_lowercase();
        let descriptor = self
            .provider
            .descriptor(&code)
            .ok_or_else(|| NormalizeError::LocaleNotFound(code.clone()))?;

        // Already works? Don't touch it.
        if self.parser.parse(input, false).is_some() {
            return Ok(input.to_owned());
        }

        if let Some(rewritten) = rewrite_numeric_month(input, descriptor) {
            return Ok(rewritten);
        }

        let index = self
            .cache
            .get_or_build(&code, self.provider.as_ref(), self.min_prefix_len)?;

        // Whole input as a single abbreviation.
        if let Some(canonical) = index.get(input) {
            return Ok(canonical.to_owned());
        }

        // Token-by-token expansion.
        let expanded: SmallVec<[&str; 8]> = input
            .split_whitespace()
            .map(|token| index.get(token).unwrap_or(token))
            .collect();
        let rebuilt = expanded.join(" ");

        // Typo tolerance: a token that is no key at all may still be one
        // edit away from one.
        let corrected: SmallVec<[&str; 8]> = rebuilt
            .split_whitespace()
            .map(|token| {
                if index.contains_key(token) {
                    return token;
                }
                match index.correct_typo(token) {
                    Some(canonical) => {
                        trace!(token, canonical, "typo-corrected token");
                        canonical
                    }
                    None => token,
                }
            })
            .collect();

        Ok(corrected.join(" "))
    }
}

/// "25 december" reads as a day-of-month; parsers want the spoken
/// connector ("25 of december", "25 de diciembre"). Applies only when the
/// first token is all digits, the second is a month word or a prefix of
/// one, and the locale has an article word to connect them with. Trailing
/// tokens are dropped, as the source construct is a two-token one.
fn rewrite_numeric_month(input: &str, descriptor: &LocaleDescriptor) -> Option<String> {
    let mut tokens = input.split_whitespace();
    let number = tokens.next()?;
    let candidate = tokens.next()?;

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !descriptor
        .month_map
        .iter()
        .any(|(key, _)| key.starts_with(candidate))
    {
        return None;
    }

    let article = descriptor.articles.first()?;
    Some(format!("{number} {article} {candidate}"))
}

/// Configures a [`Normalizer`]. Every knob has a default: built-in
/// locales, no parser, prefix length 2.
pub struct NormalizerBuilder {
    provider: Arc<dyn LocaleProvider>,
    parser: Arc<dyn DateParser>,
    min_prefix_len: usize,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self {
            provider: Arc::new(StaticLocales),
            parser: Arc::new(NoParser),
            min_prefix_len: DEFAULT_MIN_PREFIX_LEN,
        }
    }
}

impl NormalizerBuilder {
    /// Swap in an external locale descriptor source.
    pub fn provider<P: LocaleProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Wire in the natural-language date parser the phrases are destined
    /// for. Enables the passthrough check and [`Normalizer::parse_user_date`].
    pub fn parser<P: DateParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Minimum prefix length registered per vocabulary word.
    pub fn min_prefix_len(mut self, len: usize) -> Self {
        self.min_prefix_len = len;
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            provider: self.provider,
            parser: self.parser,
            cache: IndexCache::new(),
            min_prefix_len: self.min_prefix_len,
        }
    }
}
