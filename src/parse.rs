//! The seam to the external natural-language date parser, and the adapter
//! that feeds it normalized phrases.

use chrono::{DateTime, Utc};

use crate::normalize::{NormalizeError, Normalizer};

/// An external natural-language date parser, consumed as a black box.
///
/// Implementations interpret a whole phrase ("next friday", "25 of
/// december") and yield a concrete instant, or `None` when the phrase
/// means nothing to them. `use_utc` asks for the phrase to be anchored in
/// UTC rather than local time; how that is honored is the parser's
/// business.
pub trait DateParser: Send + Sync {
    fn parse(&self, phrase: &str, use_utc: bool) -> Option<DateTime<Utc>>;
}

/// The null parser: accepts nothing.
///
/// The default when no parser is wired in: every phrase then runs through
/// the full normalization pipeline (no passthrough short-circuit) and
/// [`Normalizer::parse_user_date`] always reports absence.
pub struct NoParser;

impl DateParser for NoParser {
    fn parse(&self, _phrase: &str, _use_utc: bool) -> Option<DateTime<Utc>> {
        None
    }
}

impl Normalizer {
    /// Normalizes `raw` and hands the candidate phrase to the configured
    /// parser.
    ///
    /// An unparseable phrase is an expected, non-exceptional outcome and
    /// surfaces as `Ok(None)`; the only error is an unknown locale code.
    pub fn parse_user_date(
        &self,
        raw: &str,
        locale_code: &str,
        use_utc: bool,
    ) -> Result<Option<DateTime<Utc>>, NormalizeError> {
        let candidate = self.normalize(raw, locale_code)?;
        Ok(self.parser().parse(&candidate, use_utc))
    }
}
