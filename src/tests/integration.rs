#[cfg(test)]
mod integration_tests {

    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use chrono::{DateTime, TimeZone, Utc};

    use crate::{DateParser, Normalizer};

    /// Stands in for the real natural-language parser: accepts a fixed set
    /// of already-canonical phrases and nothing else.
    struct StubParser;

    const ACCEPTED: &[&str] = &[
        "now",
        "today",
        "tomorrow",
        "yesterday",
        "next week",
        "last year",
        "two weeks ago",
        "in 30 minutes",
        "25 of december",
    ];

    impl DateParser for StubParser {
        fn parse(&self, phrase: &str, _use_utc: bool) -> Option<DateTime<Utc>> {
            ACCEPTED
                .contains(&phrase)
                .then(|| Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
        }
    }

    fn normalizer() -> Normalizer {
        Normalizer::builder().parser(StubParser).build()
    }

    #[test]
    fn shorthand_phrases_expand_to_canonical_ones() {
        let normalizer = normalizer();
        for (raw, expected) in [
            ("tod", "today"),
            ("to", "tomorrow"),
            ("t", "today"),
            ("ton", "tonight"),
            ("tommorow", "tomorrow"),
            ("nxt wk", "next week"),
            ("prev yr", "last year"),
        ] {
            assert_eq!(
                normalizer.normalize(raw, "en").unwrap(),
                expected,
                "normalize({raw:?})"
            );
        }
    }

    #[test]
    fn parseable_input_is_returned_untouched() {
        let normalizer = normalizer();
        assert_eq!(
            normalizer.normalize("next week", "en").unwrap(),
            "next week"
        );
        // lowercased and trimmed, but otherwise what the parser accepted
        assert_eq!(
            normalizer.normalize("  Two Weeks Ago ", "en").unwrap(),
            "two weeks ago"
        );
    }

    #[test]
    fn normalization_is_idempotent_for_accepted_phrases() {
        let normalizer = normalizer();
        for phrase in ACCEPTED {
            assert_eq!(&normalizer.normalize(phrase, "en").unwrap(), phrase);
        }
    }

    #[test]
    fn numeric_month_round_trips_through_the_parser() {
        let normalizer = normalizer();
        assert_eq!(
            normalizer.normalize("25 december", "en").unwrap(),
            "25 of december"
        );
        let parsed = normalizer
            .parse_user_date("25 december", "en", false)
            .unwrap();
        assert!(parsed.is_some());
    }

    #[test]
    fn unparseable_input_is_absence_not_error() {
        let normalizer = normalizer();
        let parsed = normalizer
            .parse_user_date("gibberish xyzzy", "en", false)
            .unwrap();
        assert_eq!(parsed, None);
    }

    #[test]
    fn no_parser_means_no_passthrough_and_no_dates() {
        let normalizer = Normalizer::new();
        // the pipeline still normalizes…
        assert_eq!(normalizer.normalize("tod", "en").unwrap(), "today");
        // …but nothing ever parses
        assert_eq!(
            normalizer.parse_user_date("today", "en", false).unwrap(),
            None
        );
    }

    #[test]
    fn utc_flag_reaches_the_parser() {
        struct FlagParser(Arc<AtomicBool>);
        impl DateParser for FlagParser {
            fn parse(&self, _phrase: &str, use_utc: bool) -> Option<DateTime<Utc>> {
                self.0.store(use_utc, Ordering::Relaxed);
                Some(Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap())
            }
        }

        let flag = Arc::new(AtomicBool::new(false));
        let normalizer = Normalizer::builder()
            .parser(FlagParser(Arc::clone(&flag)))
            .build();
        normalizer.parse_user_date("today", "en", true).unwrap();
        assert!(flag.load(Ordering::Relaxed));
    }

    #[test]
    fn locale_codes_are_case_insensitive() {
        let normalizer = normalizer();
        assert_eq!(normalizer.normalize("tod", "EN").unwrap(), "today");
    }

    #[test]
    fn unknown_locale_errors_even_for_parseable_input() {
        // locale resolution comes before the passthrough check
        let normalizer = normalizer();
        assert!(normalizer.normalize("today", "xx").is_err());
    }

    #[test]
    fn locales_are_isolated() {
        let normalizer = normalizer();
        let english = normalizer.index("en").unwrap();
        let german = normalizer.index("de").unwrap();

        assert!(english.contains_key("december"));
        assert!(!english.contains_key("dezember"));
        assert!(german.contains_key("dezember"));
        assert!(!german.contains_key("december"));
    }

    #[test]
    fn german_phrases_normalize_against_german_vocabulary() {
        let normalizer = normalizer();
        assert_eq!(
            normalizer.normalize("übermor", "de").unwrap(),
            "übermorgen"
        );
        assert_eq!(normalizer.normalize("gest", "de").unwrap(), "gestern");
    }

    #[test]
    fn spanish_numeric_month_uses_the_spanish_connector() {
        let normalizer = normalizer();
        assert_eq!(
            normalizer.normalize("25 diciembre", "es").unwrap(),
            "25 de diciembre"
        );
    }

    #[test]
    fn concurrent_requests_share_one_index() {
        let normalizer = Normalizer::new();
        let reference = normalizer.index("en").unwrap();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let index = normalizer.index("en").unwrap();
                    assert!(Arc::ptr_eq(&reference, &index));
                    assert_eq!(normalizer.normalize("tod", "en").unwrap(), "today");
                });
            }
        });
    }
}
