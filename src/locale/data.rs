use crate::locale::{Locale, LocaleDescriptor, PatternEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
($(
        $code:ident, $code_str:literal, $name:literal,
        months: [ $($m:literal),* $(,)? ],
        weekdays: [ $($w:literal),* $(,)? ],
        units: [ $($u:literal),* $(,)? ],
        numerals: [ $($n:literal),* $(,)? ],
        articles: [ $($a:literal),* $(,)? ],
        time_markers: [ $($t:literal),* $(,)? ],
        month_map: [ $( $mk:literal => $mv:literal ),* $(,)? ],
        weekday_map: [ $( $wk:literal => $wv:literal ),* $(,)? ],
        unit_map: [ $( $uk:literal => $uv:literal ),* $(,)? ],
        modifier_map: [ $( $ok:literal => $ov:literal ),* $(,)? ],
        patterns: [ $( ($pn:literal, $pa:literal) ),* $(,)? ]
    ),* $(,)?) => {
        // Public `Locale` constants
        $(
            pub const $code: Locale = Locale { code: $code_str, name: $name };
        )*

        // Per-locale static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::PatternEntry;

                    pub static MONTHS: &[&str] = &[$($m),*];
                    pub static WEEKDAYS: &[&str] = &[$($w),*];
                    pub static UNITS: &[&str] = &[$($u),*];
                    pub static NUMERALS: &[&str] = &[$($n),*];
                    pub static ARTICLES: &[&str] = &[$($a),*];
                    pub static TIME_MARKERS: &[&str] = &[$($t),*];

                    pub static MONTH_MAP: &[(&str, &str)] = &[$(($mk, $mv)),*];
                    pub static WEEKDAY_MAP: &[(&str, &str)] = &[$(($wk, $wv)),*];
                    pub static UNIT_MAP: &[(&str, &str)] = &[$(($uk, $uv)),*];
                    pub static MODIFIER_MAP: &[(&str, &str)] = &[$(($ok, $ov)),*];

                    pub static PATTERNS: &[PatternEntry] = &[
                        $( PatternEntry { name: $pn, alternation: $pa } ),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LOCALE_TABLE: Map<&'static str, LocaleDescriptor> = phf_map! {
                $(
                    $code_str => LocaleDescriptor {
                        code: $code_str,
                        months: [<$code:lower _data>]::MONTHS,
                        weekdays: [<$code:lower _data>]::WEEKDAYS,
                        units: [<$code:lower _data>]::UNITS,
                        numerals: [<$code:lower _data>]::NUMERALS,
                        articles: [<$code:lower _data>]::ARTICLES,
                        time_markers: [<$code:lower _data>]::TIME_MARKERS,
                        month_map: [<$code:lower _data>]::MONTH_MAP,
                        weekday_map: [<$code:lower _data>]::WEEKDAY_MAP,
                        unit_map: [<$code:lower _data>]::UNIT_MAP,
                        modifier_map: [<$code:lower _data>]::MODIFIER_MAP,
                        patterns: [<$code:lower _data>]::PATTERNS,
                    }
                ),*
            };
        }

        static ALL_LOCALES: &[Locale] = &[$($code),*];

        /// Every built-in locale, in definition order.
        pub fn all_locales() -> &'static [Locale] {
            ALL_LOCALES
        }

        /// Helper: `Locale::from_code`
        pub fn from_code(code: &str) -> Option<Locale> {
            let lower = code.to_ascii_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Locale definitions (single source of truth)
//
//    Word-list fields carry the full surface forms; the *_map dictionaries
//    additionally carry the accepted short forms. Token values mirror what
//    downstream phrase interpreters expect (month/weekday ordinals, unit
//    codes, signed day shifts) but the normalizer itself only reads keys.
//    An empty `articles` list turns the numeric-month rewrite off for that
//    locale ("25. Dezember" has no spoken connector, unlike "25 of
//    december" / "25 de diciembre").
// ---------------------------------------------------------------------------
define_locales! {
    EN, "en", "English",
    months: [
        "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ],
    weekdays: [
        "sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    ],
    units: [
        "millisecond", "second", "minute", "hour", "day", "week", "month", "year",
    ],
    numerals: [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ],
    articles: ["of", "the", "a", "an"],
    time_markers: ["at", "on", "in"],
    month_map: [
        "january" => "1", "february" => "2", "march" => "3", "april" => "4",
        "may" => "5", "june" => "6", "july" => "7", "august" => "8",
        "september" => "9", "october" => "10", "november" => "11", "december" => "12",
        "jan" => "1", "feb" => "2", "mar" => "3", "apr" => "4", "jun" => "6",
        "jul" => "7", "aug" => "8", "sep" => "9", "sept" => "9", "oct" => "10",
        "nov" => "11", "dec" => "12",
    ],
    weekday_map: [
        "sunday" => "0", "monday" => "1", "tuesday" => "2", "wednesday" => "3",
        "thursday" => "4", "friday" => "5", "saturday" => "6",
        "sun" => "0", "mon" => "1", "tue" => "2", "tues" => "2", "wed" => "3",
        "thu" => "4", "thur" => "4", "thurs" => "4", "fri" => "5", "sat" => "6",
    ],
    unit_map: [
        "millisecond" => "ms", "second" => "s", "sec" => "s", "minute" => "min",
        "hour" => "h", "hr" => "h", "day" => "d", "week" => "w",
        "month" => "mo", "year" => "y",
    ],
    modifier_map: [
        "yesterday" => "-1", "today" => "0", "tonight" => "0", "tomorrow" => "1",
        "now" => "0", "last" => "-1", "this" => "0", "next" => "1", "ago" => "-1",
    ],
    patterns: [
        ("duration", "<num> seconds|<num> minutes|<num> hours|<num> days|<num> weeks|<num> months|<num> years"),
        ("shift", "next|last|this|ago"),
        ("edge", "beginning|first|end"),
    ],

    DE, "de", "German",
    months: [
        "januar", "februar", "märz", "april", "mai", "juni",
        "juli", "august", "september", "oktober", "november", "dezember",
    ],
    weekdays: [
        "sonntag", "montag", "dienstag", "mittwoch", "donnerstag", "freitag", "samstag",
    ],
    units: [
        "millisekunde", "sekunde", "minute", "stunde", "tag", "woche", "monat", "jahr",
    ],
    numerals: [
        "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    ],
    articles: [],
    time_markers: ["um", "am"],
    month_map: [
        "januar" => "1", "februar" => "2", "märz" => "3", "april" => "4",
        "mai" => "5", "juni" => "6", "juli" => "7", "august" => "8",
        "september" => "9", "oktober" => "10", "november" => "11", "dezember" => "12",
        "jan" => "1", "feb" => "2", "mär" => "3", "apr" => "4", "jun" => "6",
        "jul" => "7", "aug" => "8", "sep" => "9", "okt" => "10", "nov" => "11",
        "dez" => "12",
    ],
    weekday_map: [
        "sonntag" => "0", "montag" => "1", "dienstag" => "2", "mittwoch" => "3",
        "donnerstag" => "4", "freitag" => "5", "samstag" => "6",
        "so" => "0", "mo" => "1", "di" => "2", "mi" => "3", "do" => "4",
        "fr" => "5", "sa" => "6",
    ],
    unit_map: [
        "millisekunde" => "ms", "sekunde" => "s", "sek" => "s", "minute" => "min",
        "stunde" => "h", "std" => "h", "tag" => "d", "woche" => "w",
        "monat" => "mo", "jahr" => "y",
    ],
    modifier_map: [
        "vorgestern" => "-2", "gestern" => "-1", "heute" => "0", "morgen" => "1",
        "übermorgen" => "2", "jetzt" => "0", "letzte" => "-1", "diese" => "0",
        "nächste" => "1", "vor" => "-1",
    ],
    patterns: [
        ("duration", "<num> sekunden|<num> minuten|<num> stunden|<num> tage|<num> wochen|<num> monate|<num> jahre"),
        ("shift", "nächsten|letzten|diesen"),
    ],

    ES, "es", "Spanish",
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio",
        "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
    ],
    weekdays: [
        "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
    ],
    units: [
        "milisegundo", "segundo", "minuto", "hora", "día", "semana", "mes", "año",
    ],
    numerals: [
        "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
    ],
    articles: ["de", "el", "la"],
    time_markers: ["a", "al"],
    month_map: [
        "enero" => "1", "febrero" => "2", "marzo" => "3", "abril" => "4",
        "mayo" => "5", "junio" => "6", "julio" => "7", "agosto" => "8",
        "septiembre" => "9", "octubre" => "10", "noviembre" => "11", "diciembre" => "12",
        "ene" => "1", "feb" => "2", "mar" => "3", "abr" => "4", "jun" => "6",
        "jul" => "7", "ago" => "8", "sep" => "9", "oct" => "10", "nov" => "11",
        "dic" => "12",
    ],
    weekday_map: [
        "domingo" => "0", "lunes" => "1", "martes" => "2", "miércoles" => "3",
        "jueves" => "4", "viernes" => "5", "sábado" => "6",
        "dom" => "0", "lun" => "1", "mié" => "3", "jue" => "4", "vie" => "5",
        "sáb" => "6",
    ],
    unit_map: [
        "milisegundo" => "ms", "segundo" => "s", "seg" => "s", "minuto" => "min",
        "hora" => "h", "día" => "d", "semana" => "w", "mes" => "mo", "año" => "y",
    ],
    modifier_map: [
        "anteayer" => "-2", "ayer" => "-1", "hoy" => "0", "anoche" => "-1",
        "mañana" => "1", "ahora" => "0", "pasado" => "-1", "próximo" => "1",
        "hace" => "-1",
    ],
    patterns: [
        ("duration", "<num> segundos|<num> minutos|<num> horas|<num> días|<num> semanas|<num> meses|<num> años"),
        ("shift", "próxima|pasada|hace"),
    ],

    FR, "fr", "French",
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin",
        "juillet", "août", "septembre", "octobre", "novembre", "décembre",
    ],
    weekdays: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    units: [
        "milliseconde", "seconde", "minute", "heure", "jour", "semaine", "mois", "an",
    ],
    numerals: [
        "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
    ],
    articles: [],
    time_markers: ["à"],
    month_map: [
        "janvier" => "1", "février" => "2", "mars" => "3", "avril" => "4",
        "mai" => "5", "juin" => "6", "juillet" => "7", "août" => "8",
        "septembre" => "9", "octobre" => "10", "novembre" => "11", "décembre" => "12",
        "janv" => "1", "févr" => "2", "avr" => "4", "juil" => "7", "sept" => "9",
        "oct" => "10", "nov" => "11", "déc" => "12",
    ],
    weekday_map: [
        "dimanche" => "0", "lundi" => "1", "mardi" => "2", "mercredi" => "3",
        "jeudi" => "4", "vendredi" => "5", "samedi" => "6",
        "dim" => "0", "lun" => "1", "mar" => "2", "mer" => "3", "jeu" => "4",
        "ven" => "5", "sam" => "6",
    ],
    unit_map: [
        "milliseconde" => "ms", "seconde" => "s", "sec" => "s", "minute" => "min",
        "heure" => "h", "jour" => "d", "semaine" => "w", "mois" => "mo", "an" => "y",
    ],
    modifier_map: [
        "avant-hier" => "-2", "hier" => "-1", "aujourd'hui" => "0", "demain" => "1",
        "après-demain" => "2", "maintenant" => "0", "dernier" => "-1", "prochain" => "1",
    ],
    patterns: [
        ("duration", "<num> secondes|<num> minutes|<num> heures|<num> jours|<num> semaines|<num> mois|<num> ans"),
        ("shift", "prochaine|dernière"),
    ],
}
