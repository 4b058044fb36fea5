use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Recognized month names, canonical (lowercase) spellings.
pub const MONTHS: [&str; 12] = [
    "styczeń",
    "luty",
    "marzec",
    "kwiecień",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpień",
    "wrzesień",
    "październik",
    "listopad",
    "grudzień",
];

/// Day abbreviations in week order. Position in this table defines the
/// ordering used by range expansion, including wraparound.
pub const DAY_ABBR_ORDER: [&str; 7] = ["pn", "wt", "sr", "cz", "pt", "so", "nd"];

pub static DAY_FULL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("pn", "poniedziałek"),
        ("wt", "wtorek"),
        ("sr", "środa"),
        ("cz", "czwartek"),
        ("pt", "piątek"),
        ("so", "sobota"),
        ("nd", "niedziela"),
    ])
});

/// Accepted time-of-day spellings mapped to their canonical form. Both the
/// short codes and the long-form synonyms are recognized.
pub static TIME_OF_DAY_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("r", "rano"),
        ("w", "wieczór"),
        ("rano", "rano"),
        ("wieczór", "wieczór"),
        ("wieczorem", "wieczór"),
    ])
});

/// Time of day filled in for days the input list does not cover.
pub const DEFAULT_TIME_OF_DAY: &str = "rano";

/// Labels a generated record may carry.
pub const MODEL_LABELS: [&str; 3] = ["A", "B", "C"];

/// The one model whose time values aggregate mode sums up.
pub const TRACKED_MODEL: &str = "A";

pub fn day_position(abbr: &str) -> Option<usize> {
    DAY_ABBR_ORDER.iter().position(|d| *d == abbr)
}
