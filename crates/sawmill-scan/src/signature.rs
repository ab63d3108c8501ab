//! Log-line normalization into error signatures.
//!
//! A signature is what remains of a line once its leading timestamp token
//! and any dotted-quad (IPv4-shaped) tokens are removed. Two lines that
//! differ only in when they happened or which host they mention collapse
//! to the same signature, which makes the signature the dedup key for
//! error aggregation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading timestamp token: `DD.MM.YYYY HH:MM:SS` with an optional
/// four-digit sub-second suffix, followed by whitespace.
static TIMESTAMP_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}(:\d{4})?\s+")
        .unwrap_or_else(|_| unreachable!())
});

/// Dotted-quad token anywhere in the text, e.g. an IPv4 address.
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+\.\d+").unwrap_or_else(|_| unreachable!()));

/// Extracts the signature from a raw log line.
///
/// Returns `None` for lines that do not start with the timestamp shape;
/// such lines carry no signature and are excluded from aggregation.
#[must_use]
pub fn from_line(line: &str) -> Option<String> {
    let rest = TIMESTAMP_PREFIX.find(line).map(|m| &line[m.end()..])?;
    Some(scrub(rest))
}

/// Scrubs dotted-quad tokens out of `text` and trims the ends.
///
/// Idempotent: scrubbing an already-scrubbed signature changes nothing.
#[must_use]
pub fn scrub(text: &str) -> String {
    DOTTED_QUAD.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    // ===========================================
    // Timestamp shape acceptance
    // ===========================================

    #[test_case("05.01.2024 10:00:00 Error connecting to 192.168.1.5", Some("Error connecting to") ; "plain timestamp")]
    #[test_case("05.01.2024 10:00:00:1234 Error connecting to 10.0.0.9", Some("Error connecting to") ; "subsecond timestamp")]
    #[test_case("05.01.2024 10:00:00 disk full", Some("disk full") ; "no address in payload")]
    #[test_case("plain text without timestamp", None ; "no timestamp")]
    #[test_case("", None ; "empty line")]
    #[test_case("5.1.2024 10:00:00 single digit day", None ; "day needs two digits")]
    #[test_case("05.01.24 10:00:00 short year", None ; "year needs four digits")]
    #[test_case("05.01.2024 10:00 missing seconds", None ; "time needs seconds")]
    #[test_case("05.01.2024 10:00:00", None ; "bare timestamp without payload")]
    #[test_case("05.01.2024 10:00:00:12345 five digit subsecond", None ; "subsecond needs four digits")]
    #[test_case("05.01.2024  10:00:00 double space", None ; "single space between date and time")]
    fn from_line_cases(line: &str, expected: Option<&str>) {
        assert_eq!(from_line(line).as_deref(), expected);
    }

    #[test]
    fn from_line_strips_every_address() {
        let line = "05.01.2024 10:00:00 route 10.0.0.1 unreachable via 10.0.0.254";
        assert_eq!(from_line(line).as_deref(), Some("route  unreachable via"));
    }

    #[test]
    fn lines_differing_only_in_timestamp_and_address_collapse() {
        let a = from_line("05.01.2024 10:00:00 Error connecting to 192.168.1.5");
        let b = from_line("06.02.2024 23:59:59:0001 Error connecting to 10.0.0.9");
        assert_eq!(a, b);
    }

    // ===========================================
    // Scrubbing
    // ===========================================

    #[test]
    fn scrub_removes_interior_addresses_without_trimming_interior_space() {
        assert_eq!(scrub("connect 1.2.3.4 failed"), "connect  failed");
    }

    #[test]
    fn scrub_trims_ends() {
        assert_eq!(scrub("  padded  "), "padded");
        assert_eq!(scrub("192.168.1.1"), "");
    }

    #[test]
    fn scrub_leaves_partial_quads_alone() {
        assert_eq!(scrub("version 1.2.3 released"), "version 1.2.3 released");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_scrub_is_idempotent(text in ".*") {
            let once = scrub(&text);
            prop_assert_eq!(scrub(&once), once.clone());
        }

        #[test]
        fn prop_scrubbed_text_has_no_dotted_quads(text in ".*") {
            let scrubbed = scrub(&text);
            prop_assert!(!DOTTED_QUAD.is_match(&scrubbed));
        }

        #[test]
        fn prop_timestamped_lines_reduce_to_scrubbed_payload(payload in "[ -~]{0,60}") {
            let line = format!("05.01.2024 10:00:00 {payload}");
            prop_assert_eq!(from_line(&line), Some(scrub(&payload)));
        }
    }
}
