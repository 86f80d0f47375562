//! Text Normalizer Module
//! Strips stray quoting and title-cases names/addresses with a fixed exception list.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Abbreviations that stay fully upper-case when title-casing.
static SHORT_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["AU2", "ASSB", "KT", "KB", "LRT", "MDDM", "FAMA", "JPS", "UTC"]
        .into_iter()
        .collect()
});

/// Remove one matching pair of surrounding quotes from trimmed text.
///
/// Scraped exports often wrap a cell in an extra layer of `"` or `'`.
/// Mismatched or absent quotes leave the (trimmed) input unchanged.
pub fn strip_quotes(text: &str) -> &str {
    let text = text.trim();
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Title-case a name or address, keeping known short forms upper-case.
pub fn title_case_with_exceptions(text: &str) -> String {
    let text = strip_quotes(text).to_lowercase();
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            let upper = word.to_uppercase();
            if SHORT_FORMS.contains(upper.as_str()) {
                upper
            } else {
                capitalize(word)
            }
        })
        .collect();
    words.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_matching_double_quotes() {
        assert_eq!(strip_quotes("\"Gerai Makan\""), "Gerai Makan");
    }

    #[test]
    fn strips_matching_single_quotes() {
        assert_eq!(strip_quotes("'Pasar Tani'"), "Pasar Tani");
    }

    #[test]
    fn leaves_mismatched_quotes_alone() {
        assert_eq!(strip_quotes("\"Pasar Tani'"), "\"Pasar Tani'");
        assert_eq!(strip_quotes("don't"), "don't");
    }

    #[test]
    fn strip_quotes_is_idempotent() {
        for input in ["\"Gerai Makan\"", "'Pasar Tani'", "plain", "", "  padded  "] {
            let once = strip_quotes(input);
            assert_eq!(strip_quotes(once), once);
        }
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(strip_quotes(""), "");
        assert_eq!(title_case_with_exceptions(""), "");
    }

    #[test]
    fn title_cases_regular_words() {
        assert_eq!(
            title_case_with_exceptions("pasar malam TAMAN megah"),
            "Pasar Malam Taman Megah"
        );
    }

    #[test]
    fn short_forms_stay_upper_case() {
        assert_eq!(
            title_case_with_exceptions("pasar malam kb mall"),
            "Pasar Malam KB Mall"
        );
        assert_eq!(title_case_with_exceptions("lrt station"), "LRT Station");
        for form in ["AU2", "ASSB", "KT", "KB", "LRT", "MDDM", "FAMA", "JPS", "UTC"] {
            assert_eq!(title_case_with_exceptions(&form.to_lowercase()), form);
            assert_eq!(title_case_with_exceptions(form), form);
        }
    }

    #[test]
    fn title_case_strips_quotes_first() {
        assert_eq!(
            title_case_with_exceptions("\"pasar malam au2\""),
            "Pasar Malam AU2"
        );
    }
}
