//! Parsing of `"Title (YYYY)"` display strings.
//!
//! Metadata lookups want the bare title and year as separate query
//! parameters, while the store and the aggregation key keep the combined
//! string verbatim.

use std::sync::OnceLock;

static TITLE_YEAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

fn title_year_regex() -> &'static regex::Regex {
    TITLE_YEAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"^(.*)\((\d{4})\)\s*$").expect("title/year regex is valid")
    })
}

/// Split a display title into `(title, year)`. Strings without a trailing
/// 4-digit parenthesized year come back whole with `None` for the year.
pub fn split_title_and_year(full: &str) -> (String, Option<String>) {
    match title_year_regex().captures(full) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].to_string()),
        ),
        None => (full.to_string(), None),
    }
}

/// Combine a bare title and year back into the canonical display form.
pub fn full_title(title: &str, year: &str) -> String {
    format!("{title} ({year})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_title_with_year() {
        let (title, year) = split_title_and_year("The Matrix (1999)");
        assert_eq!(title, "The Matrix");
        assert_eq!(year.as_deref(), Some("1999"));
    }

    #[test]
    fn splits_title_with_trailing_whitespace() {
        let (title, year) = split_title_and_year("Heat (1995)  ");
        assert_eq!(title, "Heat");
        assert_eq!(year.as_deref(), Some("1995"));
    }

    #[test]
    fn title_without_year_is_returned_whole() {
        let (title, year) = split_title_and_year("Alien");
        assert_eq!(title, "Alien");
        assert!(year.is_none());
    }

    #[test]
    fn parenthesized_non_year_is_not_split() {
        let (title, year) = split_title_and_year("What (a) Movie");
        assert_eq!(title, "What (a) Movie");
        assert!(year.is_none());
    }

    #[test]
    fn inner_parens_keep_last_year_group() {
        // Greedy prefix match: only the trailing (YYYY) is treated as the year.
        let (title, year) = split_title_and_year("Crash (2004) (2005)");
        assert_eq!(title, "Crash (2004)");
        assert_eq!(year.as_deref(), Some("2005"));
    }

    #[test]
    fn full_title_round_trips() {
        let combined = full_title("The Matrix", "1999");
        assert_eq!(combined, "The Matrix (1999)");
        let (title, year) = split_title_and_year(&combined);
        assert_eq!(title, "The Matrix");
        assert_eq!(year.as_deref(), Some("1999"));
    }
}
