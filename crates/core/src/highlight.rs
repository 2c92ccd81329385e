//! Advisor bio keyword highlighting.
//!
//! Content editors maintain a newline-delimited keyword list per
//! advisor; matching phrases in the bio text are wrapped in a highlight
//! span at serve time. Matching is whole-word and case-insensitive, and
//! longer keywords win over shorter overlapping ones.

use regex::RegexBuilder;

/// Opening marker inserted around matched keywords.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="advisor-highlight">"#;
/// Closing marker inserted around matched keywords.
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Split a newline-delimited keyword list into trimmed, non-empty
/// entries.
pub fn keyword_list(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Wrap whole-word matches of each keyword in a highlight span.
///
/// - Keywords of length <= 2 are ignored.
/// - Keywords are tried longest-first, so a short keyword never
///   pre-empts a longer one it overlaps with.
/// - Matches are located against the original text and each region is
///   claimed at most once; a keyword contained inside an already
///   highlighted phrase is not wrapped again.
pub fn highlight_keywords(text: &str, keywords_raw: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut keywords = keyword_list(keywords_raw);
    keywords.retain(|k| k.chars().count() > 2);
    if keywords.is_empty() {
        return text.to_string();
    }
    keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

    // Byte ranges of the original text already claimed by a match.
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for keyword in keywords {
        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(_) => continue,
        };
        for m in re.find_iter(text) {
            let overlaps = claimed
                .iter()
                .any(|&(s, e)| m.start() < e && s < m.end());
            if !overlaps {
                claimed.push((m.start(), m.end()));
            }
        }
    }

    if claimed.is_empty() {
        return text.to_string();
    }
    claimed.sort_unstable();

    let mut out = String::with_capacity(
        text.len() + claimed.len() * (HIGHLIGHT_OPEN.len() + HIGHLIGHT_CLOSE.len()),
    );
    let mut cursor = 0;
    for (start, end) in claimed {
        out.push_str(&text[cursor..start]);
        out.push_str(HIGHLIGHT_OPEN);
        out.push_str(&text[start..end]);
        out.push_str(HIGHLIGHT_CLOSE);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(s: &str) -> String {
        format!("{HIGHLIGHT_OPEN}{s}{HIGHLIGHT_CLOSE}")
    }

    #[test]
    fn wraps_both_phrases_without_double_wrapping() {
        let text = "Dr. Ravi Shankar is a thought leader in Data Science & AI-ML";
        let keywords = "thought leader\nData Science & AI-ML";
        let result = highlight_keywords(text, keywords);
        assert_eq!(
            result,
            format!(
                "Dr. Ravi Shankar is a {} in {}",
                wrapped("thought leader"),
                wrapped("Data Science & AI-ML"),
            )
        );
    }

    #[test]
    fn longer_keyword_beats_contained_shorter_one() {
        let text = "A thought leader and a leader of teams";
        let keywords = "leader\nthought leader";
        let result = highlight_keywords(text, keywords);
        // "thought leader" claims its region first; the standalone
        // "leader" is still wrapped on its own.
        assert_eq!(
            result,
            format!(
                "A {} and a {} of teams",
                wrapped("thought leader"),
                wrapped("leader"),
            )
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = highlight_keywords("Experts in DATA science", "data science");
        assert_eq!(result, format!("Experts in {}", wrapped("DATA science")));
    }

    #[test]
    fn whole_word_only() {
        let result = highlight_keywords("leadership is not a leader", "leader");
        assert_eq!(
            result,
            format!("leadership is not a {}", wrapped("leader"))
        );
    }

    #[test]
    fn short_keywords_ignored() {
        assert_eq!(highlight_keywords("AI is here", "AI\n"), "AI is here");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(highlight_keywords("", "anything"), "");
        assert_eq!(highlight_keywords("some text", ""), "some text");
        assert_eq!(highlight_keywords("some text", "\n  \n"), "some text");
    }

    #[test]
    fn keyword_list_trims_and_drops_blanks() {
        assert_eq!(
            keyword_list("  ISB \n\nVisiting Professor\n"),
            vec!["ISB", "Visiting Professor"]
        );
    }
}
