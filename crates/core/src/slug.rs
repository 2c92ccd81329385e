//! URL slug generation.
//!
//! Slugs are derived from a human title exactly once, on first save.
//! Editing the title later never regenerates the slug, so published
//! URLs stay stable.

/// Convert a human title into a URL-safe slug.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every other run
/// of characters into a single hyphen. Leading/trailing hyphens are
/// trimmed.
///
/// # Examples
///
/// ```
/// use yume_core::slug::slugify;
///
/// assert_eq!(slugify("ASPIRE Project"), "aspire-project");
/// assert_eq!(slugify("Excel  for   Data Analysis"), "excel-for-data-analysis");
/// assert_eq!(slugify("  What's New in 2025?  "), "what-s-new-in-2025");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Pick the first slug not present in `taken`, starting from `base` and
/// appending `-2`, `-3`, ... on collision.
///
/// `taken` is the set of already-persisted slugs that could collide
/// (typically fetched with `slug = base OR slug LIKE base || '-%'`).
pub fn next_available(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|s| s == base) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.iter().any(|s| *s == candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("ASPIRE Project"), "aspire-project");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(slugify("SQL & Excel -- Together!"), "sql-excel-together");
    }

    #[test]
    fn leading_and_trailing_noise_trimmed() {
        assert_eq!(slugify("  ...Data Viz...  "), "data-viz");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn no_collision_keeps_base() {
        assert_eq!(next_available("aspire-project", &[]), "aspire-project");
    }

    #[test]
    fn collision_appends_counter() {
        let taken = vec!["aspire-project".to_string()];
        assert_eq!(next_available("aspire-project", &taken), "aspire-project-2");
    }

    #[test]
    fn counter_skips_existing_suffixes() {
        let taken = vec![
            "aspire-project".to_string(),
            "aspire-project-2".to_string(),
            "aspire-project-3".to_string(),
        ];
        assert_eq!(next_available("aspire-project", &taken), "aspire-project-4");
    }
}
