//! Small text helpers shared across the site.

/// Normalize a search term before it goes into the URL: strip leading and
/// trailing whitespace and collapse internal runs to single spaces.
pub fn trim_search_term(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Slug for help-section anchors: lowercase alphanumerics, with every run
/// of other characters collapsed to a single hyphen, none at either end.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_edges() {
        assert_eq!(trim_search_term("brca1 "), "brca1");
        assert_eq!(trim_search_term("  c.68-7T>A"), "c.68-7T>A");
    }

    #[test]
    fn test_trim_collapses_internal_runs() {
        assert_eq!(trim_search_term("brca1\t  5382insC"), "brca1 5382insC");
    }

    #[test]
    fn test_trim_whitespace_only_is_empty() {
        assert_eq!(trim_search_term(" \t "), "");
    }

    #[test]
    fn test_slugify_titles() {
        assert_eq!(slugify("Clinical Significance"), "clinical-significance");
        assert_eq!(slugify("  What is BRCA?  "), "what-is-brca");
        assert_eq!(slugify("HGVS (cDNA)"), "hgvs-cdna");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("???"), "");
        assert_eq!(slugify(""), "");
    }
}
