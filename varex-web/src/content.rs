//! Static page content, keyed by page name.
//!
//! Fragments are trusted site copy rendered with `dangerous_inner_html`.
//! Help section ids are the slugified section titles, so header help links
//! land on the right anchor.

pub fn page(name: &str) -> Option<&'static str> {
    match name {
        "home" => Some(HOME),
        "help" => Some(HELP),
        "helpResearch" => Some(HELP_RESEARCH),
        "variantsDefault" => Some(VARIANTS_DEFAULT),
        "variantsResearch" => Some(VARIANTS_RESEARCH),
        "researchWarning" => Some(RESEARCH_WARNING),
        "history" => Some(ABOUT_HISTORY),
        "thisSite" => Some(ABOUT_THIS_SITE),
        _ => None,
    }
}

const HOME: &str = r#"
<h2>Search BRCA1 and BRCA2 variants</h2>
<p>This site aggregates publicly available information on genetic variants
in the <em>BRCA1</em> and <em>BRCA2</em> genes. Search by gene name, HGVS
nomenclature, BIC designation, or genomic coordinate.</p>
"#;

const HELP: &str = r#"
<h1>Help</h1>
<h2 id="searching">Searching</h2>
<p>Type a gene name, HGVS string, or genomic coordinate into the search
box. Results update as you type.</p>
<h2 id="clinical-significance">Clinical Significance</h2>
<p>The clinical significance shown in the default view is the
expert-reviewed classification.</p>
<h2 id="date-last-evaluated">Date Last Evaluated</h2>
<p>The date the expert classification was last reviewed.</p>
"#;

const HELP_RESEARCH: &str = r#"
<h1>Help (all public data)</h1>
<h2 id="searching">Searching</h2>
<p>Type a gene name, HGVS string, or genomic coordinate into the search
box. Results update as you type.</p>
<h2 id="sources">Sources</h2>
<p>In the all-public-data view each variant may carry evidence from
multiple sources. Sources can be hidden from view or excluded from the
query entirely.</p>
<h2 id="clinical-significance">Clinical Significance</h2>
<p>Classifications from individual sources have not been expert reviewed
and may disagree with one another.</p>
"#;

const VARIANTS_DEFAULT: &str = r#"
<p>This view shows variants with expert-reviewed classifications only.</p>
"#;

const VARIANTS_RESEARCH: &str = r#"
<p>This view shows all publicly available data, including classifications
that have not been expert reviewed.</p>
"#;

const RESEARCH_WARNING: &str = r#"
<p>The all-public-data view includes conflicting and unreviewed
classifications that are not intended for clinical use. Continue?</p>
"#;

const ABOUT_HISTORY: &str = r#"
<h1>History</h1>
<p>This resource grew out of an effort to share variant classifications
across clinical laboratories and research groups worldwide.</p>
"#;

const ABOUT_THIS_SITE: &str = r#"
<h1>About this site</h1>
<p>The variant data shown here is aggregated from public archives and
curated submissions, and is refreshed with each data release.</p>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use varex_common::text::slugify;

    #[test]
    fn test_known_pages_resolve() {
        for name in [
            "home",
            "help",
            "helpResearch",
            "variantsDefault",
            "variantsResearch",
            "researchWarning",
            "history",
            "thisSite",
        ] {
            assert!(page(name).is_some(), "missing content page {name}");
        }
        assert!(page("nonsense").is_none());
    }

    #[test]
    fn test_help_anchor_ids_are_slugs() {
        // Header help links use slugified titles; the anchors must match.
        assert!(HELP.contains(&format!("id=\"{}\"", slugify("Clinical Significance"))));
        assert!(HELP.contains(&format!("id=\"{}\"", slugify("Date Last Evaluated"))));
    }
}
