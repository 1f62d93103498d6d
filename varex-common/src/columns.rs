//! Column and source registry for the variant table.

/// A displayable column: the record prop it reads and its header title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub prop: &'static str,
    pub title: &'static str,
}

const fn col(prop: &'static str, title: &'static str) -> Column {
    Column { prop, title }
}

/// Record props that together identify a variant. Used to build the
/// `/variant/:id` path, so changing this breaks old bookmarked links.
pub const DATABASE_KEY: &[&str] = &["Gene_symbol", "Genomic_Coordinate"];

/// Columns shown in the expert-reviewed (default) view.
pub const DEFAULT_COLUMNS: &[Column] = &[
    col("Gene_symbol", "Gene"),
    col("Genomic_Coordinate", "Genomic Coordinate"),
    col("HGVS_cDNA", "HGVS cDNA"),
    col("HGVS_Protein", "HGVS Protein"),
    col("Protein_Change", "Abbreviated AA Change"),
    col("BIC_Nomenclature", "BIC Designation"),
    col("Clinical_significance_ENIGMA", "Clinical Significance"),
    col("Date_last_evaluated_ENIGMA", "Date Last Evaluated"),
];

/// Superset shown in research mode: everything above plus per-source
/// evidence columns.
pub const RESEARCH_COLUMNS: &[Column] = &[
    col("Gene_symbol", "Gene"),
    col("Genomic_Coordinate", "Genomic Coordinate"),
    col("HGVS_cDNA", "HGVS cDNA"),
    col("HGVS_Protein", "HGVS Protein"),
    col("Protein_Change", "Abbreviated AA Change"),
    col("BIC_Nomenclature", "BIC Designation"),
    col("Clinical_significance_ENIGMA", "Clinical Significance"),
    col("Date_last_evaluated_ENIGMA", "Date Last Evaluated"),
    col("Comment_on_clinical_significance_ENIGMA", "Comment on Clinical Significance"),
    col("Clinical_significance_citations_ENIGMA", "Clinical Significance Citations"),
    col("Assertion_method_citation_ENIGMA", "Assertion Method Citation"),
    col("Source", "Source(s)"),
    col("Source_URL", "Source URL"),
    col("URL_ENIGMA", "ENIGMA Analysis"),
    col("Allele_frequency", "Allele Frequency"),
    col("Clinical_Significance_ClinVar", "Clinical Significance (ClinVar)"),
    col("Pathogenicity_expert", "Pathogenicity"),
];

/// Data sources subject to per-source visibility selection (research mode).
pub const SOURCES: &[&str] = &[
    "ENIGMA",
    "ClinVar",
    "1000_Genomes",
    "ExAC",
    "LOVD",
    "exLOVD",
    "BIC",
    "ESP",
];

/// Look up a column title by prop, across both registries.
pub fn title_for(prop: &str) -> Option<&'static str> {
    RESEARCH_COLUMNS
        .iter()
        .chain(DEFAULT_COLUMNS)
        .find(|c| c.prop == prop)
        .map(|c| c.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_key_props_are_columns() {
        for key in DATABASE_KEY {
            assert!(
                DEFAULT_COLUMNS.iter().any(|c| c.prop == *key),
                "database key {key} missing from default columns"
            );
        }
    }

    #[test]
    fn test_research_columns_are_a_superset() {
        for c in DEFAULT_COLUMNS {
            assert!(
                RESEARCH_COLUMNS.iter().any(|r| r.prop == c.prop),
                "default column {} missing from research columns",
                c.prop
            );
        }
    }

    #[test]
    fn test_title_lookup() {
        assert_eq!(title_for("Gene_symbol"), Some("Gene"));
        assert_eq!(title_for("No_such_prop"), None);
    }
}
