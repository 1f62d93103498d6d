use dioxus::prelude::*;

use varex_common::{variant_path, Column, VariantRecord, DEFAULT_COLUMNS, RESEARCH_COLUMNS};

use crate::api;
use crate::pages::use_mode;
use crate::{Route, VariantsQuery};

#[component]
pub fn VariantDetail(id: String) -> Element {
    let mut mode = use_mode();
    let path_id = id.clone();
    let data = use_resource(move || {
        let id = path_id.clone();
        async move {
            let key = variant_path::split(&id).map_err(|e| e.to_string())?;
            api::fetch_variant(&key).await
        }
    });
    let read = data.read();

    let result = match &*read {
        Some(Ok(Some(record))) => Ok(record.clone()),
        Some(Ok(None)) => Err("Variant not found".to_string()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                div { class: "flex items-center justify-center py-16 text-gray-400",
                    "Loading..."
                }
            };
        }
    };
    drop(read);

    let columns: &[Column] = if mode.mode().is_research() {
        RESEARCH_COLUMNS
    } else {
        DEFAULT_COLUMNS
    };

    match result {
        Ok(record) => rsx! {
            div { class: "container mx-auto py-8 max-w-3xl flex flex-col gap-6",
                h3 { class: "text-center text-2xl font-bold", "Variant Detail" }
                table { class: "w-full text-sm border",
                    tbody {
                        for column in columns.iter().copied() {
                            DetailRow { column, record: record.clone() }
                        }
                    }
                }
                if !mode.mode().is_research() {
                    button {
                        class: "border rounded px-3 py-1.5 self-start",
                        onclick: move |_| mode.toggle(),
                        "Show All Public Data on this Variant"
                    }
                }
            }
        },
        Err(e) => rsx! {
            div { class: "container mx-auto py-8 max-w-3xl",
                p { class: "text-red-600", "{e}" }
                Link {
                    class: "hover:underline",
                    to: Route::Variants { query: VariantsQuery::default() },
                    "Back to all variants"
                }
            }
        },
    }
}

const PUBMED: &str = "http://ncbi.nlm.nih.gov/pubmed/";

#[component]
fn DetailRow(column: Column, record: VariantRecord) -> Element {
    let raw = record.get(column.prop).unwrap_or_default();

    let rendered = match cell_content(column.prop, raw) {
        CellContent::Text(text) => rsx! { "{text}" },
        CellContent::Link { href, label } => rsx! {
            a {
                class: "text-blue-600 hover:underline",
                target: "_blank",
                href: "{href}",
                "{label}"
            }
        },
        CellContent::Citation(pieces) => {
            let parts = pieces.into_iter().map(|piece| match piece {
                CitationPiece::Text(text) => rsx! { span { "{text}" } },
                CitationPiece::Pmid(id) => rsx! {
                    a {
                        class: "text-blue-600 hover:underline",
                        target: "_blank",
                        href: "{PUBMED}{id}",
                        "PMID: {id}"
                    }
                },
            });
            rsx! { {parts} }
        }
    };

    rsx! {
        tr { class: "border-t",
            td { class: "px-3 py-1.5 font-semibold w-1/3", "{column.title}" }
            td { class: "px-3 py-1.5", {rendered} }
        }
    }
}

/// Renderable content of one detail cell.
#[derive(Clone, Debug, PartialEq)]
enum CellContent {
    Text(String),
    Link { href: String, label: &'static str },
    Citation(Vec<CitationPiece>),
}

#[derive(Clone, Debug, PartialEq)]
enum CitationPiece {
    Text(String),
    Pmid(String),
}

/// Per-prop display rules: evidence URLs and the assertion-method citation
/// become outbound links, citation text gets its PMID references linked to
/// PubMed, the rest falls through to [`display_value`].
fn cell_content(prop: &str, value: &str) -> CellContent {
    match prop {
        "URL_ENIGMA" if !value.is_empty() => CellContent::Link {
            href: value.to_string(),
            label: "link to multifactorial analysis",
        },
        "Assertion_method_citation_ENIGMA" if !value.is_empty() => CellContent::Link {
            href: value.to_string(),
            label: "Enigma Rules version Mar 26, 2015",
        },
        // Only the exLOVD analysis URLs are linkable; the field may carry a
        // comma-joined list, of which the first entry is the analysis.
        "Source_URL" if value.starts_with("http://hci-exlovd.hci.utah.edu") => CellContent::Link {
            href: value.split(',').next().unwrap_or(value).to_string(),
            label: "link to multifactorial analysis",
        },
        "Comment_on_clinical_significance_ENIGMA" | "Clinical_significance_citations_ENIGMA" => {
            CellContent::Citation(split_pmid_citations(value))
        }
        _ => CellContent::Text(display_value(prop, value)),
    }
}

/// Split citation text around `PMID: 12345` references (the colon and
/// space are each optional), keeping the surrounding prose.
fn split_pmid_citations(text: &str) -> Vec<CitationPiece> {
    let mut pieces = Vec::new();
    let mut plain = String::new();
    let mut rest = text;
    while let Some(pos) = rest.find("PMID") {
        let (before, after) = rest.split_at(pos);
        let mut tail = &after["PMID".len()..];
        if let Some(t) = tail.strip_prefix(':') {
            tail = t;
        }
        if let Some(t) = tail.strip_prefix(' ') {
            tail = t;
        }
        let digits: String = tail.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            // "PMID" without a number stays prose.
            plain.push_str(before);
            plain.push_str("PMID");
            rest = &after["PMID".len()..];
        } else {
            plain.push_str(before);
            if !plain.is_empty() {
                pieces.push(CitationPiece::Text(std::mem::take(&mut plain)));
            }
            rest = &tail[digits.len()..];
            pieces.push(CitationPiece::Pmid(digits));
        }
    }
    plain.push_str(rest);
    if !plain.is_empty() {
        pieces.push(CitationPiece::Text(plain));
    }
    pieces
}

/// Per-prop display tweaks: HGVS strings are shown without their reference
/// sequence prefix, evaluation dates in long form.
fn display_value(prop: &str, value: &str) -> String {
    match prop {
        "HGVS_cDNA" | "HGVS_Protein" => value
            .split_once(':')
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_else(|| value.to_string()),
        "Date_last_evaluated_ENIGMA" => format_evaluation_date(value),
        _ => value.to_string(),
    }
}

/// Dates arrive as `M/D/YY`; show them as `D Month YYYY`. Anything that
/// does not parse passes through untouched.
fn format_evaluation_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%m/%d/%y")
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hgvs_shown_without_reference_prefix() {
        assert_eq!(display_value("HGVS_cDNA", "NM_007294.3:c.1105G>A"), "c.1105G>A");
        assert_eq!(display_value("HGVS_cDNA", "c.1105G>A"), "c.1105G>A");
    }

    #[test]
    fn test_evaluation_date_long_form() {
        assert_eq!(
            display_value("Date_last_evaluated_ENIGMA", "3/26/15"),
            "26 March 2015"
        );
        assert_eq!(display_value("Date_last_evaluated_ENIGMA", "soon"), "soon");
    }

    #[test]
    fn test_other_props_pass_through() {
        assert_eq!(display_value("Gene_symbol", "BRCA1"), "BRCA1");
    }

    #[test]
    fn test_evidence_urls_render_as_links() {
        assert_eq!(
            cell_content("URL_ENIGMA", "http://example.org/analysis"),
            CellContent::Link {
                href: "http://example.org/analysis".to_string(),
                label: "link to multifactorial analysis",
            }
        );
        // Empty URL fields stay empty cells, not dead links.
        assert_eq!(cell_content("URL_ENIGMA", ""), CellContent::Text(String::new()));
        assert_eq!(
            cell_content(
                "Source_URL",
                "http://hci-exlovd.hci.utah.edu/variant.php?id=1,http://other.example",
            ),
            CellContent::Link {
                href: "http://hci-exlovd.hci.utah.edu/variant.php?id=1".to_string(),
                label: "link to multifactorial analysis",
            }
        );
        assert_eq!(
            cell_content("Source_URL", "http://other.example"),
            CellContent::Text("http://other.example".to_string())
        );
    }

    #[test]
    fn test_pmid_references_are_linked() {
        assert_eq!(
            split_pmid_citations("Reviewed in PMID: 21990134 and PMID 25948282."),
            vec![
                CitationPiece::Text("Reviewed in ".to_string()),
                CitationPiece::Pmid("21990134".to_string()),
                CitationPiece::Text(" and ".to_string()),
                CitationPiece::Pmid("25948282".to_string()),
                CitationPiece::Text(".".to_string()),
            ]
        );
        assert_eq!(
            split_pmid_citations("no PMID given"),
            vec![CitationPiece::Text("no PMID given".to_string())]
        );
        assert_eq!(
            cell_content("Clinical_significance_citations_ENIGMA", "PMID:123"),
            CellContent::Citation(vec![CitationPiece::Pmid("123".to_string())])
        );
    }
}
