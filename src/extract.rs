// src/extract.rs
use crate::client::StatusInvestClient;
use crate::error::ScrapeError;
use crate::types::ExtractionResult;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

// Load-bearing implicit contract with the upstream markup: the instrument
// name sits in the first h1, and each indicator lives in an `.info` block
// with `.title` / `.value` children.
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("valid selector"));
static INFO_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse(".info").expect("valid selector"));
static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse(".title").expect("valid selector"));
static VALUE: Lazy<Selector> = Lazy::new(|| Selector::parse(".value").expect("valid selector"));

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses an instrument page and pulls out the heading plus every labeled
/// indicator, in document order. An absent or empty heading means the ticker
/// does not exist upstream, regardless of what HTTP status the page came
/// back with.
pub fn extract_document(html: &str) -> Result<ExtractionResult, ScrapeError> {
    let document = Html::parse_document(html);

    let name = document
        .select(&HEADING)
        .next()
        .map(|h| h.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    if name.is_empty() {
        return Err(ScrapeError::NotFound);
    }

    let mut indicators = IndexMap::new();
    for block in document.select(&INFO_BLOCK) {
        let label = block
            .select(&LABEL)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let value = block
            .select(&VALUE)
            .next()
            .map(|e| collapse_whitespace(&e.text().collect::<String>()))
            .unwrap_or_default();

        if !label.is_empty() && !value.is_empty() {
            indicators.insert(label, value);
        }
    }

    Ok(ExtractionResult { name, indicators })
}

/// Fetches one instrument page and extracts its raw indicator mapping.
pub async fn extract(
    client: &StatusInvestClient,
    category: &str,
    ticker: &str,
) -> Result<ExtractionResult, ScrapeError> {
    let html = client.fetch_page(category, ticker).await?;
    extract_document(&html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1>  BBDC4 - Banco Bradesco </h1>
            <div class="info">
                <div class="title">P/L</div>
                <div class="value">
                    8,50
                </div>
            </div>
            <div class="info">
                <div class="title">P/VP</div>
                <div class="value">1,10   x</div>
            </div>
        </body></html>
    "#;

    #[test]
    fn extracts_trimmed_heading_as_name() {
        let result = extract_document(PAGE).unwrap();
        assert_eq!(result.name, "BBDC4 - Banco Bradesco");
    }

    #[test]
    fn collapses_newlines_and_runs_of_whitespace_in_values() {
        let result = extract_document(PAGE).unwrap();
        assert_eq!(result.indicators["P/L"], "8,50");
        assert_eq!(result.indicators["P/VP"], "1,10 x");
    }

    #[test]
    fn keeps_document_order() {
        let result = extract_document(PAGE).unwrap();
        let labels: Vec<_> = result.indicators.keys().collect();
        assert_eq!(labels, ["P/L", "P/VP"]);
    }

    #[test]
    fn missing_heading_is_not_found() {
        let err = extract_document("<html><body><p>nada</p></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound));
    }

    #[test]
    fn empty_heading_is_not_found() {
        let err = extract_document("<html><body><h1>   </h1></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound));
    }

    #[test]
    fn later_duplicate_label_overwrites_earlier_value() {
        let html = r#"
            <h1>KNRI11</h1>
            <div class="info"><span class="title">DY</span><span class="value">8%</span></div>
            <div class="info"><span class="title">DY</span><span class="value">9%</span></div>
        "#;
        let result = extract_document(html).unwrap();
        assert_eq!(result.indicators.len(), 1);
        assert_eq!(result.indicators["DY"], "9%");
    }

    #[test]
    fn skips_blocks_with_empty_label_or_value() {
        let html = r#"
            <h1>HGAG11</h1>
            <div class="info"><span class="title"></span><span class="value">1,00</span></div>
            <div class="info"><span class="title">P/VP</span><span class="value">   </span></div>
            <div class="info"><span class="title">DY</span><span class="value">10%</span></div>
        "#;
        let result = extract_document(html).unwrap();
        assert_eq!(result.indicators.len(), 1);
        assert_eq!(result.indicators["DY"], "10%");
    }

    #[test]
    fn tolerates_malformed_markup() {
        let html =
            "<h1>BBDC4</h1><div class='info'><span class='title'>P/L</span><span class='value'>8,50";
        let result = extract_document(html).unwrap();
        assert_eq!(result.name, "BBDC4");
        assert_eq!(result.indicators["P/L"], "8,50");
    }
}
