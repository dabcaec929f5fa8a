// src/normalize.rs
use crate::types::ExtractionResult;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Token Status Invest embeds in some labels to anchor an inline tooltip.
/// It is never part of the semantic label.
pub const HELP_MARKER: &str = "help_outline";

static HELP_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+help_outline.*$").expect("valid help-marker pattern"));

// Known concatenated/duplicate label variants, collapsed to one canonical
// short form. The raw forms come straight from the upstream markup, which
// repeats the same label at several breakpoints.
static RENAME_RULES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "Val. patrim. p/cotaValor patrim. p/cotaVal. patrimonial p/cota",
            "Val. patrim. cota",
        ),
        (
            "REND. MÉD. (24M)RENDIM. MÉDIO (24M)RENDIMENTO MENSAL MÉDIO (24M)",
            "REND. MÉD.",
        ),
        ("PARTIC. NO IFIXPARTICIPAÇÃO NO IFIX", "PARTIC. NO IFIX"),
    ])
});

/// Cleans up a raw extraction: trims the name, strips tooltip suffixes from
/// labels, applies the rename table, and drops labels that still carry the
/// tooltip marker. Pure and idempotent; the input is left untouched.
pub fn normalize(result: &ExtractionResult) -> ExtractionResult {
    let mut indicators = IndexMap::with_capacity(result.indicators.len());

    for (label, value) in &result.indicators {
        let cleaned = HELP_SUFFIX.replace(label, "").trim().to_string();
        let final_label = match RENAME_RULES.get(cleaned.as_str()) {
            Some(canonical) => canonical.to_string(),
            None => cleaned,
        };

        if !final_label.is_empty() && !final_label.contains(HELP_MARKER) {
            indicators.insert(final_label, value.trim().to_string());
        }
    }

    ExtractionResult {
        name: result.name.trim().to_string(),
        indicators,
    }
}
