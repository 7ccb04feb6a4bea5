use kpi_core::KpiName;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Label synonyms per KPI, as case-insensitive regex fragments.
///
/// Order matters twice: KPIs are scanned top to bottom, and each KPI's
/// synonyms are tried as a single alternation.
pub const LABEL_SYNONYMS: [(KpiName, &[&str]); 8] = [
    (
        KpiName::TotalAssets,
        &[
            "Total assets",
            "Assets, total",
            "Total Current and Non-current Assets",
        ],
    ),
    (
        KpiName::TotalLiabilities,
        &[
            "Total liabilities",
            "Liabilities, total",
            "Total Current and Non-current Liabilities",
        ],
    ),
    (
        KpiName::Equity,
        &[
            "Shareholders' equity",
            "Total equity",
            "Equity attributable to(?: parent| owners)?",
        ],
    ),
    (KpiName::Cash, &["Cash (?:and cash equivalents)?"]),
    (
        KpiName::NetProfit,
        &["Net income", "Profit(?: and loss)?", "Net earnings"],
    ),
    (KpiName::Revenue, &["Total net sales", "Revenue", "Sales"]),
    (
        KpiName::CurrentAssets,
        &["Total current assets", "Current assets, total"],
    ),
    (
        KpiName::CurrentLiabilities,
        &["Total current liabilities", "Current liabilities, total"],
    ),
];

// Filler after the label may not contain digits, colons or newlines. The
// literal is ASCII digits only; a run of any other script's digits blocks
// the match instead of being captured.
const VALUE_TAIL: &str = r"\b[^:\d\n]*?[:\s$₹]*(\([0-9][0-9,.]*\)|[0-9][0-9,.]*)(?:\s*(?:in\s+thousands|millions|billions|MM|M|B|Bn|K)\b)?";

static PATTERN_TABLE: LazyLock<Vec<LabelPattern>> = LazyLock::new(|| {
    LABEL_SYNONYMS
        .iter()
        .map(|(kpi, synonyms)| {
            LabelPattern::compile(*kpi, synonyms).expect("built-in KPI label pattern must compile")
        })
        .collect()
});

/// The compiled, ordered pattern table shared by every extractor.
pub fn pattern_table() -> &'static [LabelPattern] {
    &PATTERN_TABLE
}

/// A compiled recognition rule for one KPI.
#[derive(Debug, Clone)]
pub struct LabelPattern {
    pub kpi: KpiName,
    regex: Regex,
}

/// One label-plus-number hit in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'t> {
    /// The numeric literal as written, e.g. `1,234.5` or `(300)`.
    pub literal: &'t str,
    /// The line(s) covering the whole match, used for unit detection.
    pub context: &'t str,
}

impl LabelPattern {
    pub fn compile(kpi: KpiName, synonyms: &[&str]) -> Result<Self, regex::Error> {
        let source = format!("(?i)(?:{}){}", synonyms.join("|"), VALUE_TAIL);
        Ok(Self {
            kpi,
            regex: Regex::new(&source)?,
        })
    }

    /// All matches in document order.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Candidate<'a>> + 'a {
        self.regex
            .captures_iter(text)
            .filter_map(move |caps| candidate_from(text, &caps))
    }
}

fn candidate_from<'t>(text: &'t str, caps: &Captures<'t>) -> Option<Candidate<'t>> {
    let whole = caps.get(0)?;
    let literal = caps.get(1)?;
    Some(Candidate {
        literal: literal.as_str(),
        context: line_context(text, whole.start(), whole.end()),
    })
}

/// Text from just after the last newline before `start` up to the first
/// newline at or after `end`.
pub fn line_context(text: &str, start: usize, end: usize) -> &str {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    &text[line_start..line_end]
}
