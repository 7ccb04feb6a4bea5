pub mod normalize;
pub mod patterns;
pub mod ratios;
pub mod units;


use kpi_core::{KpiAnalyzer, KpiExtraction, KpiSet};

pub use normalize::{normalize_value, parse_literal};
pub use patterns::{pattern_table, Candidate, LabelPattern, LABEL_SYNONYMS};
pub use ratios::compute_ratios;
pub use units::UnitScale;

/// Regex-driven KPI extractor over plain document text.
///
/// Holds only the compiled pattern table, so a single instance can be
/// shared across threads and reused for any number of documents.
pub struct KpiExtractor {
    patterns: &'static [LabelPattern],
}

impl KpiExtractor {
    pub fn new() -> Self {
        Self {
            patterns: pattern_table(),
        }
    }

    /// Extracts KPIs in priority order and derives the ratios from them.
    ///
    /// Never fails: unknown or unparseable figures are left out, and
    /// ratios that cannot be computed carry their unavailable reason.
    pub fn extract(&self, text: &str) -> KpiExtraction {
        let kpis = self.extract_kpis(text);
        let ratios = compute_ratios(&kpis);
        KpiExtraction { kpis, ratios }
    }

    fn extract_kpis(&self, text: &str) -> KpiSet {
        let mut kpis = KpiSet::new();

        for pattern in self.patterns {
            // First candidate that normalises wins; later ones are ignored.
            for candidate in pattern.candidates(text) {
                match normalize_value(candidate.literal, candidate.context) {
                    Some(value) => {
                        tracing::debug!(
                            kpi = %pattern.kpi,
                            literal = candidate.literal,
                            value,
                            "Matched KPI"
                        );
                        kpis.insert_first(pattern.kpi, value);
                        break;
                    }
                    None => {
                        tracing::debug!(
                            kpi = %pattern.kpi,
                            literal = candidate.literal,
                            "Skipping unparseable KPI literal"
                        );
                    }
                }
            }
        }

        if kpis.is_empty() {
            tracing::debug!("No KPIs recognised in {} bytes of text", text.len());
        }

        kpis
    }
}

impl KpiAnalyzer for KpiExtractor {
    fn analyze(&self, text: &str) -> KpiExtraction {
        self.extract(text)
    }
}

impl Default for KpiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts KPIs and ratios with the built-in pattern table.
pub fn extract_kpis(text: &str) -> KpiExtraction {
    KpiExtractor::new().extract(text)
}
