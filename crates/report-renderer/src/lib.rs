mod templates;

pub use templates::{render_markdown, render_text};

use chrono::{DateTime, Local};
use kpi_core::{KpiExtraction, KpiSet, RatioSet};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const DEFAULT_TITLE: &str = "Smart Financial Summary Agent";

static BOLD_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold marker pattern"));

/// Everything shown in a generated report.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub summary: String,
    pub kpis: KpiSet,
    pub ratios: RatioSet,
}

impl FinancialReport {
    pub fn new(summary: impl Into<String>, extraction: KpiExtraction) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            generated_at: Local::now(),
            summary: summary.into(),
            kpis: extraction.kpis,
            ratios: extraction.ratios,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_timestamp(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// Formats an amount with thousands separators and two decimals, e.g. `-1,234,000.00`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Drops Markdown `**bold**` markers, keeping the enclosed text.
pub fn strip_markdown_bold(text: &str) -> String {
    BOLD_MARKERS.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-1_234_000.0), "-1,234,000.00");
        assert_eq!(format_amount(5_000_000_000.0), "5,000,000,000.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_strip_markdown_bold() {
        assert_eq!(
            strip_markdown_bold("**Overall:** strong and **stable**"),
            "Overall: strong and stable"
        );
        assert_eq!(strip_markdown_bold("no markers"), "no markers");
    }

    #[test]
    fn test_report_json_uses_display_labels() {
        let mut extraction = KpiExtraction::default();
        extraction.kpis.insert_first(kpi_core::KpiName::Cash, 42.0);
        let report = FinancialReport::new("ok", extraction);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["title"], DEFAULT_TITLE);
        assert_eq!(json["summary"], "ok");
        assert_eq!(json["kpis"]["Cash"], 42.0);
        assert!(json["generated_at"].is_string());
    }
}
