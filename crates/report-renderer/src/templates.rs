use crate::{format_amount, strip_markdown_bold, FinancialReport};

const NO_KPIS: &str = "No significant financial KPIs could be extracted.";

/// Plain-text report, one section per block, suitable for saving to disk.
pub fn render_text(report: &FinancialReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.title));
    out.push_str(&format!(
        "Generated on: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M")
    ));

    out.push_str("Executive Summary\n");
    for line in strip_markdown_bold(report.summary.trim()).lines() {
        out.push_str(line);
        out.push('\n');
    }

    out.push_str("\nKey Financial KPIs\n");
    if report.kpis.is_empty() {
        out.push_str(&format!("{}\n", NO_KPIS));
    }
    for (name, value) in report.kpis.iter() {
        out.push_str(&format!("- {}: {}\n", name, format_amount(value)));
    }

    out.push('\n');
    if report.ratios.is_empty() {
        out.push_str("No financial ratios found.\n");
    } else {
        out.push_str("Financial Ratios\n");
        for (name, value) in report.ratios.iter() {
            out.push_str(&format!("- {}: {}\n", name, value));
        }
    }

    out
}

/// Markdown view of the same report, as shown after processing a document.
pub fn render_markdown(report: &FinancialReport) -> String {
    let mut out = format!("### Executive Summary:\n\n{}\n", report.summary.trim());
    out.push_str("\n---\n\n### Key Financial KPIs:\n");

    if report.kpis.is_empty() {
        out.push_str(&format!("{}\n", NO_KPIS));
    }
    for (name, value) in report.kpis.iter() {
        out.push_str(&format!("- **{}**: {}\n", name, format_amount(value)));
    }

    if report.ratios.is_empty() {
        out.push_str("\nNo financial ratios found.\n");
    } else {
        out.push_str("\n### Financial Ratios:\n");
        for (name, value) in report.ratios.iter() {
            out.push_str(&format!("- **{}**: {}\n", name, value));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use kpi_core::{KpiExtraction, KpiName, RatioName, RatioValue};

    fn sample_report() -> FinancialReport {
        let mut extraction = KpiExtraction::default();
        extraction.kpis.insert_first(KpiName::Revenue, 2_000_000.0);
        extraction.kpis.insert_first(KpiName::NetProfit, -1_234.0);
        extraction
            .ratios
            .insert(RatioName::NetProfitMargin, RatioValue::Available { value: -0.06 });
        extraction
            .ratios
            .insert(RatioName::DebtToEquity, RatioValue::unavailable(RatioName::DebtToEquity));

        FinancialReport::new("**Overall:** weak quarter.\nCash is tight.", extraction)
            .with_timestamp(Local.with_ymd_and_hms(2024, 3, 31, 9, 5, 0).unwrap())
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&sample_report());
        let expected = "Smart Financial Summary Agent\n\
                        Generated on: 2024-03-31 09:05\n\
                        \n\
                        Executive Summary\n\
                        Overall: weak quarter.\n\
                        Cash is tight.\n\
                        \n\
                        Key Financial KPIs\n\
                        - Net Profit: -1,234.00\n\
                        - Revenue: 2,000,000.00\n\
                        \n\
                        Financial Ratios\n\
                        - Debt-to-Equity: N/A (Equity is zero or not found)\n\
                        - Net Profit Margin (%): -0.06\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_without_kpis_or_ratios() {
        let report = FinancialReport::new("Nothing to report.", KpiExtraction::default());
        let text = render_text(&report);
        assert!(text.contains("Key Financial KPIs\nNo significant financial KPIs could be extracted.\n"));
        assert!(text.ends_with("No financial ratios found.\n"));
    }

    #[test]
    fn test_render_markdown_keeps_summary_formatting() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.starts_with("### Executive Summary:\n\n**Overall:** weak quarter."));
        assert!(markdown.contains("- **Revenue**: 2,000,000.00\n"));
        assert!(markdown.contains("### Financial Ratios:\n- **Debt-to-Equity**: N/A (Equity is zero or not found)\n"));
    }

    #[test]
    fn test_render_markdown_layout() {
        let mut extraction = KpiExtraction::default();
        extraction.kpis.insert_first(KpiName::Cash, 1_500.0);
        extraction
            .ratios
            .insert(RatioName::CurrentRatio, RatioValue::Available { value: 1.5 });
        let report = FinancialReport::new("  Liquid.  ", extraction);

        let expected = "### Executive Summary:\n\n\
                        Liquid.\n\
                        \n\
                        ---\n\
                        \n\
                        ### Key Financial KPIs:\n\
                        - **Cash**: 1,500.00\n\
                        \n\
                        ### Financial Ratios:\n\
                        - **Current Ratio**: 1.50\n";
        assert_eq!(render_markdown(&report), expected);
    }

    #[test]
    fn test_custom_title() {
        let report = FinancialReport::new("s", KpiExtraction::default()).with_title("Q1 Review");
        assert!(render_text(&report).starts_with("Q1 Review\n"));
    }
}
