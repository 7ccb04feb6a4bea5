/// Builds the executive-summary instruction for a document's text.
pub fn build_summary_prompt(text: &str) -> String {
    format!(
        r#"You are an experienced financial analyst. Write a short, insightful executive summary of the financial data below.

Cover the points that matter most:
1. Overall financial health: is the company strong, stable, or under pressure?
2. Key figures: the latest Total Assets, Total Liabilities and Shareholders' Equity.
3. Profitability: Net Profit / Net Income and Revenue.
4. Liquidity: Cash and Cash Equivalents.
5. Risks and opportunities: any red flags or growth prospects stated in or clearly implied by the figures. If none are evident, say that the data shows no explicit risks.

Rules:
- Use 3 to 5 concise paragraphs.
- Write in clear, professional language.
- Never invent information. If a detail is missing from the data, leave it out or say it is not available.
- Prefer factual statements over generic commentary.

--- BEGIN FINANCIAL DATA ---
{text}
--- END OF DATA ---

Executive Summary:"#
    )
}
