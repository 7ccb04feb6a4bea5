use crate::units::UnitScale;

/// Parses a captured numeric literal: thousands separators are dropped and
/// a parenthesised literal is read as negative.
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_literal(literal: &str) -> Option<f64> {
    let cleaned = literal.replace(',', "");
    let cleaned = cleaned.trim();

    let signed = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => format!("-{}", inner),
        None => cleaned.to_string(),
    };

    signed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses `literal` and applies the scale detected in its unit context.
pub fn normalize_value(literal: &str, context: &str) -> Option<f64> {
    let value = parse_literal(literal)?;
    let scaled = match UnitScale::detect(context) {
        Some(scale) => value * scale.multiplier(),
        None => value,
    };
    Some(scaled).filter(|v| v.is_finite())
}
