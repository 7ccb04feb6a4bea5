use kpi_core::{AnalysisError, KpiName, KpiSet, RatioName, RatioSet, RatioValue};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

// From 2^52 up every f64 is a whole number, and most of that range is
// beyond what a Decimal can hold.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Rounds to 2 decimal places, half-to-even on the exact binary value.
pub fn round2(value: f64) -> Result<f64, AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::CalculationError(format!(
            "non-finite result {}",
            value
        )));
    }
    if value.abs() >= INTEGRAL_THRESHOLD {
        return Ok(value);
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .ok_or_else(|| {
            AnalysisError::CalculationError(format!("{} is outside decimal range", value))
        })
}

fn debt_to_equity(kpis: &KpiSet) -> Option<Result<f64, AnalysisError>> {
    let liabilities = kpis.get(KpiName::TotalLiabilities)?;
    let equity = kpis.get(KpiName::Equity).filter(|e| *e != 0.0)?;
    Some(round2(liabilities / equity))
}

fn current_ratio(kpis: &KpiSet) -> Option<Result<f64, AnalysisError>> {
    let assets = kpis.get(KpiName::CurrentAssets)?;
    let liabilities = kpis.get(KpiName::CurrentLiabilities).filter(|l| *l != 0.0)?;
    Some(round2(assets / liabilities))
}

fn working_capital(kpis: &KpiSet) -> Option<Result<f64, AnalysisError>> {
    let assets = kpis.get(KpiName::CurrentAssets)?;
    let liabilities = kpis.get(KpiName::CurrentLiabilities)?;
    Some(round2(assets - liabilities))
}

fn net_profit_margin(kpis: &KpiSet) -> Option<Result<f64, AnalysisError>> {
    let net_profit = kpis.get(KpiName::NetProfit)?;
    let revenue = kpis.get(KpiName::Revenue).filter(|r| *r != 0.0)?;
    Some(round2((net_profit / revenue) * 100.0))
}

/// Computes every derived ratio. Each one is always present: either a
/// value or the unavailable marker with its standard reason.
pub fn compute_ratios(kpis: &KpiSet) -> RatioSet {
    let mut ratios = RatioSet::new();

    for name in RatioName::ALL {
        let outcome = match name {
            RatioName::DebtToEquity => debt_to_equity(kpis),
            RatioName::CurrentRatio => current_ratio(kpis),
            RatioName::WorkingCapital => working_capital(kpis),
            RatioName::NetProfitMargin => net_profit_margin(kpis),
        };

        let value = match outcome {
            Some(Ok(value)) => RatioValue::Available { value },
            Some(Err(e)) => {
                tracing::warn!("Error calculating {}: {}", name, e);
                RatioValue::unavailable(name)
            }
            None => RatioValue::unavailable(name),
        };
        ratios.insert(name, value);
    }

    ratios
}
