use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Financial line items recognised in document text.
///
/// Declaration order is the scan priority, and also the order in which
/// extracted values are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KpiName {
    #[serde(rename = "Total Assets")]
    TotalAssets,
    #[serde(rename = "Total Liabilities")]
    TotalLiabilities,
    #[serde(rename = "Equity")]
    Equity,
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "Net Profit")]
    NetProfit,
    #[serde(rename = "Revenue")]
    Revenue,
    #[serde(rename = "Current Assets")]
    CurrentAssets,
    #[serde(rename = "Current Liabilities")]
    CurrentLiabilities,
}

impl KpiName {
    pub const ALL: [KpiName; 8] = [
        KpiName::TotalAssets,
        KpiName::TotalLiabilities,
        KpiName::Equity,
        KpiName::Cash,
        KpiName::NetProfit,
        KpiName::Revenue,
        KpiName::CurrentAssets,
        KpiName::CurrentLiabilities,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            KpiName::TotalAssets => "Total Assets",
            KpiName::TotalLiabilities => "Total Liabilities",
            KpiName::Equity => "Equity",
            KpiName::Cash => "Cash",
            KpiName::NetProfit => "Net Profit",
            KpiName::Revenue => "Revenue",
            KpiName::CurrentAssets => "Current Assets",
            KpiName::CurrentLiabilities => "Current Liabilities",
        }
    }
}

impl fmt::Display for KpiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratios derived from extracted KPIs, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatioName {
    #[serde(rename = "Debt-to-Equity")]
    DebtToEquity,
    #[serde(rename = "Current Ratio")]
    CurrentRatio,
    #[serde(rename = "Working Capital")]
    WorkingCapital,
    #[serde(rename = "Net Profit Margin (%)")]
    NetProfitMargin,
}

impl RatioName {
    pub const ALL: [RatioName; 4] = [
        RatioName::DebtToEquity,
        RatioName::CurrentRatio,
        RatioName::WorkingCapital,
        RatioName::NetProfitMargin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RatioName::DebtToEquity => "Debt-to-Equity",
            RatioName::CurrentRatio => "Current Ratio",
            RatioName::WorkingCapital => "Working Capital",
            RatioName::NetProfitMargin => "Net Profit Margin (%)",
        }
    }

    /// Explanation attached to the ratio when it cannot be computed
    pub fn unavailable_reason(&self) -> &'static str {
        match self {
            RatioName::DebtToEquity => "Equity is zero or not found",
            RatioName::CurrentRatio => "Current Liabilities is zero or not found",
            RatioName::WorkingCapital => "Current Assets or Liabilities not found",
            RatioName::NetProfitMargin => "Revenue is zero or Net Profit/Revenue not found",
        }
    }
}

impl fmt::Display for RatioName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single ratio computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RatioValue {
    Available { value: f64 },
    Unavailable { reason: String },
}

impl RatioValue {
    /// The unavailable marker carrying the ratio's standard reason.
    pub fn unavailable(name: RatioName) -> Self {
        RatioValue::Unavailable {
            reason: name.unavailable_reason().to_string(),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            RatioValue::Available { value } => Some(*value),
            RatioValue::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RatioValue::Available { .. })
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioValue::Available { value } => write!(f, "{:.2}", value),
            RatioValue::Unavailable { reason } => write!(f, "N/A ({})", reason),
        }
    }
}

/// Extracted KPI values, at most one per name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KpiSet(BTreeMap<KpiName, f64>);

impl KpiSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` unless the KPI already has one. Returns whether it was stored.
    pub fn insert_first(&mut self, name: KpiName, value: f64) -> bool {
        if self.0.contains_key(&name) {
            return false;
        }
        self.0.insert(name, value);
        true
    }

    pub fn get(&self, name: KpiName) -> Option<f64> {
        self.0.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (KpiName, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Derived ratios keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioSet(BTreeMap<RatioName, RatioValue>);

impl RatioSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: RatioName, value: RatioValue) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: RatioName) -> Option<&RatioValue> {
        self.0.get(&name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatioName, &RatioValue)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

/// Everything extracted from one document text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiExtraction {
    pub kpis: KpiSet,
    pub ratios: RatioSet,
}
