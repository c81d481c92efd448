use serde::Serialize;

/// A pre-authored stock recommendation. Price and return are display text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockPick {
    pub name: &'static str,
    pub ticker: &'static str,
    pub price_label: &'static str,
    pub change_label: &'static str,
    pub rationale: &'static str,
}
