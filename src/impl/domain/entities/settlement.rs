use rust_decimal::Decimal;

/// Inputs of the discount calculation. Percentages are expressed as plain
/// numbers (3.5 means 3.5%).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettlementInput {
    pub face_value: Decimal,
    /// Rate per 30-day reference month, pro-rated over `elapsed_days`.
    pub monthly_rate_percent: Decimal,
    pub elapsed_days: u32,
    pub fixed_fee: Decimal,
    /// One-time administrative fee over the face value (not pro-rated).
    pub admin_fee_percent: Decimal,
    /// One-time IOF tax over the face value (not pro-rated).
    pub tax_percent: Decimal,
}

/// Breakdown of a settlement. Values are kept unrounded; rounding happens only
/// when formatting for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    pub financial_discount: Decimal,
    pub fixed_fee: Decimal,
    pub admin_discount: Decimal,
    pub tax_discount: Decimal,
    pub total_discount: Decimal,
    /// Amount disbursed to the assignor. Never negative.
    pub net_payable: Decimal,
    /// Amount expected from the debtor at maturity (the face value).
    pub nominal_receivable: Decimal,
}
