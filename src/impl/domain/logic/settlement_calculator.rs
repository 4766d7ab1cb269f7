use rust_decimal::Decimal;

use crate::entities::{SettlementInput, SettlementResult};

/// Length of the reference month over which the monthly rate is pro-rated.
const REFERENCE_MONTH_DAYS: u32 = 30;

/// Pro-rata discount of a receivable:
///
/// - financial discount = face × rate% × days / 30
/// - admin and tax discounts = face × rate% (one-time)
/// - total = financial + fixed fee + admin + tax
/// - net payable = face − total, clamped at zero
///
/// Nothing is rounded here.
///
/// # Panics
///
/// If an intermediate value overflows `Decimal`. That cannot happen for
/// inputs accepted by note validation (amounts up to 10^12, percentages up to
/// 1000); use [`checked_compute_settlement`] for unvalidated inputs.
pub fn compute_settlement(input: &SettlementInput) -> SettlementResult {
    checked_compute_settlement(input)
        .expect("settlement inputs should be within the validated range")
}

/// Same as [`compute_settlement`], returning `None` on `Decimal` overflow.
pub fn checked_compute_settlement(input: &SettlementInput) -> Option<SettlementResult> {
    let face_value = input.face_value;
    let hundred = Decimal::ONE_HUNDRED;

    // Multiply before dividing so that exact cases (e.g. 21000 at 3.5% over 5
    // days) stay exact instead of going through a repeating 5/30.
    let financial_discount = face_value
        .checked_mul(input.monthly_rate_percent)?
        .checked_mul(Decimal::from(input.elapsed_days))?
        .checked_div(hundred * Decimal::from(REFERENCE_MONTH_DAYS))?;
    let admin_discount = face_value.checked_mul(input.admin_fee_percent)? / hundred;
    let tax_discount = face_value.checked_mul(input.tax_percent)? / hundred;
    let total_discount = financial_discount
        .checked_add(input.fixed_fee)?
        .checked_add(admin_discount)?
        .checked_add(tax_discount)?;
    let net_payable = face_value.checked_sub(total_discount)?.max(Decimal::ZERO);

    Some(SettlementResult {
        financial_discount,
        fixed_fee: input.fixed_fee,
        admin_discount,
        tax_discount,
        total_discount,
        net_payable,
        nominal_receivable: face_value,
    })
}
