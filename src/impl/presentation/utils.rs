use iso_currency::Currency;
use num_format::{CustomFormat, Grouping, ToFormattedString as _};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, BRL = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Brazilian grouping: '.' between thousands, ',' as decimal mark.
fn pt_br_format() -> CustomFormat {
    CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator(".")
        .decimal(",")
        .build()
        .expect("hardcoded number format should be valid")
}

/// Format cash amount with currency symbol, correct number of decimal places
/// and Brazilian separators (ex. "R$ 21.000,50").
///
/// Rounds half away from zero to the currency's decimal places. This is the
/// only place amounts get rounded; stored values keep full precision.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let rounded = amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = rounded.abs();
    let integer_part = abs
        .trunc()
        .to_u128()
        .unwrap_or_default()
        .to_formatted_string(&pt_br_format());
    if decimal_places == 0 {
        return format!("{}{} {}", sign, currency.symbol(), integer_part);
    }
    let fractional_part = (abs.fract() * Decimal::from(10u64.pow(decimal_places)))
        .trunc()
        .to_u64()
        .unwrap_or_default();
    format!(
        "{}{} {},{:0width$}",
        sign,
        currency.symbol(),
        integer_part,
        fractional_part,
        width = decimal_places as usize,
    )
}

/// Rate with two decimals and a percent sign (ex. "3.50%").
pub fn format_percent(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}
