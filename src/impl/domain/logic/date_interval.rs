use chrono::NaiveDate;

/// Whole days from `issuance` to `due`. A due date before issuance counts as
/// zero days rather than a negative interval.
pub fn days_between(issuance: NaiveDate, due: NaiveDate) -> u32 {
    let days = (due - issuance).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Same as `days_between`, but a missing date means no elapsed time.
pub fn elapsed_days(issuance: Option<NaiveDate>, due: Option<NaiveDate>) -> u32 {
    match (issuance, due) {
        (Some(issuance), Some(due)) => days_between(issuance, due),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn counts_whole_days() {
        assert_eq!(days_between(date("2025-08-15"), date("2025-08-20")), 5);
        assert_eq!(days_between(date("2025-08-15"), date("2025-09-14")), 30);
    }

    #[test]
    fn crosses_month_and_leap_day() {
        assert_eq!(days_between(date("2024-02-28"), date("2024-03-01")), 2);
        assert_eq!(days_between(date("2025-12-31"), date("2026-01-01")), 1);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_between(date("2025-08-15"), date("2025-08-15")), 0);
    }

    #[test]
    fn due_before_issuance_clamps_to_zero() {
        assert_eq!(days_between(date("2025-08-20"), date("2025-08-15")), 0);
    }

    #[test]
    fn missing_dates_mean_zero_days() {
        assert_eq!(elapsed_days(None, Some(date("2025-08-20"))), 0);
        assert_eq!(elapsed_days(Some(date("2025-08-15")), None), 0);
        assert_eq!(
            elapsed_days(Some(date("2025-08-15")), Some(date("2025-08-20"))),
            5
        );
    }
}
