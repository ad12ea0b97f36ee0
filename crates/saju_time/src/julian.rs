//! Julian Day Number conversions for the proleptic Gregorian calendar.
//!
//! Integer-only (Fliegel & Van Flandern), so day counts between any two
//! dates in the supported range are exact. JDN 2_451_545 is 2000-01-01.

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// Julian Day Number of a calendar date (noon-based integer day count).
///
/// The caller is responsible for passing a valid date; see
/// [`ChartInstant::new`](crate::ChartInstant::new) for the validated path.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let year = year as i64;
    let month = month as i64;
    let day = day as i64;

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045
}

/// Calendar date `(year, month, day)` of a Julian Day Number.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_date() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // 1582-10-15 (first Gregorian day) is JDN 2299161.
        assert_eq!(calendar_to_jdn(1582, 10, 15), 2_299_161);
    }

    #[test]
    fn roundtrip_across_leap_day() {
        for jdn in 2_451_600..2_451_620 {
            let (y, m, d) = jdn_to_calendar(jdn);
            assert_eq!(calendar_to_jdn(y, m, d), jdn);
        }
        assert_eq!(jdn_to_calendar(calendar_to_jdn(2000, 2, 29)), (2000, 2, 29));
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, 0), None);
    }
}
