//! Canonical monthly sequence generation.

use crate::error::CalendarError;
use crate::stamp::MonthStamp;

/// Builds the canonical monthly axis from January of `first_year` through
/// December of `last_year`, inclusive.
///
/// The result is strictly increasing with exactly one stamp per calendar
/// month, so its length is always `12 * (last_year - first_year + 1)`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidRange`] if `last_year < first_year`.
pub fn monthly_sequence(first_year: i32, last_year: i32) -> Result<Vec<MonthStamp>, CalendarError> {
    if last_year < first_year {
        return Err(CalendarError::InvalidRange {
            first_year,
            last_year,
        });
    }

    let n_months = 12 * (last_year - first_year + 1) as usize;
    let mut stamps = Vec::with_capacity(n_months);
    for year in first_year..=last_year {
        for month in 1..=12u8 {
            stamps.push(MonthStamp::new(year, month).expect("months 1..=12 are always valid"));
        }
    }
    Ok(stamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_year() {
        let axis = monthly_sequence(2000, 2000).unwrap();
        assert_eq!(axis.len(), 12);
        assert_eq!(axis[0], MonthStamp::new(2000, 1).unwrap());
        assert_eq!(axis[11], MonthStamp::new(2000, 12).unwrap());
    }

    #[test]
    fn multi_year_length() {
        let axis = monthly_sequence(1980, 2019).unwrap();
        assert_eq!(axis.len(), 12 * 40);
    }

    #[test]
    fn strictly_increasing() {
        let axis = monthly_sequence(1995, 1998).unwrap();
        assert!(axis.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn inverted_range_rejected() {
        assert_eq!(
            monthly_sequence(2001, 2000).unwrap_err(),
            CalendarError::InvalidRange {
                first_year: 2001,
                last_year: 2000,
            }
        );
    }
}
