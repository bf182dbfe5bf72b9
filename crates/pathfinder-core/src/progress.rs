//! Completion arithmetic shared by the tracker and the analytics.

use jiff::Timestamp;

/// `completed / total * 100`, or 0 for an empty plan.
pub fn completion_percentage(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total) * 100.0
}

/// Completion date after a task's flag is set to `is_completed`.
///
/// The first transition to completed stamps `now`; staying completed keeps
/// the original stamp; anything not completed has no date.
pub fn completion_date(
    is_completed: bool,
    previous: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    if is_completed {
        Some(previous.unwrap_or(now))
    } else {
        None
    }
}

/// Rounds to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percentage() {
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(0, 30), 0.0);
        assert_eq!(completion_percentage(15, 30), 50.0);
        assert_eq!(completion_percentage(30, 30), 100.0);
    }

    #[test]
    fn test_completion_date_transitions() {
        let first: Timestamp = "2025-01-01T08:00:00Z".parse().unwrap();
        let later: Timestamp = "2025-01-03T08:00:00Z".parse().unwrap();

        assert_eq!(completion_date(true, None, first), Some(first));
        assert_eq!(completion_date(true, Some(first), later), Some(first));
        assert_eq!(completion_date(false, Some(first), later), None);
        assert_eq!(completion_date(false, None, later), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345_67, 2), 2.35);
        assert_eq!(round_to(66.666, 1), 66.7);
    }
}
