use crate::date_key::DayKey;
use crate::models::DatedRecord;

/// Result of asking to flip a record's completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome<R> {
    Toggled(R),
    /// The record is dated after today and was left untouched.
    FutureDate(DayKey),
}

pub fn can_toggle<R: DatedRecord>(record: &R, today: DayKey) -> bool {
    record.date() <= today
}

/// Flips completion without checking the date. Callers check [`can_toggle`]
/// first, or use [`try_toggle`].
pub fn toggle<R: DatedRecord>(record: &R) -> R {
    record.toggled()
}

pub fn try_toggle<R: DatedRecord>(record: &R, today: DayKey) -> ToggleOutcome<R> {
    if can_toggle(record, today) {
        ToggleOutcome::Toggled(toggle(record))
    } else {
        ToggleOutcome::FutureDate(record.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn task(date: &str, completed: bool) -> Task {
        Task {
            id: 1,
            text: "write".into(),
            date: date.parse().unwrap(),
            completed,
            points: None,
        }
    }

    #[test]
    fn future_records_cannot_toggle_either_way() {
        let today: DayKey = "2024-03-05".parse().unwrap();
        for completed in [false, true] {
            let record = task("2024-03-06", completed);
            assert!(!can_toggle(&record, today));
            assert_eq!(try_toggle(&record, today), ToggleOutcome::FutureDate(record.date));
        }
    }

    #[test]
    fn present_and_past_records_flip() {
        let today: DayKey = "2024-03-05".parse().unwrap();
        for date in ["2024-03-05", "2023-01-01"] {
            for completed in [false, true] {
                let record = task(date, completed);
                assert!(can_toggle(&record, today));
                let ToggleOutcome::Toggled(updated) = try_toggle(&record, today) else {
                    panic!("expected toggle for {date}");
                };
                assert_eq!(updated.completed, !completed);
                assert_eq!(record.completed, completed);
            }
        }
    }
}
