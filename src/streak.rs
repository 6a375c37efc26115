use crate::date_key::DayKey;
use crate::models::DatedRecord;
use std::collections::BTreeSet;

/// Counts consecutive days with at least one completed record, ending today
/// or yesterday.
///
/// Completed records dated after `today` are ignored. A most recent completed
/// day older than yesterday means the streak is broken and yields zero.
pub fn compute_streak<R: DatedRecord>(records: &[R], today: DayKey) -> u32 {
    let days: BTreeSet<DayKey> = records
        .iter()
        .filter(|record| record.is_completed() && record.date() <= today)
        .map(DatedRecord::date)
        .collect();

    let Some(&latest) = days.last() else {
        return 0;
    };

    if latest != today && Some(latest) != today.pred() {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = latest;
    for &day in days.iter().rev().skip(1) {
        if cursor.pred() != Some(day) {
            break;
        }
        streak += 1;
        cursor = day;
    }

    streak
}
