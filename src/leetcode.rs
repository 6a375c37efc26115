use crate::date_key::DayKey;
use crate::errors::PlannerError;
use crate::models::{LeetCodeDay, LeetCodeEntry, LeetCodeResponse};
use crate::streak::compute_streak;
use std::collections::BTreeMap;

pub fn build_tracker(entries: &[LeetCodeEntry], today: DayKey) -> Result<LeetCodeResponse, PlannerError> {
    Ok(LeetCodeResponse {
        streak: compute_streak(entries, today),
        days: tracker_days(entries, today)?,
    })
}

/// One row per day from January 1 of last year through December 31 of next
/// year.
pub fn tracker_days(entries: &[LeetCodeEntry], today: DayKey) -> Result<Vec<LeetCodeDay>, PlannerError> {
    let (year, _, _) = today.to_ymd();
    let start = DayKey::from_ymd(year - 1, 1, 1)?;
    let end = DayKey::from_ymd(year + 1, 12, 31)?;

    let mut by_date: BTreeMap<DayKey, &LeetCodeEntry> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date).or_insert(entry);
    }

    let mut days = Vec::new();
    let mut cursor = Some(start);
    while let Some(date) = cursor.filter(|date| *date <= end) {
        days.push(LeetCodeDay {
            date,
            entry: by_date.get(&date).map(|entry| (*entry).clone()),
            is_today: date == today,
            is_future: date > today,
        });
        cursor = date.succ();
    }

    Ok(days)
}
