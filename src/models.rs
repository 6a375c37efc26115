use crate::date_key::DayKey;
use serde::{Deserialize, Serialize};

/// Points a task is worth when none were recorded on it.
pub const DEFAULT_TASK_POINTS: u32 = 10;

/// A date-stamped record that can be completed.
///
/// Tasks and LeetCode entries share this shape so streaks and completion
/// guards are computed once for both collections.
pub trait DatedRecord {
    fn id(&self) -> u64;

    fn date(&self) -> DayKey;

    fn is_completed(&self) -> bool;

    /// Contribution of the record to a total. Zero while not completed.
    fn value(&self) -> u64;

    /// A copy of the record with its completion flipped.
    fn toggled(&self) -> Self
    where
        Self: Sized;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub date: DayKey,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl Task {
    pub fn points_or_default(&self) -> u32 {
        self.points.unwrap_or(DEFAULT_TASK_POINTS)
    }
}

impl DatedRecord for Task {
    fn id(&self) -> u64 {
        self.id
    }

    fn date(&self) -> DayKey {
        self.date
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn value(&self) -> u64 {
        if self.completed {
            u64::from(self.points_or_default())
        } else {
            0
        }
    }

    fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeEntry {
    pub id: u64,
    pub date: DayKey,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub question_count: u32,
}

impl DatedRecord for LeetCodeEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn date(&self) -> DayKey {
        self.date
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn value(&self) -> u64 {
        if self.completed {
            u64::from(self.question_count)
        } else {
            0
        }
    }

    // Checking keeps a positive count or starts at one; unchecking clears it.
    fn toggled(&self) -> Self {
        let completed = !self.completed;
        let question_count = if completed { self.question_count.max(1) } else { 0 };
        Self {
            completed,
            question_count,
            ..self.clone()
        }
    }
}

/// The per-user document the planner persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannerData {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub leetcode_tasks: Vec<LeetCodeEntry>,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub next_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    #[serde(flatten)]
    pub data: &'a PlannerData,
    pub export_date: String,
}

/// An imported document. Absent collections keep their current value; an
/// absent profile image clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub tasks: Option<Vec<Task>>,
    pub leetcode_tasks: Option<Vec<LeetCodeEntry>>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct LeetCodeToggleRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct LeetCodeCountRequest {
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct ProfileImageRequest {
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub date: DayKey,
    pub tasks: Vec<Task>,
    pub day_points: u64,
    pub completed_count: usize,
    pub total_count: usize,
    pub streak: u32,
    pub total_score: u64,
    pub leetcode_streak: u32,
    pub profile_image: String,
}

#[derive(Debug, Serialize)]
pub struct LeetCodeDay {
    pub date: DayKey,
    pub entry: Option<LeetCodeEntry>,
    pub is_today: bool,
    pub is_future: bool,
}

#[derive(Debug, Serialize)]
pub struct LeetCodeResponse {
    pub streak: u32,
    pub days: Vec<LeetCodeDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> DayKey {
        raw.parse().unwrap()
    }

    #[test]
    fn legacy_document_loads_with_defaults() {
        let raw = r#"{
            "tasks": [{ "id": 1700000000000, "text": "read", "date": "2024-03-05" }],
            "leetcodeTasks": [{ "id": 1700000000001, "date": "2024-03-05", "completed": true, "questionCount": 3 }]
        }"#;
        let data: PlannerData = serde_json::from_str(raw).unwrap();

        assert_eq!(data.tasks[0].points, None);
        assert!(!data.tasks[0].completed);
        assert_eq!(data.tasks[0].points_or_default(), DEFAULT_TASK_POINTS);
        assert_eq!(data.leetcode_tasks[0].question_count, 3);
        assert_eq!(data.profile_image, "");
        assert_eq!(data.next_id, 0);
    }

    #[test]
    fn uncompleted_records_contribute_nothing() {
        let task = Task {
            id: 1,
            text: "run".into(),
            date: day("2024-03-05"),
            completed: false,
            points: Some(25),
        };
        assert_eq!(task.value(), 0);
        assert_eq!(task.toggled().value(), 25);
    }

    #[test]
    fn leetcode_toggle_adjusts_question_count() {
        let entry = LeetCodeEntry {
            id: 7,
            date: day("2024-03-05"),
            completed: false,
            question_count: 0,
        };

        let checked = entry.toggled();
        assert!(checked.completed);
        assert_eq!(checked.question_count, 1);

        let unchecked = LeetCodeEntry { question_count: 4, ..checked }.toggled();
        assert!(!unchecked.completed);
        assert_eq!(unchecked.question_count, 0);

        let kept = LeetCodeEntry { question_count: 4, ..entry }.toggled();
        assert_eq!(kept.question_count, 4);
    }

    #[test]
    fn export_flattens_document() {
        let data = PlannerData::default();
        let doc = ExportDocument {
            data: &data,
            export_date: "2024-03-05T00:00:00+00:00".into(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("leetcodeTasks").is_some());
        assert_eq!(value["exportDate"], "2024-03-05T00:00:00+00:00");
    }
}
