//! State transitions over the stored planner document.
//!
//! Every transition borrows the current document and returns a new one, so a
//! caller can persist the result before swapping it in.

use crate::date_key::DayKey;
use crate::errors::PlannerError;
use crate::models::{DEFAULT_TASK_POINTS, ImportRequest, LeetCodeEntry, PlannerData, Task};
use crate::toggle::{ToggleOutcome, try_toggle};

impl PlannerData {
    /// First LeetCode entry recorded for `date`.
    pub fn leetcode_entry(&self, date: DayKey) -> Option<&LeetCodeEntry> {
        self.leetcode_tasks.iter().find(|entry| entry.date == date)
    }

    fn max_id(&self) -> u64 {
        let tasks = self.tasks.iter().map(|task| task.id);
        let entries = self.leetcode_tasks.iter().map(|entry| entry.id);
        tasks.chain(entries).max().unwrap_or(0)
    }

    // Ids stay above everything ever issued, including deleted records.
    fn issue_id(&self) -> (Self, u64) {
        let id = self.next_id.max(self.max_id().saturating_add(1));
        let next = Self {
            next_id: id.saturating_add(1),
            ..self.clone()
        };
        (next, id)
    }

    pub fn add_task(&self, text: &str, date: DayKey) -> Result<(Self, Task), PlannerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PlannerError::EmptyTaskText);
        }

        let (mut next, id) = self.issue_id();
        let task = Task {
            id,
            text: text.to_string(),
            date,
            completed: false,
            points: Some(DEFAULT_TASK_POINTS),
        };
        next.tasks.push(task.clone());
        Ok((next, task))
    }

    pub fn toggle_task(&self, id: u64, today: DayKey) -> Result<(Self, Task), PlannerError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(PlannerError::TaskNotFound(id))?;

        match try_toggle(&self.tasks[index], today) {
            ToggleOutcome::Toggled(task) => {
                let mut next = self.clone();
                next.tasks[index] = task.clone();
                Ok((next, task))
            }
            ToggleOutcome::FutureDate(date) => Err(PlannerError::FutureDate(date)),
        }
    }

    pub fn delete_task(&self, id: u64) -> Result<Self, PlannerError> {
        if !self.tasks.iter().any(|task| task.id == id) {
            return Err(PlannerError::TaskNotFound(id));
        }
        Ok(Self {
            tasks: self.tasks.iter().filter(|task| task.id != id).cloned().collect(),
            next_id: self.next_id.max(self.max_id().saturating_add(1)),
            ..self.clone()
        })
    }

    /// Flips the entry for `date`, creating a completed entry with one
    /// question when the day has none.
    pub fn toggle_leetcode(&self, date: DayKey, today: DayKey) -> Result<(Self, LeetCodeEntry), PlannerError> {
        if date > today {
            return Err(PlannerError::FutureDate(date));
        }

        match self.leetcode_tasks.iter().position(|entry| entry.date == date) {
            Some(index) => match try_toggle(&self.leetcode_tasks[index], today) {
                ToggleOutcome::Toggled(entry) => {
                    let mut next = self.clone();
                    next.leetcode_tasks[index] = entry.clone();
                    Ok((next, entry))
                }
                ToggleOutcome::FutureDate(date) => Err(PlannerError::FutureDate(date)),
            },
            None => Ok(self.push_leetcode(date, 1)),
        }
    }

    /// Sets the question count for `date`. A positive count marks the day
    /// completed, creating its entry when needed. Zero only clears the count
    /// of an existing entry and changes nothing on a day without one.
    pub fn set_leetcode_count(
        &self,
        date: DayKey,
        count: u32,
        today: DayKey,
    ) -> Result<(Self, Option<LeetCodeEntry>), PlannerError> {
        if date > today {
            return Err(PlannerError::FutureDate(date));
        }

        match self.leetcode_tasks.iter().position(|entry| entry.date == date) {
            Some(index) => {
                let mut next = self.clone();
                let entry = &mut next.leetcode_tasks[index];
                entry.question_count = count;
                if count > 0 {
                    entry.completed = true;
                }
                let entry = entry.clone();
                Ok((next, Some(entry)))
            }
            None if count > 0 => {
                let (next, entry) = self.push_leetcode(date, count);
                Ok((next, Some(entry)))
            }
            None => Ok((self.clone(), None)),
        }
    }

    fn push_leetcode(&self, date: DayKey, question_count: u32) -> (Self, LeetCodeEntry) {
        let (mut next, id) = self.issue_id();
        let entry = LeetCodeEntry {
            id,
            date,
            completed: true,
            question_count,
        };
        next.leetcode_tasks.push(entry.clone());
        (next, entry)
    }

    pub fn set_profile_image(&self, image: String) -> Self {
        Self {
            profile_image: image,
            ..self.clone()
        }
    }

    pub fn import(&self, import: ImportRequest) -> Self {
        let next = Self {
            tasks: import.tasks.unwrap_or_else(|| self.tasks.clone()),
            leetcode_tasks: import.leetcode_tasks.unwrap_or_else(|| self.leetcode_tasks.clone()),
            profile_image: import.profile_image.unwrap_or_default(),
            next_id: self.next_id,
        };
        let next_id = next.next_id.max(next.max_id().saturating_add(1));
        Self { next_id, ..next }
    }
}
