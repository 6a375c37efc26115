use crate::date_key::DayKey;
use crate::models::{DatedRecord, Task};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayTasks {
    pub tasks: Vec<Task>,
    pub points: u64,
}

impl DayTasks {
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}

/// Tasks dated `day`, in insertion order, and the points earned on them.
pub fn compute_day_tasks(tasks: &[Task], day: DayKey) -> DayTasks {
    let tasks: Vec<Task> = tasks.iter().filter(|task| task.date == day).cloned().collect();
    let points = tasks.iter().map(DatedRecord::value).sum();
    DayTasks { tasks, points }
}

pub fn compute_total_score(tasks: &[Task]) -> u64 {
    tasks.iter().map(DatedRecord::value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, date: &str, completed: bool, points: Option<u32>) -> Task {
        Task {
            id,
            text: format!("task {id}"),
            date: date.parse().unwrap(),
            completed,
            points,
        }
    }

    #[test]
    fn day_without_tasks_is_empty() {
        let tasks = [task(1, "2024-03-04", true, Some(10))];
        let result = compute_day_tasks(&tasks, "2024-03-05".parse().unwrap());
        assert!(result.tasks.is_empty());
        assert_eq!(result.points, 0);
    }

    #[test]
    fn day_keeps_order_and_sums_completed_only() {
        let tasks = [
            task(3, "2024-03-05", true, Some(5)),
            task(1, "2024-03-04", true, Some(100)),
            task(2, "2024-03-05", false, Some(40)),
            task(4, "2024-03-05", true, None),
        ];
        let result = compute_day_tasks(&tasks, "2024-03-05".parse().unwrap());

        let ids: Vec<u64> = result.tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![3, 2, 4]);
        assert_eq!(result.points, 15);
        assert_eq!(result.completed_count(), 2);
    }

    #[test]
    fn total_defaults_missing_points() {
        let tasks = [
            task(1, "2024-03-01", true, None),
            task(2, "2024-03-02", true, Some(7)),
            task(3, "2024-03-03", false, Some(50)),
        ];
        assert_eq!(compute_total_score(&tasks), 17);
    }

    #[test]
    fn total_moves_with_completion_and_deletion() {
        let mut tasks = vec![
            task(1, "2024-03-01", true, Some(10)),
            task(2, "2024-03-02", false, Some(30)),
        ];
        let before = compute_total_score(&tasks);

        tasks[1] = tasks[1].toggled();
        let after_complete = compute_total_score(&tasks);
        assert!(after_complete >= before);
        assert_eq!(after_complete, before + 30);

        tasks.retain(|task| task.id != 2);
        assert_eq!(compute_total_score(&tasks), after_complete - 30);
    }
}
