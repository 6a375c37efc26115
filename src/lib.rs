pub mod app;
pub mod config;
pub mod date_key;
pub mod errors;
pub mod handlers;
pub mod leetcode;
pub mod models;
pub mod score;
pub mod state;
pub mod storage;
pub mod streak;
pub mod toggle;
pub mod transitions;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use date_key::DayKey;
pub use errors::{AppError, PlannerError, StorageError};
pub use models::{DatedRecord, LeetCodeEntry, PlannerData, Task};
pub use score::{DayTasks, compute_day_tasks, compute_total_score};
pub use state::AppState;
pub use storage::load_data;
pub use streak::compute_streak;
pub use toggle::{ToggleOutcome, can_toggle, toggle, try_toggle};
