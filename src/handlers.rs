use crate::date_key::DayKey;
use crate::errors::{AppError, PlannerError};
use crate::leetcode::build_tracker;
use crate::models::{
    DateQuery, ExportDocument, ImportRequest, LeetCodeCountRequest, LeetCodeEntry, LeetCodeResponse,
    LeetCodeToggleRequest, NewTaskRequest, PlannerData, ProfileImageRequest, SummaryResponse, Task,
};
use crate::score::{compute_day_tasks, compute_total_score};
use crate::state::{Access, AppState};
use crate::storage::persist_data;
use crate::streak::compute_streak;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Html<String>, AppError> {
    let day = selected_day(&query)?;
    let data = state.data.lock().await;
    Ok(Html(render_index(&build_summary(&data, day, DayKey::today()))))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let day = selected_day(&query)?;
    let data = state.data.lock().await;
    Ok(Json(build_summary(&data, day, DayKey::today())))
}

pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    let data = state.data.lock().await;
    Json(data.tasks.clone())
}

pub async fn add_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    require_admin(&state, &headers)?;
    let date = parse_day(&payload.date)?;
    let task = apply(&state, |data| data.add_task(&payload.text, date)).await?;
    info!(id = task.id, date = %task.date, "task added");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Task>, AppError> {
    require_admin(&state, &headers)?;
    let today = DayKey::today();
    let task = apply(&state, |data| data.toggle_task(id, today))
        .await
        .inspect_err(|err| {
            if err.status == StatusCode::CONFLICT {
                warn!(id, "refused to complete a future task");
            }
        })?;
    info!(id, completed = task.completed, "task toggled");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers)?;
    apply(&state, |data| data.delete_task(id).map(|next| (next, ()))).await?;
    info!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_leetcode(State(state): State<AppState>) -> Result<Json<LeetCodeResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_tracker(&data.leetcode_tasks, DayKey::today())?))
}

pub async fn toggle_leetcode(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LeetCodeToggleRequest>,
) -> Result<Json<LeetCodeEntry>, AppError> {
    require_admin(&state, &headers)?;
    let date = parse_day(&payload.date)?;
    let today = DayKey::today();
    let entry = apply(&state, |data| data.toggle_leetcode(date, today)).await?;
    info!(%date, completed = entry.completed, "leetcode day toggled");
    Ok(Json(entry))
}

pub async fn set_leetcode_count(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LeetCodeCountRequest>,
) -> Result<Json<Option<LeetCodeEntry>>, AppError> {
    require_admin(&state, &headers)?;
    let date = parse_day(&payload.date)?;
    let today = DayKey::today();
    let entry = apply(&state, |data| data.set_leetcode_count(date, payload.count, today)).await?;
    Ok(Json(entry))
}

pub async fn set_profile_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProfileImageRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, &headers)?;
    apply(&state, |data| Ok((data.set_profile_image(payload.image), ()))).await?;
    info!("profile image replaced");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_data(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let data = state.data.lock().await;
    let document = ExportDocument {
        data: &data,
        export_date: Utc::now().to_rfc3339(),
    };
    let value = serde_json::to_value(&document).map_err(AppError::internal)?;
    Ok(Json(value))
}

pub async fn import_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    require_admin(&state, &headers)?;
    // Bad dates inside imported records surface here as a rejection.
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let today = DayKey::today();
    let summary = apply(&state, |data| {
        let next = data.import(payload);
        let summary = build_summary(&next, today, today);
        Ok((next, summary))
    })
    .await?;
    info!(tasks = summary.total_count, "planner data imported");
    Ok(Json(summary))
}

pub fn build_summary(data: &PlannerData, day: DayKey, today: DayKey) -> SummaryResponse {
    let day_tasks = compute_day_tasks(&data.tasks, day);
    SummaryResponse {
        date: day,
        completed_count: day_tasks.completed_count(),
        total_count: day_tasks.tasks.len(),
        day_points: day_tasks.points,
        tasks: day_tasks.tasks,
        streak: compute_streak(&data.tasks, today),
        total_score: compute_total_score(&data.tasks),
        leetcode_streak: compute_streak(&data.leetcode_tasks, today),
        profile_image: data.profile_image.clone(),
    }
}

/// Runs a transition against the current document, persists the result and
/// only then makes it current.
async fn apply<T>(
    state: &AppState,
    transition: impl FnOnce(&PlannerData) -> Result<(PlannerData, T), PlannerError>,
) -> Result<T, AppError> {
    let mut data = state.data.lock().await;
    let (next, output) = transition(&data)?;
    persist_data(&state.data_path, &next).await?;
    *data = next;
    Ok(output)
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    match state.access(headers) {
        Access::Admin => Ok(()),
        Access::Viewer => Err(AppError::forbidden()),
    }
}

fn selected_day(query: &DateQuery) -> Result<DayKey, AppError> {
    match query.date.as_deref().map(str::trim) {
        None | Some("") => Ok(DayKey::today()),
        Some(raw) => parse_day(raw),
    }
}

fn parse_day(raw: &str) -> Result<DayKey, AppError> {
    Ok(raw.parse::<DayKey>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_combines_day_and_all_time_figures() {
        let today: DayKey = "2024-03-05".parse().unwrap();
        let yesterday = today.pred().unwrap();
        let data = PlannerData::default();
        let (data, a) = data.add_task("a", yesterday).unwrap();
        let (data, b) = data.add_task("b", today).unwrap();
        let (data, _) = data.add_task("c", today).unwrap();
        let (data, _) = data.toggle_task(a.id, today).unwrap();
        let (data, _) = data.toggle_task(b.id, today).unwrap();
        let (data, _) = data.toggle_leetcode(yesterday, today).unwrap();

        let summary = build_summary(&data, today, today);
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.day_points, 10);
        assert_eq!(summary.total_score, 20);
        assert_eq!(summary.streak, 2);
        assert_eq!(summary.leetcode_streak, 1);
    }

    #[test]
    fn blank_query_means_today() {
        let query = DateQuery { date: Some("  ".into()) };
        assert_eq!(selected_day(&query).unwrap(), DayKey::today());
    }

    #[test]
    fn malformed_query_is_bad_request() {
        let query = DateQuery { date: Some("2024-02-30".into()) };
        let err = selected_day(&query).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
