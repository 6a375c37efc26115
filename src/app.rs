use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::add_task))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/leetcode", get(handlers::get_leetcode))
        .route("/api/leetcode/toggle", post(handlers::toggle_leetcode))
        .route("/api/leetcode/count", post(handlers::set_leetcode_count))
        .route("/api/profile-image", put(handlers::set_profile_image))
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .with_state(state)
}
