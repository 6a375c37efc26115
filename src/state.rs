use crate::models::PlannerData;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Who is making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Admin,
    Viewer,
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<PlannerData>>,
    admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: PlannerData, admin_token: Option<String>) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            admin_token: admin_token.map(Arc::from),
        }
    }

    pub fn access(&self, headers: &HeaderMap) -> Access {
        let Some(expected) = self.admin_token.as_deref() else {
            return Access::Viewer;
        };
        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        if presented == Some(expected) {
            Access::Admin
        } else {
            Access::Viewer
        }
    }
}
