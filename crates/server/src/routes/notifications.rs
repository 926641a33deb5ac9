use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use service::notify::{Notification, NotificationLog};

pub fn routes(log: Arc<NotificationLog>) -> Router {
    Router::new()
        .route("/admin/notifications", get(list).delete(clear))
        .with_state(log)
}

/// Most recent notifications, oldest first.
pub async fn list(State(log): State<Arc<NotificationLog>>) -> Json<Vec<Notification>> {
    Json(log.recent())
}

pub async fn clear(State(log): State<Arc<NotificationLog>>) -> StatusCode {
    log.clear();
    StatusCode::NO_CONTENT
}
