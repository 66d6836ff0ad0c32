//! Info page handler

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use chrono::Local;

/// Render the info fragment for a contact count and timestamp
pub fn render_info(count: usize, time: &str) -> String {
    format!("<p>Phonebook has info for {} people</p>\n<p>{}</p>", count, time)
}

/// GET /info - Contact count and current server time
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let count = state.store.count().await?;
    let time = Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string();

    Ok(Html(render_info(count, &time)))
}
