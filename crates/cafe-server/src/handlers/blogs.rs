//! Blog handlers

use super::{parse_id, PageError};
use crate::{views, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

pub async fn list(State(state): State<AppState>) -> Html<String> {
    let store = state.store.read().await;
    Html(views::blogs::list(store.blogs()))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    const NOT_FOUND: PageError = (StatusCode::NOT_FOUND, "post not found");

    let id = parse_id(&id).ok_or(NOT_FOUND)?;
    let store = state.store.read().await;
    let blog = store.find_blog(id).map_err(|_| NOT_FOUND)?;
    Ok(Html(views::blogs::post(blog)))
}
