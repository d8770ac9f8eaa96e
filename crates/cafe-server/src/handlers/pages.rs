//! Static page handlers

use crate::{views, AppState};
use axum::{extract::State, response::Html};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(views::pages::index(&state.catalog))
}

pub async fn about() -> Html<String> {
    Html(views::pages::about())
}

pub async fn contact() -> Html<String> {
    Html(views::pages::contact())
}

pub async fn privacy() -> Html<String> {
    Html(views::pages::privacy())
}
