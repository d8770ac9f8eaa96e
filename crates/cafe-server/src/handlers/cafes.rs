//! Cafe handlers

use super::{parse_id, PageError};
use crate::services::UploadService;
use crate::views::{self, path_segment};
use crate::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use cafe_core::{normalize_city, CafeError, CafeFields};
use tracing::{error, warn};

/// Multipart field carrying the optional cafe image
const IMAGE_FIELD: &str = "image";

pub async fn by_city(State(state): State<AppState>, Path(city): Path<String>) -> Html<String> {
    let city = normalize_city(&city);
    let store = state.store.read().await;
    let cafes = store.list_by_city(&city);
    Html(views::cafes::list(
        &city,
        state.catalog.image_for(&city),
        &cafes,
    ))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    const NOT_FOUND: PageError = (StatusCode::NOT_FOUND, "cafe not found");

    let id = parse_id(&id).ok_or(NOT_FOUND)?;
    let store = state.store.read().await;
    let cafe = store.find_cafe(id).map_err(|_| NOT_FOUND)?;
    Ok(Html(views::cafes::details(cafe)))
}

pub async fn new_form() -> Html<String> {
    Html(views::cafes::add_form())
}

pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, PageError> {
    let (fields, image) = read_cafe_form(&state.uploads, multipart).await?;

    let created = state
        .store
        .write()
        .await
        .create_cafe(fields, image.clone());

    match created {
        Ok(cafe) => Ok(Redirect::to(&format!("/city/{}", path_segment(&cafe.city)))),
        Err(e) => {
            error!("Failed to add cafe: {}", e);
            discard_upload(&state.uploads, image).await;
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to add cafe"))
        }
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    const NOT_FOUND: PageError = (StatusCode::NOT_FOUND, "Cafe not found");

    let id = parse_id(&id).ok_or(NOT_FOUND)?;
    let store = state.store.read().await;
    let cafe = store.find_cafe(id).map_err(|_| NOT_FOUND)?;
    Ok(Html(views::cafes::edit_form(cafe)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Redirect, PageError> {
    const NOT_FOUND: PageError = (StatusCode::NOT_FOUND, "Cafe not found");

    let id = parse_id(&id).ok_or(NOT_FOUND)?;
    if state.store.read().await.find_cafe(id).is_err() {
        return Err(NOT_FOUND);
    }

    let (fields, image) = read_cafe_form(&state.uploads, multipart).await?;

    let updated = state
        .store
        .write()
        .await
        .update_cafe(id, fields, image.clone());

    match updated {
        Ok(_) => Ok(Redirect::to(&format!("/cafe-details/{}", id))),
        Err(CafeError::CafeNotFound(_)) => {
            discard_upload(&state.uploads, image).await;
            Err(NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to update cafe {}: {}", id, e);
            discard_upload(&state.uploads, image).await;
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to update cafe"))
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    let Some(id) = parse_id(&id) else {
        warn!("Ignoring delete of non-numeric cafe id {:?}", id);
        return Ok(Redirect::to("/"));
    };

    state.store.write().await.delete_cafe(id).map_err(|e| {
        error!("Failed to delete cafe {}: {}", id, e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete cafe")
    })?;

    Ok(Redirect::to("/"))
}

/// Delete an image saved for a change that was not stored
async fn discard_upload(uploads: &UploadService, image: Option<String>) {
    if let Some(path) = image {
        uploads.remove(&path).await;
    }
}

/// Collect the text inputs and save the uploaded image, if one was chosen.
///
/// A file input left empty still arrives as a part with no filename and no
/// bytes; that counts as "no image". If the form breaks after the image was
/// saved, the image is removed again.
async fn read_cafe_form(
    uploads: &UploadService,
    multipart: Multipart,
) -> Result<(CafeFields, Option<String>), PageError> {
    let mut image = None;
    match read_fields(uploads, multipart, &mut image).await {
        Ok(fields) => Ok((fields, image)),
        Err(e) => {
            discard_upload(uploads, image).await;
            Err(e)
        }
    }
}

async fn read_fields(
    uploads: &UploadService,
    mut multipart: Multipart,
    image: &mut Option<String>,
) -> Result<CafeFields, PageError> {
    let mut fields = CafeFields::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        form_error(e)
    })? {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|e| {
                warn!("Failed to read uploaded image: {}", e);
                form_error(e)
            })?;
            if file_name.is_empty() || bytes.is_empty() {
                continue;
            }

            let path = uploads
                .save(IMAGE_FIELD, &file_name, &bytes)
                .await
                .map_err(|e| {
                    error!("{}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save image")
                })?;
            discard_upload(uploads, image.replace(path)).await;
        } else {
            let value = field.text().await.map_err(|e| {
                warn!("Failed to read form field {}: {}", name, e);
                form_error(e)
            })?;
            fields.set(&name, value);
        }
    }

    Ok(fields)
}

/// 413 when the body limit was hit, 400 for anything else
fn form_error(e: MultipartError) -> PageError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => (StatusCode::PAYLOAD_TOO_LARGE, "Upload too large"),
        _ => (StatusCode::BAD_REQUEST, "Invalid form data"),
    }
}
