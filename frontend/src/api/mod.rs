//! Thin wrapper over the heritage REST API.
//!
//! Every function issues exactly one request and decodes the JSON answer. There
//! is no retry, caching or cancellation here; callers spawn these futures with
//! `spawn_local` and route the `Result` back into their component.

mod error;

pub use error::ApiError;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use common::model::document::Document;
use common::model::folk_song::FolkSong;
use common::model::health::HealthStatus;
use common::model::progress::{BadgeAwardResponse, UserProgress};
use common::model::restoration::RestorationResult;
use common::model::search::SearchResponse;
use common::model::story::StoryResult;
use common::model::translation::TranslationResult;
use common::model::upload::{OcrUploadResponse, SpeechUploadResponse};
use common::model::vr::{VrPreview, WelcomeMessage};
use common::requests::{RestoreRequest, SearchRequest, StoryRequest, TranslateRequest};

use crate::config::api_url;

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path)).send().await?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path)).json(body)?.send().await?;
    decode(response).await
}

async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path)).send().await?;
    decode(response).await
}

/// Sends `form` as `multipart/form-data`; the browser sets the boundary header.
async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path)).body(form)?.send().await?;
    decode(response).await
}

fn multipart(file: &File, fields: &[(&str, &str)]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::from_js)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(ApiError::from_js)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(ApiError::from_js)?;
    }
    Ok(form)
}

pub async fn welcome() -> Result<WelcomeMessage, ApiError> {
    get_json("/").await
}

pub async fn health() -> Result<HealthStatus, ApiError> {
    get_json("/health").await
}

pub async fn documents() -> Result<Vec<Document>, ApiError> {
    get_json("/documents").await
}

pub async fn folk_songs() -> Result<Vec<FolkSong>, ApiError> {
    get_json("/folk-songs").await
}

pub async fn upload_document(
    file: &File,
    script_type: &str,
    language: &str,
) -> Result<OcrUploadResponse, ApiError> {
    let form = multipart(file, &[("script_type", script_type), ("language", language)])?;
    post_multipart("/ocr/upload", form).await
}

pub async fn upload_folk_song(
    file: &File,
    performer: &str,
    region: &str,
    language: &str,
) -> Result<SpeechUploadResponse, ApiError> {
    let form = multipart(
        file,
        &[("performer", performer), ("region", region), ("language", language)],
    )?;
    post_multipart("/speech/upload", form).await
}

pub async fn restore(request: &RestoreRequest) -> Result<RestorationResult, ApiError> {
    post_json("/restore", request).await
}

pub async fn translate(request: &TranslateRequest) -> Result<TranslationResult, ApiError> {
    post_json("/translate", request).await
}

pub async fn generate_story(request: &StoryRequest) -> Result<StoryResult, ApiError> {
    post_json("/story/generate", request).await
}

pub async fn search(request: &SearchRequest) -> Result<SearchResponse, ApiError> {
    post_json("/search", request).await
}

pub async fn user_progress(user_id: &str) -> Result<UserProgress, ApiError> {
    get_json(&format!("/user/{}/progress", user_id)).await
}

pub async fn award_badge(user_id: &str, badge: &str) -> Result<BadgeAwardResponse, ApiError> {
    post_empty(&format!("/user/{}/badge/{}", user_id, badge)).await
}

pub async fn vr_preview(document_id: &str) -> Result<VrPreview, ApiError> {
    get_json(&format!("/vr/preview/{}", document_id)).await
}
