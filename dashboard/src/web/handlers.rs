//! HTTP handlers for the dashboard

use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::{Context, Cookies};
use std::sync::Arc;

use crate::core::{ChartKind, Dataset, PREVIEW_ROWS, figure, is_csv_filename};
use crate::error::DashboardResult;
use crate::state::{AppState, UploadedDataset};

pub const NO_FILE_MESSAGE: &str = "No file uploaded yet.";
pub const NOT_CSV_MESSAGE: &str = "The file you uploaded is not a CSV file.";

fn processing_error(reason: impl std::fmt::Display) -> String {
    format!("There was an error processing this file: {}", reason)
}

#[derive(Debug, Serialize)]
struct ChartKindView {
    value: &'static str,
    label: &'static str,
}

fn render_page(
    state: &AppState,
    upload: Option<&UploadedDataset>,
    message: Option<&str>,
) -> DashboardResult<Html<String>> {
    let mut context = Context::new();
    context.insert("message", &message);
    context.insert(
        "chart_kinds",
        &ChartKind::ALL
            .iter()
            .map(|kind| ChartKindView {
                value: kind.value(),
                label: kind.label(),
            })
            .collect::<Vec<_>>(),
    );
    context.insert("default_kind", ChartKind::default().value());

    match upload {
        Some(upload) => {
            let dataset = &upload.dataset;
            let preview = dataset.preview(PREVIEW_ROWS);
            context.insert("has_data", &true);
            context.insert("filename", &upload.filename);
            context.insert("columns", &dataset.column_names());
            context.insert("rows", &preview);
            context.insert("shown_rows", &preview.len());
            context.insert("total_rows", &dataset.row_count());
        }
        None => context.insert("has_data", &false),
    }

    Ok(state.templates.render("index.html", &context)?)
}

/// Upload form, plus the current dataset if this visitor has one
pub async fn home(State(state): State<AppState>, cookies: Cookies) -> DashboardResult<Html<String>> {
    let upload = match state.sessions.existing_id(&cookies) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };
    match upload {
        Some(upload) => render_page(&state, Some(upload.as_ref()), None),
        None => render_page(&state, None, Some(NO_FILE_MESSAGE)),
    }
}

fn multipart_failure(state: &AppState, err: MultipartError) -> DashboardResult<Response> {
    shared::app_warn!("⚠️ Upload failed: {}", err.body_text());
    let page = render_page(state, None, Some(&processing_error(err.body_text())))?;
    Ok((err.status(), page).into_response())
}

/// Accept a multipart upload with the file in field `file`
pub async fn upload(
    State(state): State<AppState>,
    cookies: Cookies,
    mut multipart: Multipart,
) -> DashboardResult<Response> {
    let mut file: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return multipart_failure(&state, err),
        };
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => file = Some((filename, bytes.to_vec())),
            Err(err) => return multipart_failure(&state, err),
        }
    }

    let session_id = state.sessions.session_id(&cookies);

    let (filename, bytes) = match file {
        Some((filename, _)) if filename.trim().is_empty() => {
            return Ok(render_page(&state, None, Some(NO_FILE_MESSAGE))?.into_response());
        }
        Some(file) => file,
        None => return Ok(render_page(&state, None, Some(NO_FILE_MESSAGE))?.into_response()),
    };

    if !is_csv_filename(&filename) {
        state.sessions.remove(session_id).await;
        shared::app_warn!("📄 Rejected non-CSV upload {}", filename);
        return Ok(render_page(&state, None, Some(NOT_CSV_MESSAGE))?.into_response());
    }

    let dataset = match Dataset::from_csv(&bytes) {
        Ok(dataset) => dataset,
        Err(reason) => {
            state.sessions.remove(session_id).await;
            shared::app_warn!("📄 Could not parse {}: {}", filename, reason);
            let page = render_page(&state, None, Some(&processing_error(&reason)))?;
            return Ok(page.into_response());
        }
    };

    shared::app_info!(
        "📊 Loaded {} ({} rows, {} columns)",
        filename,
        dataset.row_count(),
        dataset.columns().len()
    );
    let upload = Arc::new(UploadedDataset { filename, dataset });
    state.sessions.insert(session_id, upload.clone()).await;

    Ok(render_page(&state, Some(upload.as_ref()), None)?.into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub x: Option<String>,
    pub y: Option<String>,
    pub kind: Option<String>,
}

/// Plotly figure for the visitor's dataset; `{}` until there is something to plot
pub async fn chart(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(query): Query<ChartQuery>,
) -> DashboardResult<Json<Value>> {
    let upload = match state.sessions.existing_id(&cookies) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    let selected = |value: Option<String>| value.filter(|v| !v.is_empty());
    let (Some(upload), Some(x), Some(y)) = (upload, selected(query.x), selected(query.y)) else {
        return Ok(Json(json!({})));
    };

    let kind = match selected(query.kind) {
        Some(kind) => kind.parse::<ChartKind>()?,
        None => ChartKind::default(),
    };

    Ok(Json(figure(&upload.dataset, &x, &y, kind)?))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": "dashboard",
        "active_sessions": state.sessions.len().await,
        "max_upload_bytes": state.max_upload_bytes,
        "timestamp": Utc::now().timestamp(),
    }))
}
