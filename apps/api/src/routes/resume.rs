//! Axum route handler for resume document generation.

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::docx::DOCX_CONTENT_TYPE;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::render::{render_resume, LayoutPolicy, TemplateVariant};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Overrides the configured default template.
    pub template: Option<TemplateVariant>,
}

/// POST /api/resume
///
/// Renders the posted resume and returns it as a `.docx` attachment.
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    Json(resume): Json<Resume>,
) -> Result<impl IntoResponse, AppError> {
    let template = query.template.unwrap_or(state.config.default_template);
    let policy = LayoutPolicy::from(template);

    // Packaging is CPU-bound; keep it off the async workers.
    let bytes = tokio::task::spawn_blocking(move || render_resume(&resume, &policy))
        .await
        .context("resume render task failed")??;

    let file_name = format!("resume_{}.docx", Uuid::new_v4());
    info!(
        "Generated {file_name} ({} bytes, template {template})",
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={file_name}"),
            ),
        ],
        Bytes::from(bytes),
    ))
}
