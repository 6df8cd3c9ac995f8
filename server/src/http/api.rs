use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

use crate::http::{AppError, svc::HttpEndpoint};
use api::{
    GetContentReq, GetContentResp, PortfolioContent, SendContactReq, SendContactResp,
    validate::{ContactForm, validate_form},
};

// http api endpoints
//
// both endpoints are POSTs of the api crate's Req structs, see the endpoint! macro

#[instrument(skip_all)]
pub(super) async fn get_content(
    State(state): State<Arc<HttpEndpoint>>,
    Json(_message): Json<GetContentReq>,
) -> Result<Response, AppError> {
    // read on every request so that content edits show up without a restart
    let doc = tokio::fs::read_to_string(&state.content)
        .await
        .with_context(|| format!("failed to read {}", state.content.display()))?;

    let content: PortfolioContent =
        serde_json::from_str(&doc).context("failed to parse portfolio content")?;

    Ok(Json(GetContentResp { content }).into_response())
}

// one line of the inbox file
#[derive(Debug, Serialize)]
struct InboxEntry<'a> {
    received_at: String,
    form: &'a ContactForm,
}

#[instrument(skip_all)]
pub(super) async fn send_contact(
    State(state): State<Arc<HttpEndpoint>>,
    Json(message): Json<SendContactReq>,
) -> Result<Response, AppError> {
    // never trust the client-side check
    let result = validate_form(&message.form);

    if !result.is_valid {
        warn!(fields = ?result.errors.keys().collect::<Vec<_>>(), "rejected contact submission");
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(result)).into_response());
    }

    info!(
        email = %message.form.email.trim(),
        subject = %message.form.subject.trim(),
        "received contact message"
    );

    if let Some(inbox) = &state.inbox {
        let entry = InboxEntry {
            received_at: Utc::now().to_rfc3339(),
            form: &message.form,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        // concurrent submissions must not interleave their lines
        let _guard = state.inbox_lock.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(inbox)
            .await
            .with_context(|| format!("failed to open inbox {}", inbox.display()))?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
    }

    Ok(Json(SendContactResp { ok: true }).into_response())
}
