use super::ImageStore;
use crate::config::ClientConfig;
use crate::error::{GalleryError, OperationResult};
use crate::types::{DeleteRequest, Envelope, ImageRecord, PendingFile, RawImageRecord};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::collections::HashSet;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "image";

const DEFAULT_DELETE_CONFIRMATION: &str = "Object deleted.";

/// HTTP backend client.
#[derive(Debug, Clone)]
pub struct HttpImageStore {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpImageStore {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and return the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> OperationResult<String> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("request to {url:?} failed: {e}");
            GalleryError::Transport(format!("{url:?}: {e}"))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GalleryError::Transport(format!("{url:?}: reading body: {e}")))?;

        if !status.is_success() {
            let err = GalleryError::from_response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &body,
            );
            tracing::warn!("{url} -> {}", err.reason());
            return Err(err);
        }

        Ok(body)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ImageStore for HttpImageStore {
    async fn ping(&self) -> OperationResult<serde_json::Value> {
        let url = self.config.endpoint("/");
        tracing::debug!("GET {url}");
        let body = self.send(self.client.get(&url), &url).await?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    async fn fetch_all(&self) -> OperationResult<Vec<ImageRecord>> {
        let url = self.config.endpoint("/list");
        tracing::debug!("GET {url}");
        let body = self.send(self.client.get(&url), &url).await?;
        let records = parse_list(&body)?;
        tracing::debug!("listed {} images", records.len());
        Ok(records)
    }

    async fn upload(&self, file: PendingFile) -> OperationResult<ImageRecord> {
        if file.is_empty() {
            return Err(GalleryError::Validation("no file selected".into()));
        }

        let url = self.config.endpoint("/upload");
        tracing::debug!("POST {url} ({file:?})");

        let PendingFile {
            name,
            content_type,
            bytes,
        } = file;
        let mut part = Part::bytes(bytes).file_name(name);
        if let Some(ct) = content_type.filter(|ct| !ct.is_empty()) {
            part = part
                .mime_str(&ct)
                .map_err(|e| GalleryError::Validation(format!("invalid content type {ct:?}: {e}")))?;
        }
        let form = Form::new().part(UPLOAD_FIELD, part);

        let body = self
            .send(self.client.post(&url).multipart(form), &url)
            .await?;
        parse_upload(&body)
    }

    async fn remove(&self, object_key: &str) -> OperationResult<String> {
        if object_key.trim().is_empty() {
            return Err(GalleryError::Validation("object key must not be empty".into()));
        }

        let url = self.config.endpoint("/delete");
        tracing::debug!("POST {url} key={object_key}");
        let request = self.client.post(&url).json(&DeleteRequest {
            file_name: object_key.to_string(),
        });
        let body = self.send(request, &url).await?;
        Ok(parse_confirmation(&body))
    }
}

fn parse_list(body: &str) -> OperationResult<Vec<ImageRecord>> {
    let envelope: Envelope<Vec<RawImageRecord>> = serde_json::from_str(body)
        .map_err(|e| GalleryError::MalformedResponse(format!("list body: {e}")))?;
    let raw = envelope.data.ok_or_else(|| {
        GalleryError::MalformedResponse(
            envelope
                .error
                .unwrap_or_else(|| "list body without data".to_string()),
        )
    })?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());
    for item in raw {
        let record = ImageRecord::try_from(item)?;
        if seen.insert(record.object_key.clone()) {
            records.push(record);
        } else {
            tracing::warn!("dropping duplicate object key {}", record.object_key);
        }
    }
    Ok(records)
}

fn parse_upload(body: &str) -> OperationResult<ImageRecord> {
    let envelope: Envelope<RawImageRecord> = serde_json::from_str(body)
        .map_err(|e| GalleryError::MalformedResponse(format!("upload body: {e}")))?;
    match envelope.data {
        Some(raw) => ImageRecord::try_from(raw),
        None => Err(GalleryError::MalformedResponse(
            envelope
                .error
                .unwrap_or_else(|| "upload body without data".to_string()),
        )),
    }
}

fn parse_confirmation(body: &str) -> String {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => match map.get("data") {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    };
    if message.trim().is_empty() {
        DEFAULT_DELETE_CONFIRMATION.to_string()
    } else {
        message
    }
}
