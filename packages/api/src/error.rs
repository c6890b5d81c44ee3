use thiserror::Error;

/// Outcome of a remote call: `Ok` is `Success(T)`, `Err` is `Failure(reason)`.
pub type OperationResult<T> = Result<T, GalleryError>;

/// Every way a gallery operation can fail.
///
/// Transport and server failures are caught at the store boundary and never
/// escape as panics; validation failures are raised before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded {status}: {reason}")]
    Server { status: u16, reason: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Validation(String),
}

impl GalleryError {
    /// Human-readable reason shown to the user.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GalleryError::Validation(_))
    }

    /// Build a `Server` error from a non-2xx response body.
    ///
    /// The backend's error shape is not fixed, so the reason is taken from the
    /// first usable source: `error` field, `message` field, a JSON string
    /// body, the raw text, and finally the status text.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let reason = extract_reason(body)
            .unwrap_or_else(|| status_text.trim().to_string())
            .trim()
            .to_string();
        let reason = if reason.is_empty() {
            format!("HTTP {status}")
        } else {
            reason
        };
        GalleryError::Server { status, reason }
    }
}

fn extract_reason(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(serde_json::Value::Object(map)) => ["error", "message"]
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(|v| match v {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                serde_json::Value::Null | serde_json::Value::String(_) => None,
                other => Some(other.to_string()),
            })
            .or_else(|| Some(body.to_string())),
        _ => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_prefers_error_field() {
        let err = GalleryError::from_response(
            500,
            "Internal Server Error",
            r#"{"data":null,"error":"An error occured during image upload: boom"}"#,
        );
        assert_eq!(
            err,
            GalleryError::Server {
                status: 500,
                reason: "An error occured during image upload: boom".to_string(),
            }
        );
    }

    #[test]
    fn reason_falls_back_to_message_field() {
        let err = GalleryError::from_response(400, "Bad Request", r#"{"message":"too big"}"#);
        assert!(err.reason().contains("too big"));
    }

    #[test]
    fn reason_uses_raw_text_body() {
        let err = GalleryError::from_response(502, "Bad Gateway", "upstream timed out\n");
        assert_eq!(err.reason(), "server responded 502: upstream timed out");
    }

    #[test]
    fn reason_keeps_unrecognized_json_verbatim() {
        let err = GalleryError::from_response(422, "Unprocessable Entity", r#"{"code":7}"#);
        assert!(err.reason().contains(r#"{"code":7}"#));
    }

    #[test]
    fn reason_falls_back_to_status_text() {
        let err = GalleryError::from_response(503, "Service Unavailable", "  ");
        assert_eq!(err.reason(), "server responded 503: Service Unavailable");

        let err = GalleryError::from_response(599, "", "");
        assert_eq!(err.reason(), "server responded 599: HTTP 599");
    }

    #[test]
    fn validation_is_flagged() {
        assert!(GalleryError::Validation("no file selected".into()).is_validation());
        assert!(!GalleryError::Transport("refused".into()).is_validation());
    }
}
