//! Health check handler

/// GET /healthz
pub async fn healthz() -> &'static str {
    "OK"
}
