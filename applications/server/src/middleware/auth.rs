/// Access token middleware
use crate::services::CredentialCheck;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use usersearch_core::protocol::ACCESS_TOKEN_HEADER;

/// Middleware that rejects requests whose `AccessToken` header does not pass
/// the credential check. Rejections are a bare 401 with no body.
pub async fn access_token_middleware(
    State(credentials): State<Arc<dyn CredentialCheck>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing access token");
            StatusCode::UNAUTHORIZED
        })?;

    if !credentials.verify(token) {
        tracing::warn!("Access token rejected");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
