/// Authentication Routes
///
/// Token refresh and current identity. Credential login lives with the
/// user store; these handlers only need the token codec.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::{Claims, TokenCodec};
use crate::error::{AppError, ErrorContext};

/// Token refresh request
#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Verified identity of the caller
#[derive(Serialize, Deserialize)]
pub struct IdentityResponse {
    pub sub: String,
    pub role: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<&Claims> for IdentityResponse {
    fn from(claims: &Claims) -> Self {
        Self {
            sub: claims.sub.clone(),
            role: claims.role.clone(),
            token_type: claims.token_type.to_string(),
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}

/// POST /auth/refresh
///
/// Exchange a refresh token for a new access/refresh pair carrying the same
/// subject and role.
///
/// # Errors
/// - 401: Invalid, expired, or access-typed token
pub async fn refresh(
    form: web::Json<RefreshRequest>,
    codec: web::Data<TokenCodec>,
) -> Result<HttpResponse, AppError> {
    let context = ErrorContext::new("token_refresh");

    let claims = codec.decode_refresh_token(&form.refresh_token).map_err(|e| {
        let e = AppError::from(e);
        context.log_error(&e);
        e
    })?;

    let context = context.with_subject(claims.sub.as_str());
    let pair = codec.issue_token_pair(&claims.sub, &claims.role).map_err(|e| {
        let e = AppError::from(e);
        context.log_error(&e);
        e
    })?;

    tracing::info!(
        request_id = %context.request_id,
        subject = %claims.sub,
        "Token refreshed successfully"
    );

    Ok(HttpResponse::Ok().json(pair))
}

/// GET /api/me
///
/// Claims of the verified access token, injected by the JWT middleware.
pub async fn get_current_identity(claims: web::ReqData<Claims>) -> HttpResponse {
    HttpResponse::Ok().json(IdentityResponse::from(&*claims))
}

/// GET /api/admin/ping
///
/// Reachable by org admins and above only.
pub async fn admin_ping(claims: web::ReqData<Claims>) -> HttpResponse {
    tracing::info!(subject = %claims.sub, role = %claims.role, "Admin ping");
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "role": claims.role }))
}
