/// JWT Authentication Middleware
///
/// Validates bearer access tokens from the Authorization header and injects
/// the verified claims into request extensions for use by route handlers.
/// Optionally restricts a scope to a set of roles.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::rc::Rc;
use std::sync::Arc;

use crate::auth::roles::{self, Role};
use crate::auth::TokenCodec;
use crate::error::AppError;

/// JWT middleware for protecting routes
///
/// Refresh tokens are not accepted here; only `type == "access"` passes.
pub struct JwtMiddleware {
    codec: Arc<TokenCodec>,
    required_roles: Option<&'static [Role]>,
}

impl JwtMiddleware {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self {
            codec,
            required_roles: None,
        }
    }

    /// Only let through identities holding one of `roles`
    pub fn require_roles(mut self, roles: &'static [Role]) -> Self {
        self.required_roles = Some(roles);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtMiddlewareService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(JwtMiddlewareService {
            service: Rc::new(service),
            codec: self.codec.clone(),
            required_roles: self.required_roles,
        }))
    }
}

pub struct JwtMiddlewareService<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
    required_roles: Option<&'static [Role]>,
}

/// Extract the token from an `Authorization: Bearer <token>` header value
///
/// The scheme name is case-insensitive.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn reject<B: 'static>(
    err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>> {
    let err: Error = err.into();
    Box::pin(async move { Err::<ServiceResponse<B>, Error>(err) })
}

impl<S, B> Service<ServiceRequest> for JwtMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_string);

        let token = match token {
            Some(token) => token,
            None => return reject(AppError::MissingToken),
        };

        let claims = match self.codec.decode_access_token(&token) {
            Ok(claims) => claims,
            // Detail goes to the log; the client gets the uniform 401
            Err(e) => return reject(AppError::from(e)),
        };

        if let Some(required) = self.required_roles {
            if !claims.has_any_role(required) {
                tracing::warn!(
                    subject = %claims.sub,
                    role = %claims.role,
                    "Role not permitted for this route"
                );
                return reject(AppError::Forbidden(format!(
                    "Required roles: {}",
                    roles::describe(required)
                )));
            }
        }

        tracing::debug!(
            subject = %claims.sub,
            role = %claims.role,
            "JWT validated successfully"
        );
        req.extensions_mut().insert(claims);

        let service = self.service.clone();
        Box::pin(async move { service.call(req).await })
    }
}
