use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::error::AppError;

pub const CART_TOKEN_HEADER: &str = "x-cart-token";

/// The shopper's cart session, identified by the opaque token handed out
/// by `POST /api/cart`. Carts, wishlists, and order history all key off
/// this token.
#[derive(Debug, Clone, Copy)]
pub struct CartSession {
    pub token: Uuid,
}

impl<S> FromRequestParts<S> for CartSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CART_TOKEN_HEADER)
            .ok_or_else(|| AppError::BadRequest("Missing x-cart-token header".into()))?;

        let raw = header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid x-cart-token header".into()))?;

        let token = Uuid::parse_str(raw.trim())
            .map_err(|_| AppError::BadRequest("Invalid cart token".into()))?;

        Ok(CartSession { token })
    }
}

/// Back-office guard: a static bearer token compared against the
/// ADMIN_TOKEN environment variable. Authentication providers are the
/// surrounding platform's concern, not this service's.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

impl<S> FromRequestParts<S> for AdminGuard
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::BadRequest("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::BadRequest("Invalid Authorization scheme".into()));
        }
        let token = auth_str.trim_start_matches("Bearer ").trim();

        let expected = std::env::var("ADMIN_TOKEN")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("ADMIN_TOKEN is not set")))?;

        if token != expected {
            return Err(AppError::Forbidden);
        }

        Ok(AdminGuard)
    }
}
