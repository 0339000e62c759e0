//! Custom extractors
//!
//! Wrap the stock axum extractors so that their rejections surface as the
//! service's coded error responses.

use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use roman_core::ErrorCode;
use tracing::{error, warn};

/// Query string as ordered `(name, value)` pairs, repeated names kept
pub struct QueryPairs(pub Vec<(String, String)>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => {
                warn!("Failed to parse query string: {}", rejection);
                Err(ErrorCode::InvalidParam.into())
            }
        }
    }
}

/// Fully buffered request body
///
/// Any failure while reading (stream error, size limit) is a
/// `FailedReadBody` error.
pub struct RawBody(pub Bytes);

#[axum::async_trait]
impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(Self)
            .map_err(|rejection| {
                error!("Failed to read request body: {}", rejection);
                ErrorCode::FailedReadBody.into()
            })
    }
}
