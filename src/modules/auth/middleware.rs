use super::service;
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http, http::request::Parts, response::Response};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidToken,
}

fn get_token_from_header(header: &str) -> Result<&str, Error> {
    header.strip_prefix("Bearer ").ok_or(Error::InvalidToken)
}

async fn get_user_from_header(ctx: Arc<Context>, header: String) -> Result<User, Error> {
    let token = get_token_from_header(header.as_ref())?;
    let claims =
        service::verify_token(&ctx.auth, token).map_err(|_| Error::InvalidToken)?;

    user::repository::find_by_id(&ctx.db_conn.pool, claims.sub)
        .await
        .map_err(|_| Error::InvalidToken)?
        .ok_or(Error::InvalidToken)
}

#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

async fn get_user_from_request<State: Send + Sync>(
    ctx: Arc<Context>,
    parts: &mut Parts,
    _: &State,
) -> Result<User, Response> {
    let headers = parts.extract::<HeaderMap>().await.unwrap();

    let err = (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    );

    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(err.clone().into_response())?;

    get_user_from_header(ctx.clone(), auth_header.to_string())
        .await
        .map_err(|_| err.clone().into_response())
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts.extract::<Extension<Arc<Context>>>().await.unwrap();
        get_user_from_request(ctx, parts, state)
            .await
            .map(|user| Self { user })
    }
}

#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts.extract::<Extension<Arc<Context>>>().await.unwrap();

        let user = get_user_from_request(ctx, parts, state).await?;

        if !user::repository::is_admin(&user) {
            return Err(
                (StatusCode::FORBIDDEN, Json(json!({ "error": "Forbidden" }))).into_response(),
            );
        }

        Ok(Self { user })
    }
}
