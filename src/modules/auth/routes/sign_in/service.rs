use super::types::{request, response};
use crate::{
    modules::{auth::service as auth_service, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, payload.email.to_lowercase())
        .await
        .map_err(|_| response::Error::SignInFailed)?
        .ok_or(response::Error::InvalidCredentials)?;

    let password_matches =
        bcrypt::verify(payload.password, user.password_hash.as_ref()).map_err(|err| {
            tracing::error!("Failed to verify password hash: {}", err);
            response::Error::SignInFailed
        })?;

    if !password_matches {
        return Err(response::Error::InvalidCredentials);
    }

    auth_service::issue_token(&ctx.auth, user.id)
        .map_err(|_| response::Error::SignInFailed)
        .map(response::Success::TokenIssued)
}
