use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = repository::find_by_id(&ctx.db_conn.pool, payload.auth.user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateUser)?
        .ok_or(response::Error::UserNotFound)?;

    let email = payload.body.email.to_lowercase();

    if let Some(existing) = repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateUser)?
    {
        if existing.id != user.id {
            return Err(response::Error::EmailAlreadyInUse);
        }
    }

    let old_password_matches =
        bcrypt::verify(payload.body.old_password, user.password_hash.as_ref()).map_err(|err| {
            tracing::error!("Failed to verify password hash: {}", err);
            response::Error::FailedToUpdateUser
        })?;

    if !old_password_matches {
        return Err(response::Error::IncorrectOldPassword);
    }

    let password_hash =
        bcrypt::hash(payload.body.password, bcrypt::DEFAULT_COST).map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            response::Error::FailedToUpdateUser
        })?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        user.id,
        repository::UpdateUserPayload {
            name: Some(payload.body.name),
            email: Some(email),
            password_hash: Some(password_hash),
            avatar: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateUser)
    .map(|_| response::Success::UserUpdated)
}
