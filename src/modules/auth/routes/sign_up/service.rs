use super::types::{request, response};
use crate::{modules::user, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.to_lowercase();

    if user::repository::find_by_email(&ctx.db_conn.pool, email.clone())
        .await
        .map_err(|_| response::Error::SignUpFailed)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash = bcrypt::hash(payload.password, bcrypt::DEFAULT_COST).map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::SignUpFailed
    })?;

    user::repository::create(
        &ctx.db_conn.pool,
        user::repository::CreateUserPayload {
            name: payload.name,
            email,
            password_hash,
        },
    )
    .await
    .map_err(|_| response::Error::SignUpFailed)
    .map(response::Success::UserRegistered)
}

#[cfg(test)]
mod tests {
    #[test]
    fn password_hashes_are_salted_and_verifiable() {
        let hash = bcrypt::hash("hunter2-but-longer", bcrypt::DEFAULT_COST).unwrap();

        assert_ne!(hash, "hunter2-but-longer");
        assert!(bcrypt::verify("hunter2-but-longer", &hash).unwrap());
        assert!(!bcrypt::verify("something-else", &hash).unwrap());
    }
}
