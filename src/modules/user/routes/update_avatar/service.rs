use super::types::{request, response};
use crate::{
    modules::user::repository,
    types::Context,
    utils::storage,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let avatar = storage::store(
        &ctx.storage,
        payload.body.avatar.contents,
        payload.body.avatar.metadata.file_name.as_deref(),
    )
    .map_err(|_| response::Error::FailedToUploadAvatar)?;

    if let Err(err) = repository::update_by_id(
        &ctx.db_conn.pool,
        payload.auth.user.id.clone(),
        repository::UpdateUserPayload {
            name: None,
            email: None,
            password_hash: None,
            avatar: Some(avatar.clone()),
        },
    )
    .await
    {
        tracing::error!("Failed to attach avatar to user: {:?}", err);
        let _ = storage::remove(&ctx.storage, &avatar);
        return Err(response::Error::FailedToUpdateUser);
    }

    // the previous avatar is unreachable now, drop it from storage
    if let Some(previous) = payload.auth.user.avatar.as_deref() {
        let _ = storage::remove(&ctx.storage, previous);
    }

    Ok(response::Success::AvatarUpdated(avatar))
}
