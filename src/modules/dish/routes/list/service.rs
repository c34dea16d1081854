use super::types::{request, response};
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(
        &ctx.db_conn.pool,
        repository::Filters {
            owner_id: Some(payload.auth.user.id),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchDishes)
    .map(response::Success::Dishes)
}
