use super::types::{request, response};
use crate::{
    modules::dish::repository,
    types::Context,
    utils::storage,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)?
        .ok_or(response::Error::DishNotFound)?;

    // ingredient rows go with the dish via the FK cascade
    repository::delete_by_id(&ctx.db_conn.pool, dish.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteDish)?;

    if let Some(image) = dish.image.as_deref() {
        let _ = storage::remove(&ctx.storage, image);
    }

    Ok(response::Success::DishDeleted)
}
