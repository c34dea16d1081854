use super::types::{request, response};
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    if !order.status.can_transition_to(&payload.body.status) {
        return Err(response::Error::InvalidStatusTransition);
    }

    repository::update_status_by_id(&ctx.db_conn.pool, order.id, payload.body.status)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)
        .map(|_| response::Success::OrderStatusUpdated)
}
