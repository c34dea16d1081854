use super::types::{request, response};
use crate::{
    modules::{dish, order::repository, order::service as order_service},
    types::Context,
};
use std::collections::HashMap;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish_ids = payload
        .body
        .cart
        .iter()
        .map(|item| item.id.clone())
        .collect::<Vec<String>>();

    let prices = dish::repository::find_prices_by_ids(&ctx.db_conn.pool, dish_ids)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?
        .into_iter()
        .map(|dish| (dish.id, dish.price))
        .collect::<HashMap<String, String>>();

    let cart_lines = payload
        .body
        .cart
        .iter()
        .map(|item| (item.id.clone(), item.quantity))
        .collect::<Vec<(String, i32)>>();

    let total_price = order_service::price_cart(&prices, &cart_lines).map_err(|err| {
        let order_service::Error::UnresolvablePrice { dish_id } = err;
        response::Error::UnresolvablePrice(dish_id)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    let order = repository::create(
        &mut *tx,
        repository::CreateOrderPayload {
            status: payload.body.status,
            total_price,
            payment_method: payload.body.payment_method,
            owner_id: payload.auth.user.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    let items = payload
        .body
        .cart
        .into_iter()
        .map(|item| repository::CreateOrderItemPayload {
            title: item.title,
            quantity: item.quantity,
            dish_id: item.id,
        })
        .collect::<Vec<repository::CreateOrderItemPayload>>();

    repository::create_order_items(&mut *tx, order.id.clone(), items)
        .await
        .map_err(|_| response::Error::FailedToCreateOrder)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    Ok(response::Success::OrderCreated(order))
}
