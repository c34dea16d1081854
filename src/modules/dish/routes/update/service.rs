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
        .map_err(|_| response::Error::FailedToUpdateDish)?
        .ok_or(response::Error::DishNotFound)?;

    if let Some(title) = payload.body.title.as_deref() {
        if title != dish.title
            && repository::find_by_title(&ctx.db_conn.pool, title.to_string())
                .await
                .map_err(|_| response::Error::FailedToUpdateDish)?
                .is_some()
        {
            return Err(response::Error::DishAlreadyExists);
        }
    }

    let new_image = match payload.body.image {
        Some(field) => Some(
            storage::store(
                &ctx.storage,
                field.contents,
                field.metadata.file_name.as_deref(),
            )
            .map_err(|_| response::Error::FailedToUploadImage)?,
        ),
        None => None,
    };

    let result = update_dish_with_ingredients(
        ctx.clone(),
        dish.id.clone(),
        repository::UpdateDishPayload {
            title: payload.body.title,
            description: payload.body.description,
            category: payload.body.category,
            price: payload.body.price.map(|price| price.0.to_string()),
            image: new_image.clone(),
        },
        payload.body.ingredients.map(|i| i.into_names()),
    )
    .await;

    match result {
        Ok(()) => {
            // the replaced image is unreachable now, drop it from storage
            if new_image.is_some() {
                if let Some(previous) = dish.image.as_deref() {
                    let _ = storage::remove(&ctx.storage, previous);
                }
            }
            Ok(response::Success::DishUpdated)
        }
        Err(err) => {
            if let Some(image) = new_image.as_deref() {
                let _ = storage::remove(&ctx.storage, image);
            }
            Err(err)
        }
    }
}

async fn update_dish_with_ingredients(
    ctx: Arc<Context>,
    dish_id: String,
    payload: repository::UpdateDishPayload,
    ingredients: Option<Vec<String>>,
) -> Result<(), response::Error> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateDish
    })?;

    repository::update_by_id(&mut *tx, dish_id.clone(), payload)
        .await
        .map_err(|_| response::Error::FailedToUpdateDish)?;

    if let Some(names) = ingredients {
        repository::delete_ingredients_by_dish_id(&mut *tx, dish_id.clone())
            .await
            .map_err(|_| response::Error::FailedToUpdateDish)?;

        repository::create_ingredients(&mut *tx, dish_id, names)
            .await
            .map_err(|_| response::Error::FailedToUpdateDish)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToUpdateDish
    })
}
