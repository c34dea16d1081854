use super::types::{request, response};
use crate::{
    modules::dish::fields::Ingredients,
    modules::dish::repository,
    types::Context,
    utils::storage,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { body, auth } = payload;

    if repository::find_by_title(&ctx.db_conn.pool, body.title.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?
        .is_some()
    {
        return Err(response::Error::DishAlreadyExists);
    }

    let image = match body.image {
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

    let result = create_dish_with_ingredients(
        ctx.clone(),
        repository::CreateDishPayload {
            title: body.title,
            description: body.description,
            category: body.category,
            price: body.price.0.to_string(),
            image: image.clone(),
            owner_id: auth.user.id,
        },
        body.ingredients,
    )
    .await;

    match result {
        Ok(dish) => Ok(response::Success::DishCreated(dish)),
        Err(err) => {
            // the dish row never landed, so the stored image is an orphan
            if let Some(image) = image.as_deref() {
                let _ = storage::remove(&ctx.storage, image);
            }
            Err(err)
        }
    }
}

async fn create_dish_with_ingredients(
    ctx: Arc<Context>,
    payload: repository::CreateDishPayload,
    ingredients: Option<Ingredients>,
) -> Result<repository::Dish, response::Error> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateDish
    })?;

    let dish = repository::create(&mut *tx, payload)
        .await
        .map_err(|_| response::Error::FailedToCreateDish)?;

    if let Some(ingredients) = ingredients {
        repository::create_ingredients(&mut *tx, dish.id.clone(), ingredients.into_names())
            .await
            .map_err(|_| response::Error::FailedToCreateDish)?;
    }

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateDish
    })?;

    Ok(dish)
}
