use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Dish {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub dish_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct FullDish {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub ingredients: sqlx::types::Json<Vec<Ingredient>>,
}

pub struct CreateDishPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: Option<String>,
    pub owner_id: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateDishPayload) -> Result<Dish> {
    sqlx::query_as::<_, Dish>(
        "
        INSERT INTO dishes (id, title, description, category, price, image, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.category)
    .bind(payload.price)
    .bind(payload.image)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a dish: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Dish>> {
    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch dish by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_title<'e, E: PgExecutor<'e>>(e: E, title: String) -> Result<Option<Dish>> {
    sqlx::query_as::<_, Dish>("SELECT * FROM dishes WHERE title = $1")
        .bind(title)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch dish by title: {}", err);
            Error::UnexpectedError
        })
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct DishPrice {
    pub id: String,
    pub price: String,
}

pub async fn find_prices_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: Vec<String>,
) -> Result<Vec<DishPrice>> {
    sqlx::query_as::<_, DishPrice>("SELECT id, price FROM dishes WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch dish prices: {}",
                err
            );
            Error::UnexpectedError
        })
}

#[derive(Clone, Debug, Default)]
pub struct Filters {
    pub owner_id: Option<String>,
    /// `ILIKE` pattern matched against the dish title.
    pub title: Option<String>,
    /// `ILIKE` patterns matched against ingredient names; a dish matches
    /// when at least one of its ingredients matches any pattern.
    pub ingredients: Option<Vec<String>>,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E, filters: Filters) -> Result<Vec<FullDish>> {
    sqlx::query_as::<_, FullDish>(
        "
        SELECT
            dishes.*,
            COALESCE(
                JSONB_AGG(
                    JSONB_BUILD_OBJECT(
                        'id', ingredients.id,
                        'name', ingredients.name,
                        'dish_id', ingredients.dish_id
                    )
                ) FILTER (WHERE ingredients.id IS NOT NULL),
                '[]'::JSONB
            ) AS ingredients
        FROM dishes
        LEFT JOIN ingredients ON ingredients.dish_id = dishes.id
        WHERE
            ($1::VARCHAR IS NULL OR dishes.owner_id = $1)
            AND ($2::VARCHAR IS NULL OR dishes.title ILIKE $2)
        GROUP BY dishes.id
        HAVING ($3::VARCHAR[] IS NULL OR BOOL_OR(ingredients.name ILIKE ANY($3)))
        ORDER BY dishes.created_at DESC
        ",
    )
    .bind(filters.owner_id)
    .bind(filters.title)
    .bind(filters.ingredients)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many dishes: {}", err);
        Error::UnexpectedError
    })
}

pub struct UpdateDishPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateDishPayload,
) -> Result<()> {
    sqlx::query(
        "
            UPDATE dishes SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                category = COALESCE($3, category),
                price = COALESCE($4, price),
                image = COALESCE($5, image),
                updated_at = NOW()
            WHERE
                id = $6
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.category)
    .bind(payload.price)
    .bind(payload.image)
    .bind(id.clone())
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update dish by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM dishes WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete dish by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}

pub async fn create_ingredients<'e, E: PgExecutor<'e>>(
    e: E,
    dish_id: String,
    names: Vec<String>,
) -> Result<()> {
    if names.is_empty() {
        return Ok(());
    }

    let ids = names
        .iter()
        .map(|_| Ulid::new().to_string())
        .collect::<Vec<String>>();

    sqlx::query(
        "
        INSERT INTO ingredients (id, name, dish_id)
        SELECT id, name, $3
        FROM UNNEST($1::VARCHAR[], $2::VARCHAR[]) AS t (id, name)
        ",
    )
    .bind(ids)
    .bind(names)
    .bind(dish_id.clone())
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create ingredients for dish {}: {}",
            dish_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn delete_ingredients_by_dish_id<'e, E: PgExecutor<'e>>(
    e: E,
    dish_id: String,
) -> Result<()> {
    sqlx::query("DELETE FROM ingredients WHERE dish_id = $1")
        .bind(dish_id.clone())
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete ingredients for dish {}: {}",
                dish_id,
                err
            );
            Error::UnexpectedError
        })
        .map(|_| ())
}
