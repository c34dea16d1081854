use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "DELIVERED")]
    Delivered,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("PENDING"),
            OrderStatus::InProgress => String::from("IN_PROGRESS"),
            OrderStatus::Delivered => String::from("DELIVERED"),
            OrderStatus::Cancelled => String::from("CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "IN_PROGRESS" => Ok(OrderStatus::InProgress),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

impl OrderStatus {
    /// Orders only move forward: PENDING → IN_PROGRESS → DELIVERED, with
    /// CANCELLED reachable while the order is still open. DELIVERED and
    /// CANCELLED are terminal.
    pub fn can_transition_to(&self, next: &OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::InProgress)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::InProgress, OrderStatus::Delivered)
                | (OrderStatus::InProgress, OrderStatus::Cancelled)
        )
    }
}

impl sqlx::Type<sqlx::Postgres> for OrderStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderStatus {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> std::result::Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        raw.parse().map_err(Into::into)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub payment_method: String,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderItem {
    pub id: String,
    pub title: String,
    pub quantity: i32,
    pub dish_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct FullOrder {
    pub id: String,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub payment_method: String,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub order_items: sqlx::types::Json<Vec<OrderItem>>,
}

pub struct CreateOrderPayload {
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub payment_method: String,
    pub owner_id: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (id, status, total_price, payment_method, owner_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.status.to_string())
    .bind(payload.total_price)
    .bind(payload.payment_method)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub struct CreateOrderItemPayload {
    pub title: String,
    pub quantity: i32,
    pub dish_id: String,
}

pub async fn create_order_items<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    items: Vec<CreateOrderItemPayload>,
) -> Result<()> {
    let ids = items
        .iter()
        .map(|_| Ulid::new().to_string())
        .collect::<Vec<String>>();
    let titles = items
        .iter()
        .map(|item| item.title.clone())
        .collect::<Vec<String>>();
    let quantities = items.iter().map(|item| item.quantity).collect::<Vec<i32>>();
    let dish_ids = items
        .into_iter()
        .map(|item| item.dish_id)
        .collect::<Vec<String>>();

    sqlx::query(
        "
        INSERT INTO order_items (id, title, quantity, dish_id, order_id)
        SELECT id, title, quantity, dish_id, $5
        FROM UNNEST($1::VARCHAR[], $2::VARCHAR[], $3::INT[], $4::VARCHAR[])
            AS t (id, title, quantity, dish_id)
        ",
    )
    .bind(ids)
    .bind(titles)
    .bind(quantities)
    .bind(dish_ids)
    .bind(order_id.clone())
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create items for order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<FullOrder>> {
    sqlx::query_as::<_, FullOrder>(
        "
        SELECT
            orders.*,
            COALESCE(
                JSONB_AGG(
                    JSONB_BUILD_OBJECT(
                        'id', order_items.id,
                        'title', order_items.title,
                        'quantity', order_items.quantity,
                        'dish_id', order_items.dish_id
                    )
                ) FILTER (WHERE order_items.id IS NOT NULL),
                '[]'::JSONB
            ) AS order_items
        FROM orders
        LEFT JOIN order_items ON order_items.order_id = orders.id
        WHERE orders.owner_id = $1
        GROUP BY orders.id
        ORDER BY orders.created_at DESC
        ",
    )
    .bind(owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_status_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: OrderStatus,
) -> Result<()> {
    sqlx::query(
        "
            UPDATE orders SET
                status = $1,
                updated_at = NOW()
            WHERE
                id = $2
        ",
    )
    .bind(status.to_string())
    .bind(id.clone())
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update order by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_round_trip_through_their_wire_names() {
        for raw in ["PENDING", "IN_PROGRESS", "DELIVERED", "CANCELLED"] {
            assert_eq!(raw.parse::<OrderStatus>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn unknown_statuses_are_rejected() {
        assert!("pendente".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn open_orders_move_forward() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::InProgress));
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Cancelled));
        assert!(OrderStatus::InProgress.can_transition_to(&OrderStatus::Delivered));
        assert!(OrderStatus::InProgress.can_transition_to(&OrderStatus::Cancelled));
    }

    #[test]
    fn orders_never_skip_or_regress() {
        assert!(!OrderStatus::Pending.can_transition_to(&OrderStatus::Delivered));
        assert!(!OrderStatus::InProgress.can_transition_to(&OrderStatus::Pending));
        assert!(!OrderStatus::Delivered.can_transition_to(&OrderStatus::Pending));
        assert!(!OrderStatus::Delivered.can_transition_to(&OrderStatus::InProgress));
    }

    #[test]
    fn terminal_statuses_stay_terminal() {
        for next in [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!OrderStatus::Delivered.can_transition_to(&next));
            assert!(!OrderStatus::Cancelled.can_transition_to(&next));
        }
    }
}
