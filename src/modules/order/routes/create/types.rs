pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::modules::order::repository::OrderStatus;
    use serde::Deserialize;

    #[derive(Deserialize, Clone)]
    pub struct CartItem {
        /// Id of the dish being ordered.
        pub id: String,
        pub title: String,
        pub quantity: i32,
    }

    #[derive(Deserialize)]
    pub struct Body {
        pub status: OrderStatus,
        #[serde(rename = "paymentMethod")]
        pub payment_method: String,
        pub cart: Vec<CartItem>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "order": order.id }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        UnresolvablePrice(String),
        FailedToCreateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UnresolvablePrice(dish_id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": format!("No resolvable price for dish {}", dish_id)
                    })),
                )
                    .into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
