pub mod request {
    use crate::modules::order::repository::OrderStatus;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: OrderStatus,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderStatusUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order status updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        InvalidStatusTransition,
        FailedToUpdateOrderStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::InvalidStatusTransition => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid status transition" })),
                )
                    .into_response(),
                Self::FailedToUpdateOrderStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
