pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        pub title: Option<String>,
        /// Dot-separated ingredient name fragments, e.g. `cheese.tomato`.
        pub ingredients: Option<String>,
    }
}

pub mod response {
    use crate::modules::dish::repository::FullDish;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dishes(Vec<FullDish>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dishes(dishes) => {
                    (StatusCode::OK, Json(json!({ "dishes": dishes }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchDishes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDishes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch dishes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
