pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::modules::dish::fields::{Ingredients, Price};
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub title: String,
        pub description: String,
        pub category: String,
        pub price: Price,
        #[form_data(limit = "10MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
        pub ingredients: Option<Ingredients>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::dish::repository::Dish;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Dish created!",
                        "id": dish.id
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        DishAlreadyExists,
        FailedToUploadImage,
        FailedToCreateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishAlreadyExists => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "This dish is already on the menu" })),
                )
                    .into_response(),
                Self::FailedToUploadImage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload image" })),
                )
                    .into_response(),
                Self::FailedToCreateDish => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create dish" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
