pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::modules::dish::fields::{Ingredients, Price};
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    /// Absent parts keep the stored values; supplied parts overwrite them.
    #[derive(TryFromMultipart)]
    pub struct Body {
        pub title: Option<String>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub price: Option<Price>,
        #[form_data(limit = "10MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
        pub ingredients: Option<Ingredients>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Dish updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        DishNotFound,
        DishAlreadyExists,
        FailedToUploadImage,
        FailedToUpdateDish,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Dish not found" })),
                )
                    .into_response(),
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
                Self::FailedToUpdateDish => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update dish" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
