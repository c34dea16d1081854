pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 3, code = "INVALID_USER_NAME", message = "Name must be at least 3 characters long"))]
        pub name: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 6, code = "INVALID_USER_PASSWORD", message = "Password must be at least 6 characters long"))]
        pub password: String,
        #[validate(length(min = 6, code = "INVALID_USER_PASSWORD", message = "Password must be at least 6 characters long"))]
        pub old_password: String,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        UserUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "User updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UserNotFound,
        EmailAlreadyInUse,
        IncorrectOldPassword,
        FailedToUpdateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::IncorrectOldPassword => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Old password is incorrect" })),
                )
                    .into_response(),
                Self::FailedToUpdateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
