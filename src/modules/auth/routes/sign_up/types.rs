pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 3, code = "INVALID_USER_NAME", message = "Name must be at least 3 characters long"))]
        pub name: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(min = 6, code = "INVALID_USER_PASSWORD", message = "Password must be at least 6 characters long"))]
        pub password: String,
    }
}

pub mod response {
    use crate::modules::user::repository::User;
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        UserRegistered(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserRegistered(user) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": user.id,
                        "name": user.name,
                        "email": user.email,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        SignUpFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::SignUpFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
