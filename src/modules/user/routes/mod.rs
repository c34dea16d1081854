mod update;
mod update_avatar;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/users", update::get_router())
        .nest("/user/avatar", update_avatar::get_router())
}
