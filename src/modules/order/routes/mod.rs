mod create;
mod list;
mod update_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/order", create::get_router())
        .nest("/order", list::get_router())
        .nest("/order", update_status::get_router())
}
