mod create;
mod delete;
mod list;
mod search;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dish", create::get_router())
        .nest("/dish", list::get_router())
        .nest("/dish", update::get_router())
        .nest("/dish", delete::get_router())
        .nest("/dishes", search::get_router())
}
