pub mod auth;
pub mod dish;
pub mod order;
pub mod user;

mod router;
pub use router::get_router;
