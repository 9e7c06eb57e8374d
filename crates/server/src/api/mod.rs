pub mod handlers;
pub mod mentions;
pub mod middleware;
pub mod numerals;
pub mod resolve;
pub mod routes;

pub use routes::create_router;
