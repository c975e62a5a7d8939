//! HTTP request handlers.

pub mod ping_handler;
pub mod user_handler;

pub use ping_handler::ping_routes;
pub use user_handler::user_routes;
