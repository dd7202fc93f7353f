/*
 * Responsibility
 * - URL structure of the service (routes() re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
