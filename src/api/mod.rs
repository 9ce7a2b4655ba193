//! HTTP interface over [`forward`](crate::forward), [`inverse`](crate::inverse)
//! and [`to_point`](crate::to_point)

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
