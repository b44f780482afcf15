pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::debug_routes;
pub use schema::DebugState;
