pub mod schema;

pub use schema::{Kitty, KittyResponse};
