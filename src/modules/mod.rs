pub mod debug;
pub mod kitty;
