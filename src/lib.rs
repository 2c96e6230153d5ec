pub mod config;
pub mod overlay;
pub mod pip;
pub mod player;
