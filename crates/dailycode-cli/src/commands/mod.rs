pub mod config;
pub mod generate;
pub mod list;
pub mod show;
