pub mod config;
pub mod detect;
pub mod links;
pub mod packages;
pub mod release;
