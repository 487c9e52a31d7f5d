pub mod config;
pub mod enrich;
pub mod route;
pub mod util;
