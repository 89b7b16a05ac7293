pub mod upstream_client;
pub mod user_service;

pub use upstream_client::*;
pub use user_service::*;
