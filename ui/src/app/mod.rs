pub mod hyns_app;
pub mod services;

pub use hyns_app::*;
pub use services::*;
