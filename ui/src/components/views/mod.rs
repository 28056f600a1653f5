pub mod dashboard;
pub mod placeholder;
pub mod security_admin;

pub use dashboard::*;
pub use placeholder::*;
pub use security_admin::*;
