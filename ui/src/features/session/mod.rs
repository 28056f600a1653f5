pub mod login;
pub mod navigation;
pub mod types;

pub use login::*;
pub use navigation::*;
pub use types::*;
