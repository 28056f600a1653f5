//! Domain logic behind the HYNS screens
//!
//! - **session**: login, role, and the view router state machine
//! - **verification**: IMEI sanitizing, parsing and the lookup rule
//! - **transaction**: the sale/purchase form and its validator
//! - **security**: device reports and their aggregates
//! - **dashboard**: fixed landing-page figures
//!
//! Nothing in here touches the DOM, so it runs under plain `cargo test`.

pub mod async_state;
pub mod dashboard;
pub mod security;
pub mod session;
pub mod transaction;
pub mod verification;

pub use async_state::{AsyncState, Ticket};
