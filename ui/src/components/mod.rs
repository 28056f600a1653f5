//! User Interface Components
//!
//! - **forms**: login, IMEI verification and sale/purchase registration
//! - **views**: dashboard, security administration and placeholder screens
//! - **display**: loading indicator and the status chart
//! - **layout**: the role-aware sidebar
//! - **inputs** / **primitives**: labeled fields, cards, badges and alerts

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
pub mod primitives;
pub mod views;
