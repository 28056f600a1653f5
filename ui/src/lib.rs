//! Shared UI for the HYNS smartphone management platform.

pub mod app;
pub use app::HynsApp;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
