//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging for components
//! - **formatting**: number and date rendering used by the screens
//! - **platform**: clock access with a native fallback for tests

pub mod console_macros;
pub mod formatting;
pub mod platform;

pub use formatting::*;
pub use platform::*;
