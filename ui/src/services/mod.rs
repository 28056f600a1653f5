//! Infrastructure Services
//!
//! - **config**: delays and odds for the simulation
//! - **decision**: injectable randomness for role and outcome draws
//! - **errors**: error types shared across the crate
//! - **registry**: the device registry seam and its simulated backend
//! - **timing**: cancellable simulated latency
//!
//! Everything is WASM-first: async traits are `?Send` and timers come from
//! the browser.

pub mod config;
pub mod decision;
pub mod errors;
pub mod registry;
pub mod timing;
