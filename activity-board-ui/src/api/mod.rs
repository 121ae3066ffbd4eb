//! API Layer
//!
//! Browser implementations of the controller's seams.

pub mod client;
pub mod confirm;

pub use client::{load_config, HttpActivityApi};
pub use confirm::WindowConfirm;
