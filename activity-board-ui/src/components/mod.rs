//! UI Components
//!
//! Leptos components for the activities page.

pub mod activity_list;
pub mod message;
pub mod signup_panel;

#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

pub use activity_list::ActivityList;
pub use message::MessageArea;
pub use signup_panel::SignupPanel;
