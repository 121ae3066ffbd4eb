//! State Management
//!
//! Reactive page state and the controller handle.

pub mod board;

pub use board::{Board, BoardHandle, BoardState};
