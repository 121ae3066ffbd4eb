//! Activity Board
//!
//! Extracurricular activities sign-up page built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with schedule, capacity and participant roster
//! - Sign-up form with activity dropdown
//! - Participant removal with confirmation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The workflow lives in the `activity-board` crate; this crate
//! supplies HTTP, reactive state and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logging::init(level);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
