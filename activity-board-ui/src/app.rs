//! App Root Component
//!
//! Wires the controller to the browser and lays out the page.

use activity_board::BoardController;
use leptos::*;
use std::rc::Rc;

use crate::api::{load_config, HttpActivityApi, WindowConfirm};
use crate::components::{ActivityList, MessageArea, SignupPanel};
use crate::state::{BoardHandle, BoardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    tracing::debug!(api_base = %config.api_base, "Starting activity board");

    let state = BoardState::new(config.message_timeout_ms);
    let board: BoardHandle = Rc::new(BoardController::new(
        HttpActivityApi::new(&config),
        state,
        WindowConfirm,
    ));

    provide_context(state);
    provide_context(board.clone());

    // Initial load
    spawn_local(async move {
        board.load().await;
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupPanel />
                <MessageArea />
            </section>
        </main>
    }
}
